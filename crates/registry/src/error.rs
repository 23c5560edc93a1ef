use std::{io, path::PathBuf};

use tasklet_input::InputError;
use thiserror::Error;

use crate::ValidationError;

/// Errors raised while validating or collecting a task's parameters.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown task '{abbreviation}'")]
    UnknownTask { abbreviation: String },

    #[error("task '{task}' is missing required parameter '{key}'")]
    MissingParam { task: String, key: String },

    #[error("task '{task}' has no parameter named '{key}'")]
    UnexpectedParam { task: String, key: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while loading a stage catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read stage catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stage catalog {origin} is malformed: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
