use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that end an interactive protocol.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("console error: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before a value was entered")]
    EndOfInput,
}

/// A rejected editor command. The editor reports it and keeps its state.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{command} expects {expected} argument(s), got {found}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("'{token}' is not an integer")]
    NotInteger { token: String },

    #[error("cannot read {}: {source}", .path.display())]
    ImportRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("import stopped at line {line} of {}: {reason}", .path.display())]
    ImportLine { path: PathBuf, line: usize, reason: String },

    #[error(transparent)]
    Console(#[from] io::Error),
}

impl CommandError {
    pub fn argument_count(command: &'static str, expected: usize, found: usize) -> Self {
        Self::ArgumentCount {
            command,
            expected,
            found,
        }
    }

    pub fn not_integer(token: impl Into<String>) -> Self {
        Self::NotInteger { token: token.into() }
    }
}
