//! Shared type definitions for the task registry, the input boxes and the CLI.
//!
//! Values flowing through the registry are plain `serde_json::Value`s so that
//! parameters collected interactively and parameters loaded from a file go
//! through the same validation path.

pub mod catalog;
pub mod sweep;
pub mod team;
pub mod validation;

use std::fmt;

use serde_json::Value;

pub use catalog::{AreaStages, HardCatalog, NormalCatalog, StageCatalog, StageCatalogs};
pub use sweep::{SweepEntry, SweepEntryError};
pub use team::{TOP_POWER_TOKEN, TeamSlot, TeamSlotError};

/// Declared type of a task parameter.
///
/// The first four kinds have a standard input box; `List` values always need
/// an explicitly supplied box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Whole numbers.
    Integer,
    /// Real numbers; integers are accepted too.
    Real,
    /// Free-form text.
    Text,
    /// `True` / `False`.
    Boolean,
    /// Ordered list of string tokens.
    List,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Integer => "integer",
            ParamKind::Real => "real",
            ParamKind::Text => "text",
            ParamKind::Boolean => "boolean",
            ParamKind::List => "list",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short name of a JSON value's type, used in validation diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "real",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
