//! Task registry: declared tasks, their typed parameters and the input boxes
//! bound to them.
//!
//! The registry is plain data built once at startup by [`builtin_registry`]
//! and passed to whoever needs it. It validates parameter values supplied
//! programmatically and collects missing ones interactively; it never runs
//! the operations it names.

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod param;

pub use builtin::builtin_registry;
pub use catalog::{embedded_catalogs, load_catalogs};
pub use config::{TaskletConfig, default_config_path};
pub use error::{CatalogError, RegistryError};
pub use models::{DefaultPolicy, ParamValues, TaskDescriptor, TaskInvocation, TaskRegistry};
pub use param::{ParamError, TaskParam, TaskParamBuilder, ValidationError};
