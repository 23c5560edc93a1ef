use std::sync::Arc;

use serde_json::Value;
use tasklet_input::{InputBox, standard_input_box};
use tasklet_types::ParamKind;
use thiserror::Error;

const DEFAULT_DESCRIPTION: &str = "No description";

/// Configuration errors raised while declaring a parameter.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("parameter '{key}' of kind {} needs an explicit input box", .kind.map_or("any", ParamKind::as_str))]
    MissingInputBox { key: String, kind: Option<ParamKind> },
}

/// A supplied value was rejected by the parameter's input box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter '{key}' is invalid: {message}")]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

/// One declared parameter of a task.
///
/// The input box is resolved when the parameter is built: an explicit box
/// wins, otherwise the standard box for the declared kind is used.
#[derive(Debug, Clone)]
pub struct TaskParam {
    key: String,
    kind: Option<ParamKind>,
    title: String,
    description: String,
    default: Option<Value>,
    input_box: Arc<dyn InputBox>,
}

impl TaskParam {
    pub fn builder(key: impl Into<String>) -> TaskParamBuilder {
        TaskParamBuilder {
            key: key.into(),
            kind: None,
            title: None,
            description: None,
            default: None,
            input_box: None,
        }
    }

    /// Name of the argument passed to the task's operation.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Declared kind; `None` accepts any type.
    pub fn kind(&self) -> Option<ParamKind> {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Default value; `None` means the parameter is mandatory.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    pub fn input_box(&self) -> &dyn InputBox {
        self.input_box.as_ref()
    }

    /// Validates `value` with the bound input box.
    ///
    /// Returns `Ok(true)` when the value is accepted. A rejected value is an
    /// `Err` when `raise_on_fail` is set and `Ok(false)` otherwise.
    pub fn check(&self, value: &Value, raise_on_fail: bool) -> Result<bool, ValidationError> {
        let message = self.input_box.validate(value);
        if message.is_empty() {
            return Ok(true);
        }
        if raise_on_fail {
            Err(ValidationError {
                key: self.key.clone(),
                message,
            })
        } else {
            Ok(false)
        }
    }
}

#[derive(Debug)]
pub struct TaskParamBuilder {
    key: String,
    kind: Option<ParamKind>,
    title: Option<String>,
    description: Option<String>,
    default: Option<Value>,
    input_box: Option<Arc<dyn InputBox>>,
}

impl TaskParamBuilder {
    pub fn kind(mut self, kind: ParamKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn input_box(mut self, input_box: impl InputBox + 'static) -> Self {
        self.input_box = Some(Arc::new(input_box));
        self
    }

    /// Resolves the input box and freezes the parameter.
    pub fn build(self) -> Result<TaskParam, ParamError> {
        let input_box = match self.input_box {
            Some(input_box) => input_box,
            None => self
                .kind
                .and_then(standard_input_box)
                .ok_or_else(|| ParamError::MissingInputBox {
                    key: self.key.clone(),
                    kind: self.kind,
                })?,
        };
        Ok(TaskParam {
            title: self.title.unwrap_or_else(|| self.key.clone()),
            description: self.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            key: self.key,
            kind: self.kind,
            default: self.default,
            input_box,
        })
    }
}
