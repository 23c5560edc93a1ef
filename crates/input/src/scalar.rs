//! Input boxes for the four standard scalar kinds.

use std::sync::Arc;

use serde_json::{Number, Value};
use tasklet_types::{ParamKind, validation::validate_scalar};

use crate::{Console, InputBox, InputError, console::next_line};

const RETRY_MESSAGE: &str = "invalid input, please try again";

/// Whole numbers.
///
/// Only plain digit strings are accepted interactively, so a negative number
/// cannot be typed in; supply one through a task file instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntBox;

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatBox;

/// Free text; the line is taken as entered, empty included.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrBox;

/// Exactly `True` or `False`, case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolBox;

impl InputBox for IntBox {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        loop {
            let text = next_line(console, "enter an integer: ")?;
            if !text.is_empty()
                && text.bytes().all(|byte| byte.is_ascii_digit())
                && let Ok(number) = text.parse::<i64>()
            {
                return Ok(Value::from(number));
            }
            console.print(RETRY_MESSAGE)?;
        }
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_scalar(candidate, ParamKind::Integer).err().unwrap_or_default()
    }
}

impl InputBox for FloatBox {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        loop {
            let text = next_line(console, "enter a real number: ")?;
            if let Ok(number) = text.trim().parse::<f64>()
                && let Some(number) = Number::from_f64(number)
            {
                return Ok(Value::Number(number));
            }
            console.print(RETRY_MESSAGE)?;
        }
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_scalar(candidate, ParamKind::Real).err().unwrap_or_default()
    }
}

impl InputBox for StrBox {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        next_line(console, "enter a string: ").map(Value::String)
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_scalar(candidate, ParamKind::Text).err().unwrap_or_default()
    }
}

impl InputBox for BoolBox {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        loop {
            match next_line(console, "enter True or False: ")?.as_str() {
                "True" => return Ok(Value::Bool(true)),
                "False" => return Ok(Value::Bool(false)),
                _ => console.print(RETRY_MESSAGE)?,
            }
        }
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_scalar(candidate, ParamKind::Boolean).err().unwrap_or_default()
    }
}

/// The standard box for a kind, or `None` when the kind needs its own box.
pub fn standard_input_box(kind: ParamKind) -> Option<Arc<dyn InputBox>> {
    match kind {
        ParamKind::Integer => Some(Arc::new(IntBox)),
        ParamKind::Real => Some(Arc::new(FloatBox)),
        ParamKind::Text => Some(Arc::new(StrBox)),
        ParamKind::Boolean => Some(Arc::new(BoolBox)),
        ParamKind::List => None,
    }
}
