use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tasklet_input::{Console, InputError, console::next_line};
use tracing::{debug, info};

use crate::{RegistryError, TaskParam};

/// Supplied or collected parameter values, in declaration order.
pub type ParamValues = IndexMap<String, Value>;

/// A registered task: the operation it dispatches to plus its parameters.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    /// Name of the automation operation invoked for this task.
    pub operation: String,
    /// Title shown to the operator.
    pub title: String,
    /// Longer description shown to the operator.
    pub description: String,
    /// Parameters in prompt order.
    pub params: Vec<TaskParam>,
}

impl TaskDescriptor {
    pub fn param(&self, key: &str) -> Option<&TaskParam> {
        self.params.iter().find(|param| param.key() == key)
    }
}

/// One task invocation as stored in a task file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInvocation {
    /// Task abbreviation.
    pub task: String,
    #[serde(default)]
    pub params: ParamValues,
}

/// How [`TaskRegistry::collect_params`] treats unsupplied parameters that
/// have a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Take the default without prompting.
    #[default]
    Use,
    /// Show the default and let the operator keep it or enter another value.
    Ask,
}

/// Tasks keyed by abbreviation, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: IndexMap<String, TaskDescriptor>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task, replacing any task already registered under the
    /// same abbreviation.
    ///
    /// The operation name is not checked against anything; binding it to an
    /// actual action is the caller's concern.
    pub fn add(
        mut self,
        abbreviation: impl Into<String>,
        operation: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        params: Option<Vec<TaskParam>>,
    ) -> Self {
        let abbreviation = abbreviation.into();
        let descriptor = TaskDescriptor {
            operation: operation.into(),
            title: title.into(),
            description: description.into(),
            params: params.unwrap_or_default(),
        };
        if self.tasks.insert(abbreviation.clone(), descriptor).is_some() {
            debug!(abbreviation, "task re-registered; previous entry replaced");
        }
        self
    }

    pub fn get(&self, abbreviation: &str) -> Option<&TaskDescriptor> {
        self.tasks.get(abbreviation)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaskDescriptor)> {
        self.tasks.iter().map(|(abbreviation, task)| (abbreviation.as_str(), task))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn task(&self, abbreviation: &str) -> Result<&TaskDescriptor, RegistryError> {
        self.get(abbreviation).ok_or_else(|| RegistryError::UnknownTask {
            abbreviation: abbreviation.to_string(),
        })
    }

    /// Validates programmatically supplied values for a task.
    ///
    /// Every supplied value must pass its parameter's check, every mandatory
    /// parameter must be present, and no undeclared keys may appear.
    pub fn validate_params(&self, abbreviation: &str, params: &ParamValues) -> Result<(), RegistryError> {
        let task = self.task(abbreviation)?;
        reject_unexpected(abbreviation, task, params)?;
        for param in &task.params {
            match params.get(param.key()) {
                Some(value) => {
                    param.check(value, true)?;
                }
                None if param.is_required() => {
                    return Err(RegistryError::MissingParam {
                        task: abbreviation.to_string(),
                        key: param.key().to_string(),
                    });
                }
                None => {}
            }
        }
        Ok(())
    }

    pub fn validate_invocation(&self, invocation: &TaskInvocation) -> Result<(), RegistryError> {
        self.validate_params(&invocation.task, &invocation.params)
    }

    /// Produces a complete set of values for a task.
    ///
    /// Parameters are visited in declaration order. Supplied values are
    /// checked; missing ones fall back to their default (offered to the
    /// operator first under [`DefaultPolicy::Ask`]); the rest are entered
    /// through the parameter's input box.
    pub fn collect_params(
        &self,
        abbreviation: &str,
        supplied: &ParamValues,
        defaults: DefaultPolicy,
        console: &mut dyn Console,
    ) -> Result<ParamValues, RegistryError> {
        let task = self.task(abbreviation)?;
        reject_unexpected(abbreviation, task, supplied)?;

        let mut values = ParamValues::new();
        for param in &task.params {
            let value = match (supplied.get(param.key()), param.default_value()) {
                (Some(value), _) => {
                    param.check(value, true)?;
                    value.clone()
                }
                (None, Some(default)) if defaults == DefaultPolicy::Use => default.clone(),
                (None, Some(default)) => {
                    announce(param, console)?;
                    if keep_default(default, console)? {
                        default.clone()
                    } else {
                        param.input_box().produce(console)?
                    }
                }
                (None, None) => {
                    announce(param, console)?;
                    param.input_box().produce(console)?
                }
            };
            values.insert(param.key().to_string(), value);
        }
        info!(task = abbreviation, params = values.len(), "collected task parameters");
        Ok(values)
    }
}

fn announce(param: &TaskParam, console: &mut dyn Console) -> Result<(), InputError> {
    console.print(&format!("{} ({})", param.title(), param.key()))?;
    console.print(param.description())?;
    Ok(())
}

fn keep_default(default: &Value, console: &mut dyn Console) -> Result<bool, InputError> {
    console.print(&format!("default: {default}"))?;
    loop {
        match next_line(console, "keep the default? (y/n): ")?.trim() {
            "" | "y" => return Ok(true),
            "n" => return Ok(false),
            _ => console.print("please answer y or n")?,
        }
    }
}

fn reject_unexpected(abbreviation: &str, task: &TaskDescriptor, params: &ParamValues) -> Result<(), RegistryError> {
    match params.keys().find(|key| task.param(key).is_none()) {
        Some(key) => Err(RegistryError::UnexpectedParam {
            task: abbreviation.to_string(),
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;
    use tasklet_input::LineConsole;
    use tasklet_types::ParamKind;

    fn times_param() -> TaskParam {
        TaskParam::builder("times").kind(ParamKind::Integer).build().unwrap()
    }

    fn mode_param() -> TaskParam {
        TaskParam::builder("mode").kind(ParamKind::Integer).default_value(1).build().unwrap()
    }

    fn registry() -> TaskRegistry {
        TaskRegistry::new()
            .add("r4", "shouqu", "Collect gifts", "Collect every gift", None)
            .add("r7", "goumaimana", "Buy mana", "Buy mana a number of times", Some(vec![mode_param(), times_param()]))
    }

    #[test]
    fn add_keeps_registration_order_and_defaults_params() {
        let registry = registry();
        let order: Vec<&str> = registry.iter().map(|(abbreviation, _)| abbreviation).collect();
        assert_eq!(order, vec!["r4", "r7"]);
        assert!(registry.get("r4").unwrap().params.is_empty());
    }

    #[test]
    fn re_adding_overwrites() {
        let registry = registry().add("r4", "shouqurenwu", "Collect missions", "", None);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("r4").unwrap().operation, "shouqurenwu");
    }

    #[test]
    fn validate_params_reports_each_failure() {
        let registry = registry();
        let mut params = ParamValues::new();
        assert!(matches!(
            registry.validate_params("r7", &params),
            Err(RegistryError::MissingParam { ref key, .. }) if key == "times"
        ));

        params.insert("times".into(), json!("three"));
        assert!(matches!(registry.validate_params("r7", &params), Err(RegistryError::Invalid(_))));

        params.insert("times".into(), json!(3));
        assert!(registry.validate_params("r7", &params).is_ok());

        params.insert("speed".into(), json!(2));
        assert!(matches!(
            registry.validate_params("r7", &params),
            Err(RegistryError::UnexpectedParam { ref key, .. }) if key == "speed"
        ));

        assert!(matches!(
            registry.validate_params("zz", &ParamValues::new()),
            Err(RegistryError::UnknownTask { .. })
        ));
    }

    #[test]
    fn collect_prompts_only_for_missing_mandatory_params() {
        let registry = registry();
        let mut console = LineConsole::new(Cursor::new("x\n5\n".to_string()), Vec::new());
        let values = registry.collect_params("r7", &ParamValues::new(), DefaultPolicy::Use, &mut console).unwrap();
        assert_eq!(values.get("mode"), Some(&json!(1)));
        assert_eq!(values.get("times"), Some(&json!(5)));
        let keys: Vec<&String> = values.keys().collect();
        assert_eq!(keys, vec!["mode", "times"]);
    }

    #[test]
    fn collect_checks_supplied_values() {
        let registry = registry();
        let mut supplied = ParamValues::new();
        supplied.insert("times".into(), json!(2.5));
        let mut console = LineConsole::new(Cursor::new(String::new()), Vec::new());
        assert!(matches!(
            registry.collect_params("r7", &supplied, DefaultPolicy::Use, &mut console),
            Err(RegistryError::Invalid(_))
        ));

        supplied.insert("times".into(), json!(2));
        supplied.insert("mode".into(), json!(0));
        let values = registry.collect_params("r7", &supplied, DefaultPolicy::Use, &mut console).unwrap();
        assert_eq!(values.get("mode"), Some(&json!(0)));
    }

    #[test]
    fn asking_offers_each_default_before_using_it() {
        let registry = registry();
        let mut console = LineConsole::new(Cursor::new("maybe\n\n4\n".to_string()), Vec::new());
        let values = registry
            .collect_params("r7", &ParamValues::new(), DefaultPolicy::Ask, &mut console)
            .unwrap();
        assert_eq!(values.get("mode"), Some(&json!(1)));
        assert_eq!(values.get("times"), Some(&json!(4)));
        let output = String::from_utf8_lossy(console.writer()).into_owned();
        assert!(output.contains("default: 1"), "{output}");
        assert_eq!(output.matches("please answer y or n").count(), 1);
    }

    #[test]
    fn declining_a_default_runs_the_input_box() {
        let registry = registry();
        let mut console = LineConsole::new(Cursor::new("n\n0\n4\n".to_string()), Vec::new());
        let values = registry
            .collect_params("r7", &ParamValues::new(), DefaultPolicy::Ask, &mut console)
            .unwrap();
        assert_eq!(values.get("mode"), Some(&json!(0)));
        assert_eq!(values.get("times"), Some(&json!(4)));
    }

    #[test]
    fn invocation_deserializes_with_ordered_params() {
        let invocation: TaskInvocation =
            serde_json::from_str(r#"{ "task": "r7", "params": { "times": 3, "mode": 0 } }"#).unwrap();
        let keys: Vec<&String> = invocation.params.keys().collect();
        assert_eq!(keys, vec!["times", "mode"]);
        assert!(registry().validate_invocation(&invocation).is_ok());
    }
}
