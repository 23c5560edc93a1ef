use std::io::Cursor;

use serde_json::json;
use tasklet_input::LineConsole;
use tasklet_registry::{DefaultPolicy, ParamValues, RegistryError, TaskInvocation, TaskRegistry, builtin_registry};
use tasklet_types::StageCatalogs;

fn load_fixture() -> TaskRegistry {
    let catalog = include_str!("data/catalog_fixture.json");
    let catalogs: StageCatalogs = serde_json::from_str(catalog).expect("load catalog fixture");
    builtin_registry(catalogs).expect("build registry from fixture")
}

fn collect(registry: &TaskRegistry, task: &str, input: &str) -> (Result<ParamValues, RegistryError>, String) {
    let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());
    let result = registry.collect_params(task, &ParamValues::new(), DefaultPolicy::Use, &mut console);
    (result, String::from_utf8_lossy(console.writer()).into_owned())
}

#[test]
fn hard_sweep_collects_merged_plan() {
    let registry = load_fixture();
    let (result, output) = collect(&registry, "s3", "add 7 1 3\nadd 7 1 2\nadd 7 9 1\nend\n");
    let values = result.expect("collected values");
    assert_eq!(values.get("tu_dict"), Some(&json!(["7-1-5"])));
    assert!(output.contains("Sweep list (tu_dict)"), "title announced: {output}");
}

#[test]
fn normal_sweep_all_uses_catalog_fixture() {
    let registry = load_fixture();
    let (result, _) = collect(&registry, "s2", "add 1 all 1\ndel 1 4 1\nend\n");
    let values = result.expect("collected values");
    assert_eq!(values.get("tu_dict"), Some(&json!(["1-1-1", "1-2-1", "1-3-1", "1-5-1"])));
}

#[test]
fn dungeon_collects_scalars_then_teams() {
    let registry = load_fixture();
    let (result, _) = collect(&registry, "d5", "3\n2\n1-1\nzhanli\nend\n");
    let values = result.expect("collected values");
    let keys: Vec<&str> = values.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["dxc_id", "mode", "stop_criteria", "after_stop", "teams"]);
    assert_eq!(values.get("stop_criteria"), Some(&json!(0)));
    assert_eq!(values.get("teams"), Some(&json!(["1-1", "zhanli"])));
}

#[test]
fn running_out_of_input_is_an_input_error() {
    let registry = load_fixture();
    let (result, _) = collect(&registry, "d1", "maybe\n");
    assert!(matches!(result, Err(RegistryError::Input(_))));
}

#[test]
fn batch_file_invocations_validate() {
    let registry = load_fixture();
    let batch: Vec<TaskInvocation> = serde_json::from_value(json!([
        { "task": "r4" },
        { "task": "s2", "params": { "tu_dict": ["1-2-3", "7-5-1"] } },
        { "task": "d5", "params": { "dxc_id": 3, "mode": 1, "teams": ["", "zhanli", "2-3"] } },
        { "task": "r6", "params": { "times": 2 } }
    ]))
    .expect("batch");
    for invocation in &batch {
        registry
            .validate_invocation(invocation)
            .unwrap_or_else(|error| panic!("{} should validate: {error}", invocation.task));
    }
}

#[test]
fn batch_file_rejections_name_the_problem() {
    let registry = load_fixture();
    let invalid = TaskInvocation {
        task: "d5".into(),
        params: serde_json::from_value(json!({ "dxc_id": 3, "mode": 1, "teams": ["1-2", "zhanli", "end"] }))
            .expect("params"),
    };
    let error = registry.validate_invocation(&invalid).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("teams"), "{message}");
    assert!(message.contains("'end'"), "{message}");
}
