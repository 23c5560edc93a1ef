use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::json;
use tasklet_input::StdConsole;
use tasklet_registry::{DefaultPolicy, ParamValues, TaskInvocation, TaskRegistry, TaskletConfig, builtin_registry, load_catalogs};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "tasklet", version, about = "Browse tasks and enter their parameters")]
struct Cli {
    /// Stage catalog file used instead of the configured or embedded one.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every registered task.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show a task and its parameters.
    Show { abbreviation: String },
    /// Enter the parameters of a task interactively.
    Collect {
        abbreviation: String,
        /// JSON or YAML object with values that should not be prompted for.
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,
        /// Write the invocation here instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Offer each default for confirmation instead of taking it silently.
        #[arg(long)]
        ask_defaults: bool,
    },
    /// Validate a JSON or YAML list of task invocations.
    Check { file: PathBuf },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let registry = load_registry(cli.catalog.as_deref())?;

    match cli.command {
        Command::List { json } => run_list(&registry, json),
        Command::Show { abbreviation } => run_show(&registry, &abbreviation),
        Command::Collect {
            abbreviation,
            params,
            out,
            ask_defaults,
        } => {
            let defaults = if ask_defaults { DefaultPolicy::Ask } else { DefaultPolicy::Use };
            run_collect(&registry, &abbreviation, params.as_deref(), out.as_deref(), defaults)
        }
        Command::Check { file } => run_check(&registry, &file),
    }
}

/// Logs go to stderr; stdout carries prompts and emitted JSON.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_registry(catalog_override: Option<&Path>) -> Result<TaskRegistry> {
    let Ok(config) = TaskletConfig::load();
    let catalog_path = catalog_override.map(Path::to_path_buf).or_else(|| config.catalog_path());
    debug!(catalog = ?catalog_path, "loading stage catalog");
    let catalogs = load_catalogs(catalog_path.as_deref()).context("failed to load the stage catalog")?;
    builtin_registry(catalogs).context("failed to build the task registry")
}

fn run_list(registry: &TaskRegistry, as_json: bool) -> Result<()> {
    if as_json {
        let tasks: Vec<_> = registry
            .iter()
            .map(|(abbreviation, task)| {
                json!({
                    "abbreviation": abbreviation,
                    "operation": task.operation,
                    "title": task.title,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let width = registry.iter().map(|(abbreviation, _)| abbreviation.len()).max().unwrap_or(0);
    for (abbreviation, task) in registry.iter() {
        println!("{abbreviation:<width$}  {}", task.title);
    }
    Ok(())
}

fn run_show(registry: &TaskRegistry, abbreviation: &str) -> Result<()> {
    let task = registry
        .get(abbreviation)
        .with_context(|| format!("unknown task '{abbreviation}'"))?;
    println!("{} ({abbreviation})", task.title);
    println!("operation: {}", task.operation);
    println!("{}", task.description);
    if task.params.is_empty() {
        println!("no parameters");
        return Ok(());
    }
    for param in &task.params {
        let kind = param.kind().map_or("any", |kind| kind.as_str());
        match param.default_value() {
            Some(default) => println!("  {} [{kind}, default {default}]: {}", param.key(), param.title()),
            None => println!("  {} [{kind}, required]: {}", param.key(), param.title()),
        }
    }
    Ok(())
}

fn run_collect(
    registry: &TaskRegistry,
    abbreviation: &str,
    params: Option<&Path>,
    out: Option<&Path>,
    defaults: DefaultPolicy,
) -> Result<()> {
    let supplied: ParamValues = match params {
        Some(path) => read_document(path)?,
        None => ParamValues::new(),
    };
    let mut console = StdConsole::stdio();
    let params = registry
        .collect_params(abbreviation, &supplied, defaults, &mut console)
        .with_context(|| format!("failed to collect parameters for '{abbreviation}'"))?;
    let invocation = TaskInvocation {
        task: abbreviation.to_string(),
        params,
    };
    let rendered = serde_json::to_string_pretty(&invocation)?;
    match out {
        Some(path) => {
            fs::write(path, format!("{rendered}\n")).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "invocation written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_check(registry: &TaskRegistry, file: &Path) -> Result<()> {
    let invocations: Vec<TaskInvocation> = read_document(file)?;
    for (index, invocation) in invocations.iter().enumerate() {
        if let Err(error) = registry.validate_invocation(invocation) {
            bail!("invocation {} ({}) is invalid: {error}", index + 1, invocation.task);
        }
    }
    println!("{} invocations valid", invocations.len());
    Ok(())
}

/// Reads a JSON or YAML document; `.yaml`/`.yml` files go through YAML,
/// everything else through JSON.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| matches!(extension, "yaml" | "yml"));
    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
    }
}
