//! Sweep editors: build a sweep plan through a small command interpreter.
//!
//! The normal and hard variants share the interpreter and differ only in the
//! catalog they check stages against, in whether `add A all T` is available,
//! and in their help text.

mod command;
mod plan;

use std::{fs, sync::Arc};

use serde_json::Value;
use tasklet_types::{HardCatalog, NormalCatalog, StageCatalog, validation::validate_sweep_tokens};
use tasklet_util::expand_tilde;
use tracing::{debug, info, warn};

pub use command::{StageSelector, SweepCommand};
pub use plan::SweepPlan;

use crate::{CommandError, Console, InputBox, InputError, console::next_line};
use command::parse_add_args;

const NORMAL_HELP: &[&str] = &[
    "Commands (separate arguments with spaces):",
    "add A B T: sweep stage A-B T more times",
    "add A all T: sweep every stage of area A T more times",
    "del A B T: sweep stage A-B T fewer times",
    "file PATH: import from a file",
    "   one record per line, three integers A B T: sweep A-B T times",
    "clear: clear the plan",
    "show: show the current plan",
    "end: save and leave the editor",
];

const HARD_HELP: &[&str] = &[
    "Enter hard stage ids.",
    "Commands (separate arguments with spaces):",
    "add A B T: sweep hard stage A-B T more times",
    "del A B T: sweep hard stage A-B T fewer times",
    "file PATH: import from a file",
    "   one record per line, three integers A B T: sweep A-B T times",
    "clear: clear the plan",
    "show: show the current plan",
    "end: save and leave the editor",
];

/// Sweep editor bound to a stage catalog.
#[derive(Debug, Clone)]
pub struct SweepBox<C> {
    catalog: Arc<C>,
    help: &'static [&'static str],
}

/// Normal stages; supports `add A all T`.
pub type NormalSweepBox = SweepBox<NormalCatalog>;
/// Hard stages.
pub type HardSweepBox = SweepBox<HardCatalog>;

impl SweepBox<NormalCatalog> {
    pub fn new(catalog: Arc<NormalCatalog>) -> Self {
        Self {
            catalog,
            help: NORMAL_HELP,
        }
    }
}

impl SweepBox<HardCatalog> {
    pub fn new(catalog: Arc<HardCatalog>) -> Self {
        Self { catalog, help: HARD_HELP }
    }
}

impl<C: StageCatalog> SweepBox<C> {
    /// Starts an editing session with an empty plan.
    pub fn editor(&self) -> SweepEditor<'_, C> {
        SweepEditor {
            catalog: &self.catalog,
            help: self.help,
            plan: SweepPlan::new(),
        }
    }
}

impl<C: StageCatalog> InputBox for SweepBox<C> {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        let mut editor = self.editor();
        console.print("Enter stage ids (type help for the commands)")?;
        loop {
            let line = next_line(console, "> ")?;
            if editor.step(&line, console)? == Flow::Finish {
                return Ok(Value::from(editor.plan().to_tokens()));
            }
        }
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_sweep_tokens(candidate).err().unwrap_or_default()
    }
}

/// Whether the interpreter keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Finish,
}

/// One editing session: the in-progress plan plus the catalog it checks against.
#[derive(Debug)]
pub struct SweepEditor<'a, C> {
    catalog: &'a C,
    help: &'static [&'static str],
    plan: SweepPlan,
}

impl<C: StageCatalog> SweepEditor<'_, C> {
    pub fn plan(&self) -> &SweepPlan {
        &self.plan
    }

    /// Runs one command line.
    ///
    /// A rejected command is reported on the console and leaves the plan as it
    /// was, except for `file`, whose already-imported lines stay applied.
    pub fn step(&mut self, line: &str, console: &mut dyn Console) -> Result<Flow, InputError> {
        let outcome = SweepCommand::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command, console),
            None => Ok(Flow::Continue),
        });
        match outcome {
            Ok(flow) => Ok(flow),
            Err(CommandError::Console(error)) => Err(InputError::Io(error)),
            Err(error) => {
                debug!(%error, line, "rejected sweep command");
                console.print(&format!("invalid command: {error}"))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: SweepCommand, console: &mut dyn Console) -> Result<Flow, CommandError> {
        debug!(?command, "sweep command");
        match command {
            SweepCommand::Clear => self.plan.clear(),
            SweepCommand::Add { area, stage, times } => self.add(area, stage, times, console)?,
            SweepCommand::Del { area, stage, times } => self.plan.subtract(area, stage, times),
            SweepCommand::Show => {
                for entry in self.plan.entries() {
                    console.print(&format!("{}-{} {} times", entry.area, entry.stage, entry.times))?;
                }
            }
            SweepCommand::File { path } => self.import(&path, console)?,
            SweepCommand::Help => {
                for line in self.help {
                    console.print(line)?;
                }
            }
            SweepCommand::End => return Ok(Flow::Finish),
            SweepCommand::Unknown { verb } => console.print(&format!("unknown command: {verb}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Adds to the plan after checking the catalog. Unknown stages are
    /// reported and nothing is added.
    fn add(&mut self, area: i64, stage: StageSelector, times: i64, console: &mut dyn Console) -> Result<(), CommandError> {
        if !self.catalog.has_area(area) {
            console.print(&format!("area {area} is not in the catalog"))?;
            return Ok(());
        }
        match stage {
            StageSelector::All => {
                let Some(stages) = self.catalog.all_stages(area) else {
                    console.print("'all' is not available for these stages")?;
                    return Ok(());
                };
                for stage in stages {
                    self.plan.add(area, stage, times);
                }
            }
            StageSelector::Stage(stage) => {
                if !self.catalog.has_stage(area, stage) {
                    console.print(&format!("stage {} is not in the catalog", self.catalog.stage_label(area, stage)))?;
                    return Ok(());
                }
                self.plan.add(area, stage, times);
            }
        }
        Ok(())
    }

    /// Applies every `A B T` line of a file as an `add`.
    ///
    /// A malformed line stops the import; earlier lines stay applied.
    fn import(&mut self, path: &str, console: &mut dyn Console) -> Result<(), CommandError> {
        let path = expand_tilde(path);
        let content = fs::read_to_string(&path).map_err(|source| CommandError::ImportRead {
            path: path.clone(),
            source,
        })?;

        let mut applied = 0usize;
        for (index, line) in content.lines().enumerate() {
            let args: Vec<&str> = line.split_whitespace().collect();
            if args.is_empty() {
                continue;
            }
            let (area, stage, times) = parse_add_args(&args).map_err(|error| {
                warn!(path = %path.display(), line = index + 1, applied, "sweep import aborted");
                CommandError::ImportLine {
                    path: path.clone(),
                    line: index + 1,
                    reason: error.to_string(),
                }
            })?;
            self.add(area, stage, times, console)?;
            applied += 1;
        }
        info!(path = %path.display(), applied, "imported sweep plan");
        Ok(())
    }
}
