//! Parsing of sweep editor command lines.

use tasklet_util::split_command;

use crate::CommandError;

/// Stage argument of `add`: one stage or every stage of the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSelector {
    All,
    Stage(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepCommand {
    Clear,
    Add { area: i64, stage: StageSelector, times: i64 },
    Del { area: i64, stage: i64, times: i64 },
    Show,
    File { path: String },
    Help,
    End,
    Unknown { verb: String },
}

impl SweepCommand {
    /// Parses one line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let Some(command) = split_command(line) else {
            return Ok(None);
        };
        let args = command.args.as_slice();
        let parsed = match command.verb {
            "clear" => SweepCommand::Clear,
            "add" => {
                let (area, stage, times) = parse_add_args(args)?;
                SweepCommand::Add { area, stage, times }
            }
            "del" => {
                let [area, stage, times] = expect_args::<3>("del", args)?;
                SweepCommand::Del {
                    area: parse_int(area)?,
                    stage: parse_int(stage)?,
                    times: parse_int(times)?,
                }
            }
            "show" => SweepCommand::Show,
            "file" => {
                let [path] = expect_args::<1>("file", args)?;
                SweepCommand::File { path: path.to_string() }
            }
            "help" => SweepCommand::Help,
            "end" => SweepCommand::End,
            other => SweepCommand::Unknown { verb: other.to_string() },
        };
        Ok(Some(parsed))
    }
}

/// Parses the `A B T` arguments shared by `add` and file import lines.
pub(crate) fn parse_add_args(args: &[&str]) -> Result<(i64, StageSelector, i64), CommandError> {
    let [area, stage, times] = expect_args::<3>("add", args)?;
    let area = parse_int(area)?;
    let stage = if stage == "all" {
        StageSelector::All
    } else {
        StageSelector::Stage(parse_int(stage)?)
    };
    Ok((area, stage, parse_int(times)?))
}

fn expect_args<'a, const N: usize>(command: &'static str, args: &[&'a str]) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::argument_count(command, N, args.len()))
}

fn parse_int(token: &str) -> Result<i64, CommandError> {
    token.parse().map_err(|_| CommandError::not_integer(token))
}
