//! Tokenizing of editor command lines.
//!
//! Commands are whitespace separated with no quoting or escaping, so an
//! argument can never contain a space.

/// A command line split into its verb and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub verb: &'a str,
    pub args: Vec<&'a str>,
}

/// Splits a line into a verb and its arguments; `None` for a blank line.
///
/// # Example
/// ```rust
/// use tasklet_util::command_line::split_command;
///
/// let command = split_command("add 3  all 2").expect("non-blank line");
/// assert_eq!(command.verb, "add");
/// assert_eq!(command.args, vec!["3", "all", "2"]);
/// assert!(split_command("   ").is_none());
/// ```
pub fn split_command(line: &str) -> Option<CommandLine<'_>> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?;
    Some(CommandLine {
        verb,
        args: tokens.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_argument_order() {
        let command = split_command("file ~/plans/n.txt").expect("command");
        assert_eq!(command.verb, "file");
        assert_eq!(command.args, vec!["~/plans/n.txt"]);
    }

    #[test]
    fn verb_without_arguments() {
        let command = split_command("end\r").expect("command");
        assert_eq!(command.verb, "end");
        assert!(command.args.is_empty());
    }
}
