//! Line-oriented console boundary.
//!
//! The boxes never touch stdin/stdout directly; they talk to a [`Console`] so
//! the interpreters can be driven by scripted input in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::InputError;

pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    /// Returns `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as
    /// [`io::ErrorKind::InvalidData`].
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Prints one line of operator-facing text.
    fn print(&mut self, line: &str) -> io::Result<()>;
}

const UNREADABLE_LINE: &str = "input is not valid UTF-8, please try again";

/// Reads the next line, turning end of input into [`InputError::EndOfInput`].
///
/// Undecodable lines are reported and the prompt is shown again.
pub fn next_line(console: &mut dyn Console, prompt: &str) -> Result<String, InputError> {
    loop {
        match console.read_line(prompt) {
            Ok(line) => return line.ok_or(InputError::EndOfInput),
            Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                debug!(%error, "discarded undecodable line");
                console.print(UNREADABLE_LINE)?;
            }
            Err(error) => return Err(error.into()),
        }
    }
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

pub type StdConsole = LineConsole<StdinLock<'static>, Stdout>;

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8(bytes).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}
