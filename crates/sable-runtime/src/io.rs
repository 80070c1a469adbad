//! Host i/o boundary
//!
//! The interpreter consumes a line-oriented input source and a text
//! output sink. Process-backed implementations cover normal runs;
//! `ScriptedInput` and a plain `String` sink give tests and embedders
//! deterministic i/o.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented text input consumed by `read`.
pub trait InputSource {
    /// One line without its terminator, or `None` when exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Text output produced by `print`.
pub trait OutputSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Reads lines from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Writes straight to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// A fixed sequence of input lines.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw text into lines, as read from an input file.
    pub fn from_text(text: &str) -> Self {
        ScriptedInput::new(text.lines().map(str::to_string))
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

impl OutputSink for String {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}
