//! Input sources and line reading.
//!
//! Lines are read into a caller-owned buffer so one allocation serves the
//! whole run. A final line without a trailing newline is still a line.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path).map_err(|e| Error::read(&self.name(), e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reads newline-delimited lines, tracking the 1-based line number.
pub struct LineReader<R> {
    reader: R,
    name: String,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
            line: 0,
        }
    }

    /// Read the next line into `buf` without its trailing `\n`.
    ///
    /// `buf` is cleared first. Returns `false` at end of input.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<bool> {
        buf.clear();
        let read = self.reader.read_until(b'\n', buf).map_err(|e| {
            Error::read(&self.name, e).with_input_line(self.line + 1)
        })?;
        if read == 0 {
            return Ok(false);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        self.line += 1;
        Ok(true)
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}
