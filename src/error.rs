//! Error types for field extraction.

use std::fmt;
use std::io;

/// Position information for error reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    /// Byte offset in the field specification.
    pub source_pos: Option<usize>,
    /// Line number in the input (1-based).
    pub input_line: Option<usize>,
}

/// What went wrong. Every kind ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field specification failed to parse.
    InvalidSpecification,
    /// The input stream failed for a reason other than end of input.
    InputReadFailure,
    /// Writing to the output stream failed.
    OutputWriteFailure,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    /// The error message.
    pub message: String,
    /// Position information for the error.
    pub position: Position,
    source: Option<io::Error>,
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: Position::default(),
            source: None,
        }
    }

    /// A field specification that could not be parsed.
    pub fn invalid_spec(message: impl Into<String>, pos: usize) -> Self {
        Self::new(ErrorKind::InvalidSpecification, message).with_source_pos(pos)
    }

    /// A read failure on the named input.
    pub fn read(input: &str, err: io::Error) -> Self {
        Self {
            source: Some(err),
            ..Self::new(
                ErrorKind::InputReadFailure,
                format!("unable to read {}", input),
            )
        }
    }

    /// A write failure on the output stream.
    pub fn write(err: io::Error) -> Self {
        Self {
            source: Some(err),
            ..Self::new(ErrorKind::OutputWriteFailure, "unable to write output")
        }
    }

    /// Add source position to an existing error.
    pub fn with_source_pos(mut self, pos: usize) -> Self {
        self.position.source_pos = Some(pos);
        self
    }

    /// Add input line to an existing error.
    pub fn with_input_line(mut self, line: usize) -> Self {
        self.position.input_line = Some(line);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        match (self.position.source_pos, self.position.input_line) {
            (Some(pos), Some(line)) => {
                write!(f, " (at position {}, input line {})", pos, line)?
            }
            (Some(pos), None) => write!(f, " (at position {})", pos)?,
            (None, Some(line)) => write!(f, " (at input line {})", line)?,
            (None, None) => {}
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for field extraction.
pub type Result<T> = std::result::Result<T, Error>;
