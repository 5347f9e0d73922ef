//! Error types and policies for message dispatch.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether a replay fails fast or accumulates errors
//! - `Stage`: Indicates where in the dispatch path an error occurred
//! - `DecodeError`: Why an encoded message could not be turned into a `Message`
//! - `DispatchError`: A single dispatch failure, tied to the offending message
//! - `AggregateError`: A collection of failures when using `Accumulate` policy

use std::fmt;

use thiserror::Error;

use crate::message::MessageKind;

/// Errors raised by collaborators (debug logger, benchmark timer).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Longest excerpt of an offending message kept in `Display` output.
const EXCERPT_LIMIT: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    FastFail,
    /// Collect all errors and return them together
    #[default]
    Accumulate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening a message source
    Open,
    /// Error while reading a message source
    Read,
    Decode,
    /// Writing to the terminal failed
    Render,
    Timer,
    Log,
    /// The sink task is gone
    Closed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Decode => write!(f, "Decode"),
            Stage::Render => write!(f, "Render"),
            Stage::Timer => write!(f, "Timer"),
            Stage::Log => write!(f, "Log"),
            Stage::Closed => write!(f, "Closed"),
        }
    }
}

/// Why an encoded message could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The message is not valid JSON
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The message is valid JSON but not an object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The object has no string `type` field
    #[error("missing string field \"type\"")]
    MissingKind,

    /// A known kind is missing a field or carries a field of the wrong shape
    #[error("invalid {kind} payload: {source}")]
    Payload {
        kind: MessageKind,
        #[source]
        source: serde_json::Error,
    },
}

/// A single dispatch failure.
#[derive(Debug)]
pub struct DispatchError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// The encoded message that was being handled
    pub message: String,
    /// 1-based line number when the message came from a line-oriented source
    pub line: Option<usize>,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl DispatchError {
    pub fn new(
        stage: Stage,
        message: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            message: message.into(),
            line: None,
            error: error.into(),
        }
    }

    /// Attach the source line number of the offending message.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// The offending message, shortened for display.
    pub fn excerpt(&self) -> &str {
        match self.message.char_indices().nth(EXCERPT_LIMIT) {
            Some((idx, _)) => &self.message[..idx],
            None => &self.message,
        }
    }

    /// Returns the decode failure, if this error came from decoding.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.error.downcast_ref::<DecodeError>()
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.stage)?;
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        write!(f, "{}", self.error)?;
        if !self.message.is_empty() {
            let ellipsis = if self.excerpt().len() < self.message.len() {
                "..."
            } else {
                ""
            };
            write!(f, " (message: {}{ellipsis})", self.excerpt())?;
        }
        Ok(())
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// An aggregate of multiple dispatch errors.
///
/// This is returned when using `ErrorPolicy::Accumulate` and multiple errors occurred.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<DispatchError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dispatch encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: DispatchError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<DispatchError> for AggregateError {
    fn from(error: DispatchError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
