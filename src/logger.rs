//! Debug logger collaborator.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use crate::error::CollaboratorError;

/// Receives human-readable lines when a sink runs in debug mode.
pub trait DebugLogger: Send + Debug {
    fn log(&mut self, line: &str) -> Result<(), CollaboratorError>;
}

/// Forwards debug lines to `tracing` on the `fixsink::debug` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn log(&mut self, line: &str) -> Result<(), CollaboratorError> {
        tracing::info!(target: "fixsink::debug", "{line}");
        Ok(())
    }
}

/// Logger that keeps every line in memory. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl DebugLogger for RecordingLogger {
    fn log(&mut self, line: &str) -> Result<(), CollaboratorError> {
        self.lines
            .lock()
            .map_err(|_| "recording logger lock poisoned")?
            .push(line.to_string());
        Ok(())
    }
}
