//! Benchmark timer collaborator.
//!
//! A sink forwards `timer-start` / `timer-end` messages here. The timer writes
//! its report through the writer the sink hands it, so the sink stays the only
//! owner of the terminal stream.

use std::collections::HashMap;
use std::fmt::Debug;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::config::SinkConfig;
use crate::error::CollaboratorError;

/// Named benchmark timers, started and stopped by metric name.
///
/// Calls for unknown metric names must be tolerated.
pub trait BenchmarkTimer: Send + Debug {
    fn start(&mut self, config: &SinkConfig, metric: &str) -> Result<(), CollaboratorError>;

    fn end(
        &mut self,
        config: &SinkConfig,
        metric: &str,
        out: &mut dyn Write,
    ) -> Result<(), CollaboratorError>;
}

/// Wall-clock timer printing `"{metric}: {elapsed}ms"` on end.
///
/// Inert unless `show_benchmark` is set.
#[derive(Debug, Default)]
pub struct WallClockTimer {
    running: HashMap<String, Instant>,
}

impl WallClockTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BenchmarkTimer for WallClockTimer {
    fn start(&mut self, config: &SinkConfig, metric: &str) -> Result<(), CollaboratorError> {
        if config.show_benchmark {
            self.running.insert(metric.to_string(), Instant::now());
        }
        Ok(())
    }

    fn end(
        &mut self,
        config: &SinkConfig,
        metric: &str,
        out: &mut dyn Write,
    ) -> Result<(), CollaboratorError> {
        if !config.show_benchmark {
            return Ok(());
        }

        match self.running.remove(metric) {
            Some(started) => {
                let ms = started.elapsed().as_secs_f64() * 1000.0;
                writeln!(out, "{metric}: {ms:.3}ms")?;
                out.flush()?;
            }
            None => tracing::warn!(metric, "timer ended without a matching start"),
        }
        Ok(())
    }
}

/// A call observed by a [`RecordingTimer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCall {
    Start(String),
    End(String),
}

/// Timer that only records the calls it receives. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingTimer {
    calls: Arc<Mutex<Vec<TimerCall>>>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<TimerCall> {
        self.calls
            .lock()
            .map(|c| c.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn record(&self, call: TimerCall) -> Result<(), CollaboratorError> {
        self.calls
            .lock()
            .map_err(|_| "recording timer lock poisoned")?
            .push(call);
        Ok(())
    }
}

impl BenchmarkTimer for RecordingTimer {
    fn start(&mut self, _config: &SinkConfig, metric: &str) -> Result<(), CollaboratorError> {
        self.record(TimerCall::Start(metric.to_string()))
    }

    fn end(
        &mut self,
        _config: &SinkConfig,
        metric: &str,
        _out: &mut dyn Write,
    ) -> Result<(), CollaboratorError> {
        self.record(TimerCall::End(metric.to_string()))
    }
}
