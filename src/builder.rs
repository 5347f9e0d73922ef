//! Builder for creating sinks.
//!
//! The builder is where the capability gate lives: the terminal probe is read
//! once, and a non-interactive target yields a [`NullSink`] instead of a
//! [`TerminalSink`].

use std::sync::Arc;

use crate::config::SinkConfig;
use crate::io::{StdoutTerminal, TerminalTarget};
use crate::logger::{DebugLogger, TracingLogger};
use crate::sink::{MessageSink, NullSink, TerminalSink};
use crate::timer::{BenchmarkTimer, WallClockTimer};

pub struct SinkBuilder {
    config: SinkConfig,
    target: Arc<dyn TerminalTarget>,
    timer: Box<dyn BenchmarkTimer>,
    logger: Box<dyn DebugLogger>,
}

impl Default for SinkBuilder {
    fn default() -> Self {
        Self::new(SinkConfig::default())
    }
}

impl SinkBuilder {
    /// Start from `config`, rendering on stdout with the default collaborators.
    pub fn new(config: SinkConfig) -> Self {
        Self {
            config,
            target: Arc::new(StdoutTerminal::new()),
            timer: Box::new(WallClockTimer::new()),
            logger: Box::new(TracingLogger),
        }
    }

    pub fn with_config(mut self, config: SinkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_target(mut self, target: Arc<dyn TerminalTarget>) -> Self {
        self.target = target;
        self
    }

    pub fn with_timer(mut self, timer: impl BenchmarkTimer + 'static) -> Self {
        self.timer = Box::new(timer);
        self
    }

    pub fn with_logger(mut self, logger: impl DebugLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Whether the built sink will render, honoring a configured override.
    pub fn is_interactive(&self) -> bool {
        self.config
            .interactive
            .unwrap_or_else(|| self.target.is_interactive())
    }

    /// Build the sink: a [`TerminalSink`] on an interactive target, a
    /// [`NullSink`] otherwise.
    pub fn build(self) -> std::io::Result<Box<dyn MessageSink>> {
        let interactive = self.is_interactive();
        tracing::debug!(
            target_id = self.target.id(),
            interactive,
            debug = self.config.debug,
            "building message sink"
        );

        if !interactive {
            return Ok(Box::new(NullSink::new()));
        }

        let out = self.target.open()?;
        Ok(Box::new(TerminalSink::new(
            self.config,
            out,
            self.timer,
            self.logger,
        )))
    }
}
