//! Sink rendering onto an interactive terminal.

use std::fmt;
use std::io::Write;

use crate::config::SinkConfig;
use crate::error::{CollaboratorError, DispatchError, Stage};
use crate::logger::DebugLogger;
use crate::message::{ApplyFix, Message};
use crate::timer::BenchmarkTimer;

use super::{MessageSink, ProgressLine};

/// Sink that owns an interactive terminal stream.
pub struct TerminalSink {
    config: SinkConfig,
    out: Box<dyn Write + Send>,
    progress: ProgressLine,
    timer: Box<dyn BenchmarkTimer>,
    logger: Box<dyn DebugLogger>,
}

impl fmt::Debug for TerminalSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSink")
            .field("config", &self.config)
            .field("progress", &self.progress)
            .field("timer", &self.timer)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

impl TerminalSink {
    pub fn new(
        config: SinkConfig,
        out: Box<dyn Write + Send>,
        timer: Box<dyn BenchmarkTimer>,
        logger: Box<dyn DebugLogger>,
    ) -> Self {
        Self {
            config,
            out,
            progress: ProgressLine::new(),
            timer,
            logger,
        }
    }

    fn apply_fix(&mut self, fix: &ApplyFix) -> Result<(), (Stage, CollaboratorError)> {
        if self.config.debug {
            let line = format!(
                "Applying a fix for {} in {} ({} so far)",
                fix.rule_name, fix.file_path, fix.count
            );
            return self.logger.log(&line).map_err(|e| (Stage::Log, e));
        }

        self.progress
            .overwrite(&mut self.out, fix.count.get())
            .map_err(|e| (Stage::Render, e.into()))
    }

    fn timer_end(&mut self, metric: &str) -> Result<(), (Stage, CollaboratorError)> {
        // The progress line must be closed before the timer reports.
        self.progress
            .terminate(&mut self.out)
            .map_err(|e| (Stage::Render, e.into()))?;
        self.timer
            .end(&self.config, metric, &mut self.out)
            .map_err(|e| (Stage::Timer, e))
    }

    fn handle(&mut self, message: &Message) -> Result<(), (Stage, CollaboratorError)> {
        tracing::trace!(kind = %message.kind(), "dispatch");
        match message {
            Message::ApplyFix(fix) => self.apply_fix(fix),
            Message::TimerStart(t) => self
                .timer
                .start(&self.config, &t.metric)
                .map_err(|e| (Stage::Timer, e)),
            Message::TimerEnd(t) => self.timer_end(&t.metric),
            Message::Unknown(tag) => {
                tracing::debug!(kind = %tag, "ignoring unrecognized message kind");
                Ok(())
            }
        }
    }
}

impl MessageSink for TerminalSink {
    fn dispatch(&mut self, encoded: &str) -> Result<(), DispatchError> {
        let message =
            Message::decode(encoded).map_err(|e| DispatchError::new(Stage::Decode, encoded, e))?;
        self.handle(&message)
            .map_err(|(stage, e)| DispatchError::new(stage, encoded, e))
    }

    fn deliver(&mut self, message: &Message) -> Result<(), DispatchError> {
        self.handle(message)
            .map_err(|(stage, e)| DispatchError::new(stage, message.encode(), e))
    }

    fn has_pending_progress_line(&self) -> bool {
        self.progress.is_pending()
    }
}
