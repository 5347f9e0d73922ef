//! Replay engine: feed newline-delimited encoded messages through a sink.

use std::io::{BufRead, BufReader};

use crate::error::{AggregateError, DispatchError, ErrorPolicy, Stage};
use crate::io::InputProvider;
use crate::sink::MessageSink;

/// Outcome of a replay that hit no errors (or only accumulated ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayReport {
    /// Messages handed to the sink
    pub dispatched: usize,
    /// Blank lines skipped
    pub skipped_blank: usize,
}

/// Drives a sink from line-oriented message sources.
pub struct Replay<'a> {
    sink: &'a mut dyn MessageSink,
    error_policy: ErrorPolicy,
}

impl<'a> Replay<'a> {
    pub fn new(sink: &'a mut dyn MessageSink, error_policy: ErrorPolicy) -> Self {
        Self { sink, error_policy }
    }

    /// Get the error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Dispatch every non-blank line of `input`, in order.
    ///
    /// With `FastFail` the first failing message stops the replay. With
    /// `Accumulate` every message is attempted and all failures are returned
    /// together. A read failure always stops the replay.
    pub fn run(&mut self, input: &dyn InputProvider) -> Result<ReplayReport, AggregateError> {
        let reader = input
            .open()
            .map_err(|e| DispatchError::new(Stage::Open, input.id(), e))?;

        let mut report = ReplayReport::default();
        let mut errors = Vec::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line_no = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    errors.push(DispatchError::new(Stage::Read, input.id(), e).at_line(line_no));
                    return Err(AggregateError { errors });
                }
            };

            let encoded = line.trim();
            if encoded.is_empty() {
                report.skipped_blank += 1;
                continue;
            }

            match self.sink.dispatch(encoded) {
                Ok(()) => report.dispatched += 1,
                Err(e) => {
                    let e = e.at_line(line_no);
                    tracing::warn!(source = input.id(), error = %e, "message dispatch failed");
                    errors.push(e);
                    if matches!(self.error_policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError { errors });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(report)
        } else {
            Err(AggregateError { errors })
        }
    }
}
