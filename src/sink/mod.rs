//! Message sinks.
//!
//! A sink receives encoded messages one at a time and reacts to them:
//! - `apply-fix` updates the in-place progress counter (or goes to the debug
//!   logger in debug mode)
//! - `timer-start` / `timer-end` drive the benchmark timer, with any pending
//!   progress line terminated before a timer reports
//! - anything else is ignored
//!
//! `TerminalSink` does the work on an interactive terminal. `NullSink` stands
//! in when the target is not interactive: it accepts every message and writes
//! nothing. `SinkBuilder` picks between the two once, at construction.

mod live;
mod null;
mod progress;

pub use live::TerminalSink;
pub use null::NullSink;
pub use progress::{ProgressLine, ProgressState, fix_count_label};

use crate::error::DispatchError;
use crate::message::Message;

/// Receiver for producer messages.
///
/// Producers fire and forget: they never need to probe a sink before sending.
pub trait MessageSink: Send {
    /// Whether this sink takes messages of `kind`. Always true; unrecognized
    /// kinds are dropped by `dispatch`, never rejected.
    fn accepts(&self, _kind: &str) -> bool {
        true
    }

    /// Decode and handle one encoded message.
    fn dispatch(&mut self, encoded: &str) -> Result<(), DispatchError>;

    /// Handle an already decoded message.
    fn deliver(&mut self, message: &Message) -> Result<(), DispatchError>;

    /// Whether the current terminal line holds an unterminated progress update.
    fn has_pending_progress_line(&self) -> bool {
        false
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn accepts(&self, kind: &str) -> bool {
        (**self).accepts(kind)
    }

    fn dispatch(&mut self, encoded: &str) -> Result<(), DispatchError> {
        (**self).dispatch(encoded)
    }

    fn deliver(&mut self, message: &Message) -> Result<(), DispatchError> {
        (**self).deliver(message)
    }

    fn has_pending_progress_line(&self) -> bool {
        (**self).has_pending_progress_line()
    }
}
