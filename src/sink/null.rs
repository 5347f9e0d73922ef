//! Sink used when the target is not an interactive terminal.

use crate::error::DispatchError;
use crate::message::Message;

use super::MessageSink;

/// Accepts every message, including malformed ones, and writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for NullSink {
    fn dispatch(&mut self, _encoded: &str) -> Result<(), DispatchError> {
        Ok(())
    }

    fn deliver(&mut self, _message: &Message) -> Result<(), DispatchError> {
        Ok(())
    }
}
