//! I/O abstractions for message sources and terminal targets.
//!
//! This module provides:
//! - `InputProvider`: Trait for line-oriented message sources
//! - `TerminalTarget`: Trait for the stream a sink renders onto
//! - Standard implementations for files, stdin, stdout and stderr
//! - In-memory implementations for testing

mod input;
mod memory;
mod std_io;
mod terminal;

pub use input::InputProvider;
pub use memory::{InMemorySource, InMemoryTerminal};
pub use std_io::{FileInput, StderrTerminal, StdinInput, StdoutTerminal};
pub use terminal::TerminalTarget;
