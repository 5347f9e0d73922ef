//! # fixsink
//!
//! A terminal progress sink for the event messages a lint/fix engine emits
//! while it runs.
//!
//! ## Overview
//!
//! A producer sends one JSON message per event:
//!
//! ```text
//! {"type": "apply-fix", "ruleName": "no-unused", "filePath": "a.js", "count": 2}
//! {"type": "timer-start", "metric": "fix-pass"}
//! {"type": "timer-end", "metric": "fix-pass"}
//! ```
//!
//! and the sink reacts:
//! - **Live progress**: `apply-fix` rewrites a single line in place
//!   (`Fixed 2 issues so far`) instead of scrolling
//! - **Benchmarks**: `timer-start` / `timer-end` drive a [`BenchmarkTimer`];
//!   a pending progress line is always terminated before a timer reports
//! - **Debug mode**: fixes are logged through a [`DebugLogger`] instead
//! - **Capability gate**: on a non-interactive target the sink is a
//!   [`NullSink`] that silently accepts everything
//! - **Unknown kinds** are ignored, never rejected
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixsink::{SinkBuilder, SinkConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut sink = SinkBuilder::new(SinkConfig::new().with_show_benchmark(true)).build()?;
//!
//!     sink.dispatch(r#"{"type":"timer-start","metric":"fix-pass"}"#)?;
//!     sink.dispatch(r#"{"type":"apply-fix","ruleName":"no-unused","filePath":"a.js","count":1}"#)?;
//!     sink.dispatch(r#"{"type":"timer-end","metric":"fix-pass"}"#)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `yaml` - YAML configuration files
//! - `toml` - TOML configuration files
//! - `async` - [`SinkActor`] and tokio file helpers
//! - `miette` - Pretty error reporting with miette
//!
//! ## Ordering
//!
//! A sink handles one message at a time through `&mut self`. To share one
//! sink between concurrent producers, put it behind a `Mutex` or hand it to a
//! [`SinkActor`] (feature `async`), which runs it on a single task. Nothing
//! else should write to the sink's stream, or a pending progress line can be
//! corrupted.

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fs;
pub mod io;
pub mod logger;
pub mod message;
pub mod sink;
pub mod timer;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod actor;

// Re-exports for convenience
pub use builder::SinkBuilder;
pub use config::{ConfigError, SinkConfig};
pub use engine::{Replay, ReplayReport};
pub use error::{AggregateError, DecodeError, DispatchError, ErrorPolicy, Stage};
pub use fs::FsError;
pub use io::{
    FileInput, InMemorySource, InMemoryTerminal, InputProvider, StderrTerminal, StdinInput,
    StdoutTerminal, TerminalTarget,
};
pub use logger::{DebugLogger, RecordingLogger, TracingLogger};
pub use message::{ApplyFix, Message, MessageKind, TimerMetric};
pub use sink::{MessageSink, NullSink, ProgressState, TerminalSink};
pub use timer::{BenchmarkTimer, RecordingTimer, TimerCall, WallClockTimer};

#[cfg(feature = "async")]
pub use actor::SinkActor;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::DispatchDiagnostic;

/// Build a sink on stdout from `config` with the default collaborators.
///
/// Returns a [`NullSink`] when stdout is not an interactive terminal (unless
/// `config.interactive` forces the decision).
pub fn create(config: SinkConfig) -> std::io::Result<Box<dyn MessageSink>> {
    SinkBuilder::new(config).build()
}
