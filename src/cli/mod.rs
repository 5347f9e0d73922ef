//! Command-line arguments for the `fixsink_replay` binary.
//!
//! Settings resolve in order: config file, then `FIXSINK_*` environment
//! variables, then flags. clap folds the environment into each flag, so a
//! flag left unset on the command line still picks up its variable.

use std::path::PathBuf;
use std::sync::Arc;

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};

use crate::config::{ConfigError, ENV_DEBUG, ENV_INTERACTIVE, ENV_SHOW_BENCHMARK, SinkConfig};
use crate::error::ErrorPolicy;
use crate::io::{
    FileInput, InputProvider, StderrTerminal, StdinInput, StdoutTerminal, TerminalTarget,
};

/// Stream the sink renders onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TargetStream {
    #[default]
    Stdout,
    Stderr,
}

/// Replays newline-delimited JSON messages through a terminal progress sink.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fixsink_replay")]
#[command(version, about, long_about = None)]
pub struct ReplayArgs {
    /// Message source; "-" or absent reads stdin
    pub input: Option<String>,

    /// Log each applied fix instead of the progress counter
    #[arg(
        short,
        long,
        env = ENV_DEBUG,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub debug: Option<bool>,

    /// Print benchmark timer results
    #[arg(
        short = 'b',
        long = "benchmark",
        env = ENV_SHOW_BENCHMARK,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub show_benchmark: Option<bool>,

    /// Force the terminal probe result (`--interactive=false` silences output)
    #[arg(
        long,
        env = ENV_INTERACTIVE,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub interactive: Option<bool>,

    /// Keep going after bad messages; report all at the end
    #[arg(long)]
    pub accumulate: bool,

    /// Load settings from a .json/.yaml/.toml file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stream to render progress onto
    #[arg(long, value_enum, default_value_t = TargetStream::Stdout)]
    pub target: TargetStream,
}

impl ReplayArgs {
    /// Check if reading from stdin.
    pub fn is_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }

    pub fn input_provider(&self) -> Arc<dyn InputProvider> {
        match self.input.as_deref() {
            None | Some("-") => Arc::new(StdinInput::new()),
            Some(path) => Arc::new(FileInput::new(PathBuf::from(path))),
        }
    }

    pub fn terminal_target(&self) -> Arc<dyn TerminalTarget> {
        match self.target {
            TargetStream::Stdout => Arc::new(StdoutTerminal::new()),
            TargetStream::Stderr => Arc::new(StderrTerminal::new()),
        }
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        if self.accumulate {
            ErrorPolicy::Accumulate
        } else {
            ErrorPolicy::FastFail
        }
    }

    /// Resolve the sink configuration: config file, then environment and
    /// command-line flags.
    pub fn sink_config(&self) -> Result<SinkConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SinkConfig::from_path(path)?,
            None => SinkConfig::default(),
        };
        if let Some(debug) = self.debug {
            config.debug = debug;
        }
        if let Some(show) = self.show_benchmark {
            config.show_benchmark = show;
        }
        if self.interactive.is_some() {
            config.interactive = self.interactive;
        }
        Ok(config)
    }
}
