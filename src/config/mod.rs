//! Construction-time configuration for sinks.
//!
//! A `SinkConfig` is an immutable snapshot handed to a sink when it is built.
//! It can be assembled in code, parsed from JSON (or YAML/TOML with the
//! matching features). The replay binary layers `FIXSINK_*` environment
//! variables on top through its argument parser.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::{self, FsError};

/// Environment variable for [`SinkConfig::debug`].
pub const ENV_DEBUG: &str = "FIXSINK_DEBUG";
/// Environment variable for [`SinkConfig::show_benchmark`].
pub const ENV_SHOW_BENCHMARK: &str = "FIXSINK_SHOW_BENCHMARK";
/// Environment variable for [`SinkConfig::interactive`].
pub const ENV_INTERACTIVE: &str = "FIXSINK_INTERACTIVE";

/// Configuration shared by a sink and its collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SinkConfig {
    /// Route fix progress to the debug logger instead of the progress line
    pub debug: bool,
    /// Let the default benchmark timer print its results
    pub show_benchmark: bool,
    /// Override the terminal probe; `None` asks the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
}

/// Errors raised while loading a `SinkConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {format} config: {source}")]
    Parse {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Format feature not enabled
    #[error("config format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(&'static str),

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl SinkConfig {
    /// Create a configuration with everything off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_show_benchmark(mut self, show: bool) -> Self {
        self.show_benchmark = show;
        self
    }

    /// Force the capability gate instead of probing the target.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse {
            format: "json",
            source: Box::new(e),
        })
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|e| ConfigError::Parse {
            format: "yaml",
            source: Box::new(e),
        })
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse {
            format: "toml",
            source: Box::new(e),
        })
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json_str(&fs::read_file(path)?),
            "yaml" | "yml" => {
                #[cfg(feature = "yaml")]
                {
                    Self::from_yaml_str(&fs::read_file(path)?)
                }
                #[cfg(not(feature = "yaml"))]
                {
                    Err(ConfigError::NotEnabled("yaml"))
                }
            }
            "toml" => {
                #[cfg(feature = "toml")]
                {
                    Self::from_toml_str(&fs::read_file(path)?)
                }
                #[cfg(not(feature = "toml"))]
                {
                    Err(ConfigError::NotEnabled("toml"))
                }
            }
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}
