//! Small filesystem helpers used around a sink: reading message dumps and
//! configuration, writing JSON results.
//!
//! Every error carries the path it concerns. JSON decode errors display as
//! `"{path}: {reason}"` so a bad file is identifiable from the message alone.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[cfg(feature = "async")]
pub mod nonblocking;

/// JSON output is never indented wider than this.
const MAX_INDENT: usize = 10;

/// A filesystem helper failure.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FsError {
    fn io(path: &Path, source: io::Error) -> Self {
        FsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        FsError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            FsError::Io { path, .. } | FsError::Json { path, .. } => path,
        }
    }
}

/// Read a whole file as UTF-8.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| FsError::io(path, e))
}

/// Read and decode a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FsError> {
    let path = path.as_ref();
    let data = read_file(path)?;
    serde_json::from_str(&data).map_err(|e| FsError::json(path, e))
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<(), FsError> {
    let path = path.as_ref();
    std::fs::write(path, contents).map_err(|e| FsError::io(path, e))
}

/// Serialize `value` as JSON and write it to `path`.
///
/// `indent` is the number of spaces per level (capped at 10); `None` or `0`
/// writes compact JSON.
pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    indent: Option<usize>,
) -> Result<(), FsError> {
    let path = path.as_ref();
    let bytes = to_json_bytes(value, indent).map_err(|e| FsError::json(path, e))?;
    write_file(path, bytes)
}

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn mkdirp(dir: impl AsRef<Path>) -> Result<(), FsError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| FsError::io(dir, e))
}

pub(crate) fn to_json_bytes<T: Serialize + ?Sized>(
    value: &T,
    indent: Option<usize>,
) -> Result<Vec<u8>, serde_json::Error> {
    let width = indent.unwrap_or(0).min(MAX_INDENT);
    if width == 0 {
        return serde_json::to_vec(value);
    }

    let pad = vec![b' '; width];
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(out)
}
