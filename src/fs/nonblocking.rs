//! Tokio counterparts of the filesystem helpers.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use super::{FsError, to_json_bytes};

pub async fn read_file(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FsError::io(path, e))
}

pub async fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FsError> {
    let path = path.as_ref();
    let data = read_file(path).await?;
    serde_json::from_str(&data).map_err(|e| FsError::json(path, e))
}

pub async fn write_file(
    path: impl AsRef<Path>,
    contents: impl AsRef<[u8]>,
) -> Result<(), FsError> {
    let path = path.as_ref();
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| FsError::io(path, e))
}

pub async fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    indent: Option<usize>,
) -> Result<(), FsError> {
    let path = path.as_ref();
    let bytes = to_json_bytes(value, indent).map_err(|e| FsError::json(path, e))?;
    write_file(path, bytes).await
}

pub async fn mkdirp(dir: impl AsRef<Path>) -> Result<(), FsError> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| FsError::io(dir, e))
}
