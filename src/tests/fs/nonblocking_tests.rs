//! Tests for the tokio filesystem helpers.

use crate::fs::{FsError, nonblocking};

#[tokio::test]
async fn async_helpers_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("bench");
    nonblocking::mkdirp(&nested).await.unwrap();

    let path = nested.join("timings.json");
    let value = serde_json::json!({"fix-pass": 12.5});
    nonblocking::write_json(&path, &value, Some(4)).await.unwrap();

    let back: serde_json::Value = nonblocking::read_json_file(&path).await.unwrap();
    assert_eq!(back, value);
}

#[tokio::test]
async fn async_json_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    nonblocking::write_file(&path, "[1,").await.unwrap();

    let err = nonblocking::read_json_file::<Vec<u32>>(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, FsError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}
