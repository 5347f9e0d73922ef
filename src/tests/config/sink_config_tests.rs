//! Tests for SinkConfig loading.

use crate::config::{ConfigError, SinkConfig};

#[test]
fn default_is_all_off() {
    let cfg = SinkConfig::default();
    assert!(!cfg.debug);
    assert!(!cfg.show_benchmark);
    assert_eq!(cfg.interactive, None);
}

#[test]
fn parses_camel_case_json() {
    let cfg = SinkConfig::from_json_str(r#"{"debug": true, "showBenchmark": true}"#).unwrap();
    assert_eq!(
        cfg,
        SinkConfig::new().with_debug(true).with_show_benchmark(true)
    );
}

#[test]
fn missing_json_fields_default() {
    let cfg = SinkConfig::from_json_str(r#"{"interactive": false}"#).unwrap();
    assert!(!cfg.debug);
    assert_eq!(cfg.interactive, Some(false));
}

#[test]
fn bad_json_is_parse_error() {
    let err = SinkConfig::from_json_str(r#"{"debug": "maybe"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { format: "json", .. }));
}

#[cfg(feature = "yaml")]
#[test]
fn parses_yaml() {
    let cfg = SinkConfig::from_yaml_str("debug: false\nshowBenchmark: true\n").unwrap();
    assert!(cfg.show_benchmark);
}

#[cfg(feature = "toml")]
#[test]
fn parses_toml() {
    let cfg = SinkConfig::from_toml_str("debug = true\n").unwrap();
    assert!(cfg.debug);
}

#[test]
fn from_path_picks_format_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");

    let json = dir.path().join("sink.json");
    std::fs::write(&json, r#"{"showBenchmark": true}"#).unwrap();
    assert!(SinkConfig::from_path(&json).unwrap().show_benchmark);

    let ini = dir.path().join("sink.ini");
    std::fs::write(&ini, "debug=1").unwrap();
    assert!(matches!(
        SinkConfig::from_path(&ini).unwrap_err(),
        ConfigError::UnsupportedFormat(ext) if ext == "ini"
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        SinkConfig::from_path(&missing).unwrap_err(),
        ConfigError::Fs(_)
    ));
}

#[cfg(not(feature = "yaml"))]
#[test]
fn yaml_path_without_feature_is_not_enabled() {
    let err = SinkConfig::from_path("sink.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::NotEnabled("yaml")));
}
