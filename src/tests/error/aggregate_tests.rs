//! Tests for error types and policies.

use crate::error::{AggregateError, DecodeError, DispatchError, ErrorPolicy, Stage};

#[test]
fn error_policy_default_is_accumulate() {
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::Accumulate);
}

#[test]
fn dispatch_error_display_names_stage_line_and_message() {
    let err = DispatchError::new(Stage::Decode, "{bad", DecodeError::MissingKind).at_line(4);
    let shown = err.to_string();

    assert!(shown.starts_with("[Decode] line 4: "), "got {shown}");
    assert!(shown.contains("missing string field \"type\""));
    assert!(shown.ends_with("(message: {bad)"));
    assert!(matches!(err.decode_error(), Some(DecodeError::MissingKind)));
}

#[test]
fn long_messages_are_truncated_in_display() {
    let raw = format!(r#"{{"type":"apply-fix","ruleName":"{}"}}"#, "x".repeat(300));
    let err = DispatchError::new(Stage::Decode, raw.clone(), DecodeError::MissingKind);

    assert_eq!(err.excerpt().chars().count(), 120);
    assert!(err.to_string().ends_with("...)"));
    assert_eq!(err.message, raw);
}

#[test]
fn excerpt_respects_char_boundaries() {
    let raw = "é".repeat(200);
    let err = DispatchError::new(Stage::Decode, raw, "bad");
    assert_eq!(err.excerpt().chars().count(), 120);
}

#[test]
fn collaborator_error_is_the_source() {
    let err = DispatchError::new(Stage::Timer, "{}", "timer exploded");
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "timer exploded");
    assert!(err.decode_error().is_none());
}

#[test]
fn aggregate_error_single_and_len() {
    let err = DispatchError::new(
        Stage::Render,
        "",
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
    );

    let agg = AggregateError::single(err);
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
    assert!(agg.to_string().contains("#1: [Render] closed"));
}

#[test]
fn aggregate_error_from_single() {
    let err = DispatchError::new(Stage::Open, "events.ndjson", "missing");
    let agg: AggregateError = err.into();
    assert_eq!(agg.len(), 1);
}
