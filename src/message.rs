//! Message model: the closed set of event kinds a producer can send.
//!
//! Messages travel as one JSON object each, tagged by a `type` field:
//!
//! ```text
//! {"type": "apply-fix", "ruleName": "no-unused", "filePath": "a.js", "count": 1}
//! {"type": "timer-start", "metric": "lint"}
//! {"type": "timer-end", "metric": "lint"}
//! ```
//!
//! Any other `type` decodes to [`Message::Unknown`] and is ignored by sinks.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Discriminant of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ApplyFix,
    TimerStart,
    TimerEnd,
    /// Any tag outside the known set
    Unknown,
}

impl MessageKind {
    /// Classify a wire tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "apply-fix" => MessageKind::ApplyFix,
            "timer-start" => MessageKind::TimerStart,
            "timer-end" => MessageKind::TimerEnd,
            _ => MessageKind::Unknown,
        }
    }

    /// The wire tag for known kinds.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            MessageKind::ApplyFix => Some("apply-fix"),
            MessageKind::TimerStart => Some("timer-start"),
            MessageKind::TimerEnd => Some("timer-end"),
            MessageKind::Unknown => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => write!(f, "{tag}"),
            None => write!(f, "unknown"),
        }
    }
}

/// Payload of an `apply-fix` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyFix {
    pub rule_name: String,
    pub file_path: String,
    /// Fixes applied so far in this run, starting at 1
    pub count: NonZeroU64,
}

/// Payload of `timer-start` and `timer-end` messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerMetric {
    pub metric: String,
}

/// A decoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ApplyFix(ApplyFix),
    TimerStart(TimerMetric),
    TimerEnd(TimerMetric),
    /// Carries the unrecognized tag
    Unknown(String),
}

impl Message {
    pub fn apply_fix(
        rule_name: impl Into<String>,
        file_path: impl Into<String>,
        count: NonZeroU64,
    ) -> Self {
        Message::ApplyFix(ApplyFix {
            rule_name: rule_name.into(),
            file_path: file_path.into(),
            count,
        })
    }

    pub fn timer_start(metric: impl Into<String>) -> Self {
        Message::TimerStart(TimerMetric {
            metric: metric.into(),
        })
    }

    pub fn timer_end(metric: impl Into<String>) -> Self {
        Message::TimerEnd(TimerMetric {
            metric: metric.into(),
        })
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::ApplyFix(_) => MessageKind::ApplyFix,
            Message::TimerStart(_) => MessageKind::TimerStart,
            Message::TimerEnd(_) => MessageKind::TimerEnd,
            Message::Unknown(_) => MessageKind::Unknown,
        }
    }

    /// Decode one encoded message.
    ///
    /// Known kinds are validated strictly: a missing or ill-typed field (or a
    /// zero `count`) is a [`DecodeError::Payload`]. Extra fields are ignored.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(encoded)?;
        let mut fields = match value {
            Value::Object(map) => map,
            other => return Err(DecodeError::NotAnObject(json_type_name(&other))),
        };

        let tag = match fields.remove("type") {
            Some(Value::String(tag)) => tag,
            _ => return Err(DecodeError::MissingKind),
        };

        let kind = MessageKind::from_tag(&tag);
        match kind {
            MessageKind::ApplyFix => payload(kind, fields).map(Message::ApplyFix),
            MessageKind::TimerStart => payload(kind, fields).map(Message::TimerStart),
            MessageKind::TimerEnd => payload(kind, fields).map(Message::TimerEnd),
            MessageKind::Unknown => Ok(Message::Unknown(tag)),
        }
    }

    /// Encode into the wire form accepted by [`Message::decode`].
    pub fn encode(&self) -> String {
        let (tag, body) = match self {
            Message::ApplyFix(fix) => ("apply-fix", serde_json::to_value(fix)),
            Message::TimerStart(t) => ("timer-start", serde_json::to_value(t)),
            Message::TimerEnd(t) => ("timer-end", serde_json::to_value(t)),
            Message::Unknown(tag) => (tag.as_str(), Ok(Value::Object(Map::new()))),
        };

        let mut fields = match body {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        fields.insert("type".into(), Value::String(tag.to_string()));
        Value::Object(fields).to_string()
    }
}

fn payload<T: DeserializeOwned>(
    kind: MessageKind,
    fields: Map<String, Value>,
) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|source| DecodeError::Payload { kind, source })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
