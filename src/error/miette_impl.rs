//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, DispatchError, Stage};

/// A diagnostic wrapper for dispatch errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct DispatchDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Open | Stage::Read => "Check the message source path and permissions",
        Stage::Decode => {
            "Messages must be JSON objects with a string \"type\" field and the fields of that kind"
        }
        Stage::Render => "The terminal stream rejected a write; is the output closed?",
        Stage::Timer | Stage::Log => "A collaborator failed while handling this message",
        Stage::Closed => "The sink task stopped before the message was handled",
    }
}

impl From<DispatchError> for DispatchDiagnostic {
    fn from(e: DispatchError) -> Self {
        let location = match e.line {
            Some(line) => format!(" at line {line}"),
            None => String::new(),
        };
        DispatchDiagnostic {
            message: format!("[{}]{} on '{}'", e.stage, location, e.excerpt()),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for DispatchDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let first = agg.errors.into_iter().next();
        if let Some(e) = first {
            DispatchDiagnostic::from(e)
        } else {
            DispatchDiagnostic {
                message: "Unknown dispatch error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(DispatchDiagnostic::from(agg))
    }
}
