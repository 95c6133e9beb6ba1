// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::source::Span;

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A structured validation finding. Producing a diagnostic is success, not
/// failure: validators always return, carrying zero or more of these.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// One-line statement of the problem.
    pub summary: String,
    /// Longer explanation, e.g. the configured limit that was exceeded.
    pub detail: String,
    /// The range the finding points at, when one is known.
    pub subject: Option<Span>,
}

impl Diagnostic {
    /// Renders the diagnostic with a source caret when a subject range is
    /// available, else as a plain `severity: summary` line.
    pub fn message(&self) -> String {
        let kind = self.severity.to_string();
        match &self.subject {
            Some(span) => span.message(&kind, &format!("{} {}", self.summary, self.detail)),
            None => format!("{}: {} {}", kind, self.summary, self.detail),
        }
    }
}

pub type Diagnostics = Vec<Diagnostic>;
