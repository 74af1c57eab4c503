//! Lint diagnostic messages.
//!
//! A [`LintDiagnostic`] is what formatters print. Findings become diagnostics
//! once the driver knows which rule they are reported under and at what
//! severity.

use std::path::{Path, PathBuf};

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A diagnostic message produced by a rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the offending value is defined.
    pub span: Option<Span>,
    /// Analysis unit the diagnostic was raised for.
    pub unit: Option<PathBuf>,
    /// Replacement to apply instead.
    pub suggestion: Option<String>,
    /// Additional related locations.
    pub related: Vec<RelatedInfo>,
}

/// Additional information related to a diagnostic.
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Location of the related information.
    pub span: Span,
    /// Message explaining the relationship.
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
            unit: None,
            suggestion: None,
            related: vec![],
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Record the analysis unit.
    pub fn with_unit(mut self, unit: impl Into<PathBuf>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            span,
            message: message.into(),
        });
        self
    }

    /// The unit path when it differs from the span's file.
    pub fn distinct_unit(&self) -> Option<&Path> {
        let unit = self.unit.as_deref()?;
        match &self.span {
            Some(span) if span.file == unit => None,
            _ => Some(unit),
        }
    }
}
