//! Lint rule definitions.
//!
//! This module provides the core types for describing validation rules:
//!
//! - [`RuleDescriptor`] - Static description of one rule
//! - [`RuleId`] - Unique identifier for a rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)
//! - [`SeverityOverride`] - A configured severity, including `none`

use std::str::FromStr;

use serde::Deserialize;

use super::context::UnitContext;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Warning that should be addressed.
    Warning,
    /// Error that fails the check.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A severity set in configuration.
///
/// `none` turns a rule off; every other level turns it on at that severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SeverityOverride {
    Disabled,
    Enabled(Severity),
}

impl SeverityOverride {
    /// The severity this override resolves to, or `None` when disabled.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            SeverityOverride::Disabled => None,
            SeverityOverride::Enabled(severity) => Some(*severity),
        }
    }
}

impl FromStr for SeverityOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::Disabled),
            "silent" | "hidden" | "hint" | "suggestion" | "info" => {
                Ok(Self::Enabled(Severity::Hint))
            }
            "warning" | "warn" => Ok(Self::Enabled(Severity::Warning)),
            "error" => Ok(Self::Enabled(Severity::Error)),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

impl TryFrom<String> for SeverityOverride {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for SeverityOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityOverride::Disabled => write!(f, "none"),
            SeverityOverride::Enabled(severity) => write!(f, "{}", severity),
        }
    }
}

/// Decides whether a rule applies to an analysis unit at all.
pub type Applicability = fn(&UnitContext<'_>) -> bool;

/// Applicability that accepts every unit.
pub fn always(_unit: &UnitContext<'_>) -> bool {
    true
}

/// Static description of a validation rule.
///
/// Descriptors are built at compile time and never mutated, so they can be
/// shared freely between concurrently running passes.
#[derive(Debug)]
pub struct RuleDescriptor {
    /// Stable identifier, e.g. `RCS0051`.
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Category used for category-wide severity overrides.
    pub category: &'static str,
    /// Severity when nothing overrides it.
    pub default_severity: Severity,
    /// Whether the rule runs when nothing overrides it.
    pub enabled_by_default: bool,
    /// Whether the rule runs on generated code.
    pub analyzes_generated_code: bool,
    /// Unit-level applicability.
    pub applies_to: Applicability,
}

impl RuleDescriptor {
    pub fn rule_id(&self) -> RuleId {
        RuleId::new(self.id)
    }
}
