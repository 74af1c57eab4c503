//! Configuration option descriptors.
//!
//! This module describes the keys an analyzer reads from its resolved
//! configuration:
//!
//! - [`ConfigOption`] - A supported key and the domain of its values
//! - [`LegacyConfigOption`] - A deprecated key, optionally constrained to a value
//! - [`OptionKind`] - How a raw string value is parsed and compared
//!
//! The concrete keys live in [`builtin`] as `static` data.

pub mod builtin;

use std::fmt;

pub use builtin::{find_legacy_option, find_option, CURRENT_OPTIONS, LEGACY_OPTIONS};

/// Where a new line goes relative to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLinePosition {
    Before,
    After,
}

/// A parsed option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    NewLine(NewLinePosition),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => write!(f, "true"),
            OptionValue::Bool(false) => write!(f, "false"),
            OptionValue::NewLine(NewLinePosition::Before) => write!(f, "before"),
            OptionValue::NewLine(NewLinePosition::After) => write!(f, "after"),
        }
    }
}

/// Value domain of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` or `false`.
    Bool,
    /// `before` or `after`.
    NewLinePosition,
}

impl OptionKind {
    /// Parse a raw configuration value in this domain.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Returns `None`
    /// for anything outside the domain.
    pub fn parse(&self, raw: &str) -> Option<OptionValue> {
        let raw = raw.trim();
        match self {
            OptionKind::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(OptionValue::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(OptionValue::Bool(false))
                } else {
                    None
                }
            }
            OptionKind::NewLinePosition => {
                if raw.eq_ignore_ascii_case("before") {
                    Some(OptionValue::NewLine(NewLinePosition::Before))
                } else if raw.eq_ignore_ascii_case("after") {
                    Some(OptionValue::NewLine(NewLinePosition::After))
                } else {
                    None
                }
            }
        }
    }

    /// Tokens accepted by [`OptionKind::parse`].
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            OptionKind::Bool => &["true", "false"],
            OptionKind::NewLinePosition => &["before", "after"],
        }
    }
}

/// A supported configuration key.
#[derive(Debug)]
pub struct ConfigOption {
    /// Key name as it appears in configuration.
    pub key: &'static str,
    /// Value domain.
    pub kind: OptionKind,
    /// What the option controls.
    pub description: &'static str,
}

impl ConfigOption {
    pub const fn new(key: &'static str, kind: OptionKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            description,
        }
    }

    /// Parse a raw value for this key.
    pub fn parse(&self, raw: &str) -> Option<OptionValue> {
        self.kind.parse(raw)
    }
}

/// Restriction on the value a legacy key must hold to count as obsolete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConstraint {
    /// Any value, including ones outside the key's domain.
    Any,
    /// The value must parse to the same value as this token.
    Equals(&'static str),
}

impl ValueConstraint {
    /// Check a raw value against the constraint within the given domain.
    ///
    /// A value that fails to parse never satisfies [`ValueConstraint::Equals`].
    pub fn is_satisfied_by(&self, kind: OptionKind, raw: &str) -> bool {
        match self {
            ValueConstraint::Any => true,
            ValueConstraint::Equals(expected) => match (kind.parse(raw), kind.parse(expected)) {
                (Some(actual), Some(expected)) => actual == expected,
                _ => false,
            },
        }
    }
}

/// A deprecated configuration key that is still read for compatibility.
#[derive(Debug)]
pub struct LegacyConfigOption {
    /// Key name as it appears in configuration.
    pub key: &'static str,
    /// Value domain of the legacy key.
    pub kind: OptionKind,
    /// Value the key must hold for the deprecation to apply.
    pub constraint: ValueConstraint,
}

impl LegacyConfigOption {
    pub const fn new(key: &'static str, kind: OptionKind, constraint: ValueConstraint) -> Self {
        Self {
            key,
            kind,
            constraint,
        }
    }

    /// Whether a resolved value makes this key obsolete.
    pub fn matches(&self, raw: &str) -> bool {
        self.constraint.is_satisfied_by(self.kind, raw)
    }
}
