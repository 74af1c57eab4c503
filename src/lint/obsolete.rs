//! Obsolete option validation.
//!
//! Options are sometimes renamed, or their value vocabulary changes. The old
//! keys stay readable, but a configuration that still sets them should be
//! migrated. [`ObsoleteOptionValidator`] reports each such key at most once
//! per analysis unit, and only when the rule that reads it would actually
//! fire there.
//!
//! # Example
//!
//! ```
//! use obsolint::config::{AnalyzerSettings, OptionMap};
//! use obsolint::lint::{ObsoleteOptionValidator, ReportedState, UnitContext};
//! use std::path::Path;
//!
//! let settings = AnalyzerSettings::default();
//! let options: OptionMap = [("remove_new_line_between_closing_brace_and_while_keyword", "false")]
//!     .into_iter()
//!     .collect();
//! let unit = UnitContext::new(Path::new("src/Program.cs"), &settings, &options);
//!
//! let validator = ObsoleteOptionValidator::new();
//! let mut state = ReportedState::new();
//!
//! let findings = validator.validate(&unit, &mut state);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].current_key, "new_line_before_while_in_do_statement");
//!
//! // A second call for the same unit reports nothing new.
//! assert!(validator.validate(&unit, &mut state).is_empty());
//! ```

use super::context::UnitContext;
use super::diagnostic::LintDiagnostic;
use super::effectiveness::is_effective;
use super::rule::{RuleDescriptor, RuleId, Severity};
use super::rules::{self, ANALYZER_OPTION_IS_OBSOLETE};
use super::span::Span;
use super::tracker::{ReportedState, TupleId};
use crate::options::builtin as keys;
use crate::options::{ConfigOption, LegacyConfigOption};

/// A legacy key, the rule that reads it, and what replaces it.
#[derive(Debug)]
pub struct ObsoleteOption {
    pub legacy: &'static LegacyConfigOption,
    pub rule: &'static RuleDescriptor,
    pub current: &'static ConfigOption,
    /// Value to set on the current key.
    pub replacement: &'static str,
}

/// Number of built-in obsolete options.
pub const OBSOLETE_OPTION_COUNT: usize = 7;

const _: () = assert!(OBSOLETE_OPTION_COUNT <= ReportedState::CAPACITY);

/// Built-in obsolete options, in reporting order.
pub static OBSOLETE_OPTIONS: [ObsoleteOption; OBSOLETE_OPTION_COUNT] = [
    ObsoleteOption {
        legacy: &keys::REMOVE_NEW_LINE_BETWEEN_CLOSING_BRACE_AND_WHILE_KEYWORD,
        rule: &rules::ADD_OR_REMOVE_NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT,
        current: &keys::NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT,
        replacement: "false",
    },
    ObsoleteOption {
        legacy: &keys::REMOVE_EMPTY_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
        rule: &rules::BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
        current: &keys::BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
        replacement: "false",
    },
    ObsoleteOption {
        legacy: &keys::REMOVE_EMPTY_LINE_BETWEEN_USING_DIRECTIVES_WITH_DIFFERENT_ROOT_NAMESPACE,
        rule: &rules::BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS,
        current: &keys::BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS,
        replacement: "false",
    },
    ObsoleteOption {
        legacy: &keys::ADD_NEW_LINE_AFTER_EXPRESSION_BODY_ARROW_INSTEAD_OF_BEFORE_IT,
        rule: &rules::PLACE_NEW_LINE_AFTER_OR_BEFORE_ARROW_TOKEN,
        current: &keys::ARROW_TOKEN_NEW_LINE,
        replacement: "after",
    },
    ObsoleteOption {
        legacy: &keys::ADD_NEW_LINE_AFTER_CONDITIONAL_OPERATOR_INSTEAD_OF_BEFORE_IT,
        rule: &rules::PLACE_NEW_LINE_AFTER_OR_BEFORE_CONDITIONAL_OPERATOR,
        current: &keys::CONDITIONAL_OPERATOR_NEW_LINE,
        replacement: "after",
    },
    ObsoleteOption {
        legacy: &keys::ADD_NEW_LINE_AFTER_BINARY_OPERATOR_INSTEAD_OF_BEFORE_IT,
        rule: &rules::PLACE_NEW_LINE_AFTER_OR_BEFORE_BINARY_OPERATOR,
        current: &keys::BINARY_OPERATOR_NEW_LINE,
        replacement: "after",
    },
    ObsoleteOption {
        legacy: &keys::ADD_NEW_LINE_AFTER_EQUALS_SIGN_INSTEAD_OF_BEFORE_IT,
        rule: &rules::PLACE_NEW_LINE_AFTER_OR_BEFORE_EQUALS_TOKEN,
        current: &keys::EQUALS_TOKEN_NEW_LINE,
        replacement: "after",
    },
];

/// A recommendation to migrate from a legacy key to its replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Rule that reads the option.
    pub rule_id: RuleId,
    pub legacy_key: &'static str,
    pub current_key: &'static str,
    pub recommended_value: &'static str,
    /// Where the legacy value was defined, or the unit itself.
    pub location: Span,
}

impl Finding {
    /// The migration as a `key = value` line.
    pub fn replacement_line(&self) -> String {
        format!("{} = {}", self.current_key, self.recommended_value)
    }

    /// Convert into a diagnostic reported under `rule_id` at `severity`.
    pub fn to_diagnostic(&self, rule_id: RuleId, severity: Severity) -> LintDiagnostic {
        LintDiagnostic::new(
            rule_id,
            severity,
            format!(
                "The analyzer option '{}' is obsolete, use following option instead: '{}'",
                self.legacy_key,
                self.replacement_line()
            ),
        )
        .with_span(self.location.clone())
        .with_suggestion(self.replacement_line())
    }
}

/// Reports legacy option keys that are still set and still matter.
#[derive(Debug, Clone, Copy)]
pub struct ObsoleteOptionValidator {
    umbrella: &'static RuleDescriptor,
    table: &'static [ObsoleteOption],
}

impl ObsoleteOptionValidator {
    /// Validator over the built-in table.
    pub fn new() -> Self {
        Self {
            umbrella: &ANALYZER_OPTION_IS_OBSOLETE,
            table: &OBSOLETE_OPTIONS,
        }
    }

    /// Validator over a custom table.
    ///
    /// Returns `None` when the table is larger than a [`ReportedState`] can
    /// track.
    pub fn with_table(
        umbrella: &'static RuleDescriptor,
        table: &'static [ObsoleteOption],
    ) -> Option<Self> {
        (table.len() <= ReportedState::CAPACITY).then_some(Self { umbrella, table })
    }

    /// The rule findings are reported under.
    pub fn umbrella(&self) -> &'static RuleDescriptor {
        self.umbrella
    }

    pub fn table(&self) -> &'static [ObsoleteOption] {
        self.table
    }

    /// Run one pass over the table for a unit.
    ///
    /// `state` accumulates what has been reported for this unit; options
    /// already marked there are skipped, and every finding marks its option.
    /// Findings come back in table order.
    pub fn validate(&self, unit: &UnitContext<'_>, state: &mut ReportedState) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !is_effective(self.umbrella, unit) {
            tracing::trace!(
                "{} is not effective for {}, skipping",
                self.umbrella.id,
                unit.path.display()
            );
            return findings;
        }

        for (index, option) in self.table.iter().enumerate() {
            let id = TupleId::new(index as u8);

            if state.is_set(id) {
                continue;
            }

            // Migrating an option nothing reads would be noise.
            if !is_effective(option.rule, unit) {
                tracing::trace!("{} is not effective, skipping {}", option.rule.id, option.legacy.key);
                continue;
            }

            let Some(value) = unit.options.get(option.legacy.key) else {
                continue;
            };

            if !option.legacy.matches(value) {
                tracing::trace!(
                    "{} = {} does not match its obsolete value",
                    option.legacy.key,
                    value
                );
                continue;
            }

            let location = unit
                .options
                .origin(option.legacy.key)
                .unwrap_or_else(|| Span::file(unit.path));

            tracing::debug!(
                "Obsolete option {} in {} ({})",
                option.legacy.key,
                unit.path.display(),
                option.rule.id
            );

            findings.push(Finding {
                rule_id: option.rule.rule_id(),
                legacy_key: option.legacy.key,
                current_key: option.current.key,
                recommended_value: option.replacement,
                location,
            });
            state.set(id);
        }

        findings
    }

    /// Run a complete pass for a unit with a fresh tracker.
    pub fn validate_unit(&self, unit: &UnitContext<'_>) -> Vec<Finding> {
        let mut state = ReportedState::new();
        self.validate(unit, &mut state)
    }
}

impl Default for ObsoleteOptionValidator {
    fn default() -> Self {
        Self::new()
    }
}
