//! Rule effectiveness.
//!
//! A rule is effective for a unit when it would actually report there under
//! the current settings. Evaluation is pure: it only reads the unit context,
//! so callers may ask as often as they like.
//!
//! Resolution order:
//!
//! 1. Generated units are skipped unless the rule analyzes generated code
//! 2. The rule's applicability predicate must accept the unit
//! 3. Suppressed rules never report
//! 4. The first configured severity wins: unit-level, then per-rule, then
//!    per-category; `none` turns the rule off
//! 5. Otherwise the rule's defaults apply

use super::context::UnitContext;
use super::rule::{RuleDescriptor, Severity};

/// Severity a rule would report at in this unit, or `None` if it is off.
pub fn effective_severity(rule: &RuleDescriptor, unit: &UnitContext<'_>) -> Option<Severity> {
    if unit.generated && !rule.analyzes_generated_code {
        return None;
    }

    if !(rule.applies_to)(unit) {
        return None;
    }

    if unit.settings.is_suppressed(rule.id) {
        return None;
    }

    let configured = unit
        .severity_override(rule.id)
        .or_else(|| unit.settings.rule_override(rule.id))
        .or_else(|| unit.settings.category_override(rule.category));

    match configured {
        Some(severity) => severity.severity(),
        None if rule.enabled_by_default => Some(rule.default_severity),
        None => None,
    }
}

/// Whether a rule would report anything in this unit.
pub fn is_effective(rule: &RuleDescriptor, unit: &UnitContext<'_>) -> bool {
    effective_severity(rule, unit).is_some()
}
