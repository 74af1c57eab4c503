//! Rules about the analyzer configuration itself.

use crate::lint::rule::{always, RuleDescriptor};
use crate::lint::Severity;

/// Reported when a configuration still sets an obsolete option.
///
/// Also acts as the umbrella gate for the obsolete-option pass: when this
/// rule is not effective for a unit, no option is read at all.
pub static ANALYZER_OPTION_IS_OBSOLETE: RuleDescriptor = RuleDescriptor {
    id: "ROS0002",
    title: "Analyzer option is obsolete",
    category: "General",
    default_severity: Severity::Warning,
    enabled_by_default: true,
    analyzes_generated_code: false,
    applies_to: always,
};
