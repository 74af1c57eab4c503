//! Formatting rules whose configuration keys were renamed.
//!
//! Only the descriptors live here. The formatting checks themselves run in
//! the host analyzer; obsolint needs to know whether they would fire.

use crate::lint::rule::{always, RuleDescriptor};
use crate::lint::Severity;

const CATEGORY: &str = "Formatting";

const fn formatting_rule(id: &'static str, title: &'static str) -> RuleDescriptor {
    RuleDescriptor {
        id,
        title,
        category: CATEGORY,
        default_severity: Severity::Hint,
        enabled_by_default: true,
        analyzes_generated_code: false,
        applies_to: always,
    }
}

pub static ADD_OR_REMOVE_NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT: RuleDescriptor = formatting_rule(
    "RCS0051",
    "Add/remove new line before 'while' in 'do' statement",
);

pub static BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS: RuleDescriptor = formatting_rule(
    "RCS0011",
    "Add/remove blank line between single-line accessors",
);

pub static BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS: RuleDescriptor = formatting_rule(
    "RCS0015",
    "Add/remove blank line between using directives",
);

pub static PLACE_NEW_LINE_AFTER_OR_BEFORE_ARROW_TOKEN: RuleDescriptor = formatting_rule(
    "RCS0032",
    "Place new line after/before arrow token",
);

pub static PLACE_NEW_LINE_AFTER_OR_BEFORE_BINARY_OPERATOR: RuleDescriptor = formatting_rule(
    "RCS0027",
    "Place new line after/before binary operator",
);

pub static PLACE_NEW_LINE_AFTER_OR_BEFORE_CONDITIONAL_OPERATOR: RuleDescriptor =
    formatting_rule("RCS0028", "Place new line after/before '?:' operator");

pub static PLACE_NEW_LINE_AFTER_OR_BEFORE_EQUALS_TOKEN: RuleDescriptor = formatting_rule(
    "RCS0052",
    "Place new line after/before equals token",
);
