//! Built-in rule descriptors.
//!
//! - [`common`] - Rules about the analyzer configuration itself
//! - [`formatting`] - Formatting rules whose options were renamed

pub mod common;
pub mod formatting;

pub use common::ANALYZER_OPTION_IS_OBSOLETE;
pub use formatting::{
    ADD_OR_REMOVE_NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT, BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
    BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS, PLACE_NEW_LINE_AFTER_OR_BEFORE_ARROW_TOKEN,
    PLACE_NEW_LINE_AFTER_OR_BEFORE_BINARY_OPERATOR,
    PLACE_NEW_LINE_AFTER_OR_BEFORE_CONDITIONAL_OPERATOR,
    PLACE_NEW_LINE_AFTER_OR_BEFORE_EQUALS_TOKEN,
};

use super::rule::RuleDescriptor;

/// Every built-in rule, in registration order.
pub static BUILTIN_RULES: [&RuleDescriptor; 8] = [
    &ANALYZER_OPTION_IS_OBSOLETE,
    &ADD_OR_REMOVE_NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT,
    &BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
    &BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS,
    &PLACE_NEW_LINE_AFTER_OR_BEFORE_ARROW_TOKEN,
    &PLACE_NEW_LINE_AFTER_OR_BEFORE_BINARY_OPERATOR,
    &PLACE_NEW_LINE_AFTER_OR_BEFORE_CONDITIONAL_OPERATOR,
    &PLACE_NEW_LINE_AFTER_OR_BEFORE_EQUALS_TOKEN,
];
