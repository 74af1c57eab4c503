//! Built-in option keys.
//!
//! Current keys and the legacy keys they replaced. Legacy keys are still
//! readable but should no longer be set.

use super::{ConfigOption, LegacyConfigOption, OptionKind, ValueConstraint};

pub static NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT: ConfigOption = ConfigOption::new(
    "new_line_before_while_in_do_statement",
    OptionKind::Bool,
    "Place a new line before the 'while' keyword of a do statement",
);

pub static BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS: ConfigOption = ConfigOption::new(
    "blank_line_between_single_line_accessors",
    OptionKind::Bool,
    "Separate single-line accessors with a blank line",
);

pub static BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS: ConfigOption = ConfigOption::new(
    "blank_line_between_using_directive_groups",
    OptionKind::Bool,
    "Separate using directives with different root namespaces with a blank line",
);

pub static ARROW_TOKEN_NEW_LINE: ConfigOption = ConfigOption::new(
    "arrow_token_new_line",
    OptionKind::NewLinePosition,
    "Place a new line before or after an expression-body arrow",
);

pub static CONDITIONAL_OPERATOR_NEW_LINE: ConfigOption = ConfigOption::new(
    "conditional_operator_new_line",
    OptionKind::NewLinePosition,
    "Place a new line before or after a conditional operator",
);

pub static BINARY_OPERATOR_NEW_LINE: ConfigOption = ConfigOption::new(
    "binary_operator_new_line",
    OptionKind::NewLinePosition,
    "Place a new line before or after a binary operator",
);

pub static EQUALS_TOKEN_NEW_LINE: ConfigOption = ConfigOption::new(
    "equals_token_new_line",
    OptionKind::NewLinePosition,
    "Place a new line before or after an equals sign",
);

pub static REMOVE_NEW_LINE_BETWEEN_CLOSING_BRACE_AND_WHILE_KEYWORD: LegacyConfigOption =
    LegacyConfigOption::new(
        "remove_new_line_between_closing_brace_and_while_keyword",
        OptionKind::Bool,
        ValueConstraint::Equals("false"),
    );

pub static REMOVE_EMPTY_LINE_BETWEEN_SINGLE_LINE_ACCESSORS: LegacyConfigOption =
    LegacyConfigOption::new(
        "remove_empty_line_between_single_line_accessors",
        OptionKind::Bool,
        ValueConstraint::Equals("false"),
    );

pub static REMOVE_EMPTY_LINE_BETWEEN_USING_DIRECTIVES_WITH_DIFFERENT_ROOT_NAMESPACE:
    LegacyConfigOption = LegacyConfigOption::new(
    "remove_empty_line_between_using_directives_with_different_root_namespace",
    OptionKind::Bool,
    ValueConstraint::Equals("false"),
);

pub static ADD_NEW_LINE_AFTER_EXPRESSION_BODY_ARROW_INSTEAD_OF_BEFORE_IT: LegacyConfigOption =
    LegacyConfigOption::new(
        "add_new_line_after_expression_body_arrow_instead_of_before_it",
        OptionKind::NewLinePosition,
        ValueConstraint::Equals("after"),
    );

pub static ADD_NEW_LINE_AFTER_CONDITIONAL_OPERATOR_INSTEAD_OF_BEFORE_IT: LegacyConfigOption =
    LegacyConfigOption::new(
        "add_new_line_after_conditional_operator_instead_of_before_it",
        OptionKind::NewLinePosition,
        ValueConstraint::Equals("after"),
    );

pub static ADD_NEW_LINE_AFTER_BINARY_OPERATOR_INSTEAD_OF_BEFORE_IT: LegacyConfigOption =
    LegacyConfigOption::new(
        "add_new_line_after_binary_operator_instead_of_before_it",
        OptionKind::NewLinePosition,
        ValueConstraint::Equals("after"),
    );

pub static ADD_NEW_LINE_AFTER_EQUALS_SIGN_INSTEAD_OF_BEFORE_IT: LegacyConfigOption =
    LegacyConfigOption::new(
        "add_new_line_after_equals_sign_instead_of_before_it",
        OptionKind::NewLinePosition,
        ValueConstraint::Equals("after"),
    );

/// All current keys.
pub static CURRENT_OPTIONS: [&ConfigOption; 7] = [
    &NEW_LINE_BEFORE_WHILE_IN_DO_STATEMENT,
    &BLANK_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
    &BLANK_LINE_BETWEEN_USING_DIRECTIVE_GROUPS,
    &ARROW_TOKEN_NEW_LINE,
    &CONDITIONAL_OPERATOR_NEW_LINE,
    &BINARY_OPERATOR_NEW_LINE,
    &EQUALS_TOKEN_NEW_LINE,
];

/// All legacy keys.
pub static LEGACY_OPTIONS: [&LegacyConfigOption; 7] = [
    &REMOVE_NEW_LINE_BETWEEN_CLOSING_BRACE_AND_WHILE_KEYWORD,
    &REMOVE_EMPTY_LINE_BETWEEN_SINGLE_LINE_ACCESSORS,
    &REMOVE_EMPTY_LINE_BETWEEN_USING_DIRECTIVES_WITH_DIFFERENT_ROOT_NAMESPACE,
    &ADD_NEW_LINE_AFTER_EXPRESSION_BODY_ARROW_INSTEAD_OF_BEFORE_IT,
    &ADD_NEW_LINE_AFTER_CONDITIONAL_OPERATOR_INSTEAD_OF_BEFORE_IT,
    &ADD_NEW_LINE_AFTER_BINARY_OPERATOR_INSTEAD_OF_BEFORE_IT,
    &ADD_NEW_LINE_AFTER_EQUALS_SIGN_INSTEAD_OF_BEFORE_IT,
];

/// Look up a current key by name.
pub fn find_option(key: &str) -> Option<&'static ConfigOption> {
    CURRENT_OPTIONS.iter().copied().find(|o| o.key == key)
}

/// Look up a legacy key by name.
pub fn find_legacy_option(key: &str) -> Option<&'static LegacyConfigOption> {
    LEGACY_OPTIONS.iter().copied().find(|o| o.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_across_current_and_legacy() {
        let mut seen = HashSet::new();
        for key in CURRENT_OPTIONS
            .iter()
            .map(|o| o.key)
            .chain(LEGACY_OPTIONS.iter().map(|o| o.key))
        {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn constraint_tokens_parse_in_their_own_domain() {
        for legacy in LEGACY_OPTIONS.iter() {
            if let ValueConstraint::Equals(token) = legacy.constraint {
                assert!(legacy.kind.parse(token).is_some(), "{}", legacy.key);
            }
        }
    }

    #[test]
    fn find_option_by_key() {
        let option = find_option("arrow_token_new_line").unwrap();
        assert_eq!(option.kind, OptionKind::NewLinePosition);
        assert!(find_option("remove_empty_line_between_single_line_accessors").is_none());
    }

    #[test]
    fn find_legacy_option_by_key() {
        assert!(find_legacy_option("remove_empty_line_between_single_line_accessors").is_some());
        assert!(find_legacy_option("arrow_token_new_line").is_none());
    }
}
