//! Configuration schema definitions for obsolint.
//!
//! This module contains the struct definitions that map to the
//! `.obsolint/config.yml` file format.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::lint::SeverityOverride;

/// Root configuration structure for `.obsolint/config.yml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObsolintConfig {
    /// Global settings
    pub settings: Settings,

    /// Severity overrides and suppressions
    pub analyzer: AnalyzerSettings,

    /// Option values that apply to every analysis unit
    #[serde(deserialize_with = "scalar_map")]
    pub options: BTreeMap<String, String>,

    /// Option values scoped to units matching a glob, applied in order
    pub overrides: Vec<OverrideConfig>,
}

/// Global settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default output mode: normal, verbose, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Normal,
    Verbose,
    Quiet,
    Silent,
}

/// Analyzer-wide severity settings.
///
/// These are the global overrides; a unit's own resolved options can still
/// override a rule's severity for that unit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerSettings {
    /// Per-rule severity, keyed by rule id
    pub severity: BTreeMap<String, SeverityOverride>,

    /// Per-category severity, keyed by category name
    pub categories: BTreeMap<String, SeverityOverride>,

    /// Rule ids that never report
    pub suppress: BTreeSet<String>,
}

impl AnalyzerSettings {
    pub fn is_suppressed(&self, rule_id: &str) -> bool {
        self.suppress.contains(rule_id)
    }

    pub fn rule_override(&self, rule_id: &str) -> Option<SeverityOverride> {
        self.severity.get(rule_id).copied()
    }

    pub fn category_override(&self, category: &str) -> Option<SeverityOverride> {
        self.categories.get(category).copied()
    }
}

/// Option values for the units a glob matches
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideConfig {
    /// Glob matched against the unit path
    pub files: String,

    /// Option values for matching units
    #[serde(default, deserialize_with = "scalar_map")]
    pub options: BTreeMap<String, String>,
}

/// Deserialize a mapping of option values, normalizing YAML scalars to strings.
///
/// `key: false` and `key: "false"` resolve to the same value. Null entries are
/// dropped so a local file can unset an inherited key.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, serde_yaml::Value> = BTreeMap::deserialize(deserializer)?;
    let mut options = BTreeMap::new();

    for (key, value) in raw {
        let value = match value {
            serde_yaml::Value::Null => continue,
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Number(n) => n.to_string(),
            _ => {
                return Err(de::Error::custom(format!(
                    "option '{}' must be a scalar value",
                    key
                )))
            }
        };
        options.insert(key, value);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: ObsolintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Normal);
        assert!(config.options.is_empty());
        assert!(config.overrides.is_empty());
        assert!(config.analyzer.suppress.is_empty());
    }

    #[test]
    fn options_normalize_scalars() {
        let config: ObsolintConfig = serde_yaml::from_str(
            r#"
options:
  remove_empty_line_between_single_line_accessors: false
  arrow_token_new_line: after
  max_line_length: 120
  unset_me: null
"#,
        )
        .unwrap();

        assert_eq!(
            config.options["remove_empty_line_between_single_line_accessors"],
            "false"
        );
        assert_eq!(config.options["arrow_token_new_line"], "after");
        assert_eq!(config.options["max_line_length"], "120");
        assert!(!config.options.contains_key("unset_me"));
    }

    #[test]
    fn options_reject_nested_values() {
        let result: Result<ObsolintConfig, _> = serde_yaml::from_str(
            r#"
options:
  nested:
    a: 1
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn analyzer_settings_parse() {
        let config: ObsolintConfig = serde_yaml::from_str(
            r#"
analyzer:
  severity:
    RCS0051: none
    ROS0002: error
  categories:
    Formatting: warning
  suppress: [RCS0027]
"#,
        )
        .unwrap();

        let analyzer = &config.analyzer;
        assert_eq!(
            analyzer.rule_override("RCS0051"),
            Some(SeverityOverride::Disabled)
        );
        assert_eq!(
            analyzer.rule_override("ROS0002"),
            Some(SeverityOverride::Enabled(Severity::Error))
        );
        assert_eq!(
            analyzer.category_override("Formatting"),
            Some(SeverityOverride::Enabled(Severity::Warning))
        );
        assert!(analyzer.is_suppressed("RCS0027"));
        assert!(!analyzer.is_suppressed("RCS0028"));
    }

    #[test]
    fn unknown_severity_token_is_rejected() {
        let result: Result<ObsolintConfig, _> = serde_yaml::from_str(
            r#"
analyzer:
  severity:
    RCS0051: loud
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        let result: Result<ObsolintConfig, _> = serde_yaml::from_str("steps: {}");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_parse_in_order() {
        let config: ObsolintConfig = serde_yaml::from_str(
            r#"
overrides:
  - files: "src/**/*.cs"
    options:
      arrow_token_new_line: before
  - files: "tests/**"
"#,
        )
        .unwrap();

        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].files, "src/**/*.cs");
        assert_eq!(config.overrides[0].options["arrow_token_new_line"], "before");
        assert!(config.overrides[1].options.is_empty());
    }

    #[test]
    fn output_mode_parses_lowercase() {
        let config: ObsolintConfig =
            serde_yaml::from_str("settings:\n  default_output: quiet").unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
    }
}
