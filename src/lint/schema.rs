//! JSON Schema generation for obsolint configuration.
//!
//! This module generates a JSON Schema (Draft-07) for `.obsolint/config.yml`,
//! enabling IDE autocomplete and validation. Known option keys are listed
//! from the option tables; obsolete keys are marked `deprecated`.

use serde_json::{json, Map, Value};

use crate::lint::ObsoleteOption;
use crate::lint::OBSOLETE_OPTIONS;
use crate::options::{OptionKind, CURRENT_OPTIONS};

const SEVERITY_LEVELS: [&str; 9] = [
    "none",
    "silent",
    "hidden",
    "hint",
    "suggestion",
    "info",
    "warning",
    "warn",
    "error",
];

/// Generates JSON Schema for obsolint configuration.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for the configuration file.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://obsolint.dev/schemas/config.json",
            "title": "obsolint Configuration",
            "description": "Analyzer settings and option values checked for obsolete keys",
            "type": "object",
            "properties": {
                "settings": self.settings_schema(),
                "analyzer": self.analyzer_schema(),
                "options": self.options_schema(),
                "overrides": self.overrides_schema()
            },
            "additionalProperties": false
        })
    }

    fn settings_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "Global settings",
            "properties": {
                "default_output": {
                    "type": "string",
                    "enum": ["normal", "verbose", "quiet", "silent"],
                    "default": "normal",
                    "description": "Default output verbosity"
                }
            },
            "additionalProperties": false
        })
    }

    fn severity_schema(&self) -> Value {
        json!({
            "type": "string",
            "enum": SEVERITY_LEVELS,
            "description": "Severity level; `none` turns the rule off"
        })
    }

    fn analyzer_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "Rule severities and suppressions",
            "properties": {
                "severity": {
                    "type": "object",
                    "description": "Severity per rule id",
                    "additionalProperties": self.severity_schema()
                },
                "categories": {
                    "type": "object",
                    "description": "Severity per rule category",
                    "additionalProperties": self.severity_schema()
                },
                "suppress": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Rule ids that never report"
                }
            },
            "additionalProperties": false
        })
    }

    /// Schema for an option map: known keys typed, other keys any scalar.
    fn options_schema(&self) -> Value {
        let mut properties = Map::new();

        for option in CURRENT_OPTIONS.iter() {
            properties.insert(
                option.key.to_string(),
                json!({
                    "enum": kind_values(option.kind),
                    "description": option.description
                }),
            );
        }

        for ObsoleteOption {
            legacy,
            current,
            replacement,
            ..
        } in OBSOLETE_OPTIONS.iter()
        {
            let description = format!("Obsolete, use '{} = {}' instead", current.key, replacement);
            properties.insert(
                legacy.key.to_string(),
                json!({
                    "enum": kind_values(legacy.kind),
                    "deprecated": true,
                    "description": description
                }),
            );
        }

        json!({
            "type": "object",
            "description": "Option values, as in an .editorconfig section",
            "properties": properties,
            "additionalProperties": {
                "type": ["string", "boolean", "number"]
            }
        })
    }

    fn overrides_schema(&self) -> Value {
        json!({
            "type": "array",
            "description": "Option values scoped to files matching a glob",
            "items": {
                "type": "object",
                "properties": {
                    "files": {
                        "type": "string",
                        "description": "Glob matched against analysis unit paths"
                    },
                    "options": self.options_schema()
                },
                "required": ["files"],
                "additionalProperties": false
            }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepted values for a kind, with booleans also allowed unquoted.
fn kind_values(kind: OptionKind) -> Value {
    let mut values: Vec<Value> = kind.allowed_values().iter().map(|v| json!(v)).collect();
    if kind == OptionKind::Bool {
        values.extend([json!(true), json!(false)]);
    }
    Value::Array(values)
}
