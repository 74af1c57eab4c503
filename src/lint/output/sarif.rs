//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, RuleRegistry, Severity};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    registry: RuleRegistry,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_configuration: Option<SarifConfiguration>,
}

#[derive(Serialize)]
struct SarifConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
}

impl SarifFormatter {
    /// Create a new SARIF formatter describing rules from the built-in registry.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            registry: RuleRegistry::with_builtins(),
        }
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Hint => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn rule(&self, id: &crate::lint::RuleId) -> SarifRule {
        match self.registry.get(id) {
            Some(descriptor) => SarifRule {
                id: id.to_string(),
                short_description: SarifMessage {
                    text: descriptor.title.to_string(),
                },
                default_configuration: Some(SarifConfiguration {
                    level: Self::severity_to_level(descriptor.default_severity),
                }),
            },
            None => SarifRule {
                id: id.to_string(),
                short_description: SarifMessage {
                    text: format!("Rule {}", id),
                },
                default_configuration: None,
            },
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = diagnostics.iter().map(|d| &d.rule_id).collect();
        let rules: Vec<_> = rule_ids.into_iter().map(|id| self.rule(id)).collect();

        let results: Vec<_> = diagnostics
            .iter()
            .map(|d| {
                let file = d.span.as_ref().map(|span| (span.file.as_path(), span.start_line));
                let file = file.or_else(|| d.unit.as_deref().map(|unit| (unit, 1)));
                let locations = file
                    .map(|(path, start_line)| {
                        vec![SarifLocation {
                            physical_location: SarifPhysicalLocation {
                                artifact_location: SarifArtifactLocation {
                                    uri: path.display().to_string(),
                                },
                                region: SarifRegion { start_line },
                            },
                        }]
                    })
                    .unwrap_or_default();

                let text = match &d.suggestion {
                    Some(suggestion) => format!("{} (set `{}`)", d.message, suggestion),
                    None => d.message.clone(),
                };

                SarifResult {
                    rule_id: d.rule_id.to_string(),
                    level: Self::severity_to_level(d.severity),
                    message: SarifMessage { text },
                    locations,
                }
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
