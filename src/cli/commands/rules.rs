//! Rules command implementation.
//!
//! The `obsolint rules` command lists every obsolete option with its
//! replacement, and whether the rule that reads it is active under the
//! loaded settings.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::RulesArgs;
use crate::config::{load_config, primary_config_path, ObsolintConfig, OptionResolver};
use crate::error::{ObsolintError, Result};
use crate::lint::{effective_severity, ObsoleteOptionValidator, UnitContext};
use crate::ui::theme::ObsolintTheme;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

#[derive(Serialize)]
struct RulesOutput {
    umbrella: RuleState,
    options: Vec<ObsoleteOptionRow>,
}

#[derive(Serialize)]
struct RuleState {
    rule_id: &'static str,
    title: &'static str,
    severity: Option<String>,
}

#[derive(Serialize)]
struct ObsoleteOptionRow {
    rule: RuleState,
    legacy_key: &'static str,
    current_key: &'static str,
    replacement: &'static str,
}

/// The rules command implementation.
pub struct RulesCommand {
    project_root: PathBuf,
    args: RulesArgs,
    config_override: Option<PathBuf>,
    use_color: bool,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(project_root: &Path, args: RulesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_override: None,
            use_color: false,
        }
    }

    /// Color human-readable output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Load only this config file.
    pub fn with_config_override(mut self, path: Option<&Path>) -> Self {
        self.config_override = path.map(Path::to_path_buf);
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RulesArgs {
        &self.args
    }

    fn collect(&self, config: &ObsolintConfig) -> Result<RulesOutput> {
        let config_path =
            primary_config_path(&self.project_root, self.config_override.as_deref());
        let unit_path = config_path
            .strip_prefix(&self.project_root)
            .unwrap_or(&config_path);

        let options = OptionResolver::new(config)?.resolve(unit_path);
        let unit = UnitContext::new(unit_path, &config.analyzer, &options);

        let validator = ObsoleteOptionValidator::new();
        let state = |rule: &'static crate::lint::RuleDescriptor| RuleState {
            rule_id: rule.id,
            title: rule.title,
            severity: effective_severity(rule, &unit).map(|s| s.to_string()),
        };

        Ok(RulesOutput {
            umbrella: state(validator.umbrella()),
            options: validator
                .table()
                .iter()
                .map(|option| ObsoleteOptionRow {
                    rule: state(option.rule),
                    legacy_key: option.legacy.key,
                    current_key: option.current.key,
                    replacement: option.replacement,
                })
                .collect(),
        })
    }

    fn show(&self, output: &RulesOutput, ui: &mut dyn UserInterface) {
        let theme = if self.use_color {
            ObsolintTheme::new()
        } else {
            ObsolintTheme::plain()
        };
        let severity = |state: &RuleState| match &state.severity {
            Some(severity) => severity.clone(),
            None => "off".to_string(),
        };

        ui.show_header(&format!(
            "{} {} ({})",
            output.umbrella.rule_id,
            output.umbrella.title,
            severity(&output.umbrella)
        ));

        for row in &output.options {
            ui.message(&format!(
                "  {}  {}",
                theme.key.apply_to(row.rule.rule_id),
                theme.dim.apply_to(format!("{} ({})", row.rule.title, severity(&row.rule)))
            ));
            ui.message(&format!(
                "    {} -> {} = {}",
                row.legacy_key, row.current_key, row.replacement
            ));
        }
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(ObsolintError::ConfigNotFound { .. }) => {
                tracing::debug!("No configuration found, listing rules with defaults");
                if !self.args.json {
                    ui.warning(&format!(
                        "No configuration found in {}, showing default severities",
                        self.project_root.display()
                    ));
                }
                ObsolintConfig::default()
            }
            Err(ObsolintError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let output = match self.collect(&config) {
            Ok(output) => output,
            Err(ObsolintError::ConfigValidationError { message }) => {
                ui.error(&format!("Invalid configuration: {}", message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
            ui.data(&format!("{}\n", json));
        } else {
            self.show(&output, ui);
        }

        Ok(CommandResult::success())
    }
}
