//! Check command implementation.
//!
//! The `obsolint check` command validates analysis units against the loaded
//! configuration and reports obsolete options.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config, primary_config_path, ConfigPaths};
use crate::driver::{normalize_path, AnalysisUnit, Driver, Report};
use crate::error::{ObsolintError, Result};
use crate::lint::{
    CancellationToken, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat,
    SarifFormatter, Severity,
};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    config_override: Option<PathBuf>,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_override: None,
            use_color: false,
        }
    }

    /// Color human-readable diagnostics.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Load only this config file.
    pub fn with_config_override(mut self, path: Option<&Path>) -> Self {
        self.config_override = path.map(Path::to_path_buf);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// `path` relative to the project root when it lies inside it.
    ///
    /// Relative paths are taken from the project root, and `.` and `..`
    /// are resolved lexically, so override globs see `legacy/Old.cs` for
    /// `./legacy/Old.cs` as well.
    fn unit_path(&self, path: &Path) -> PathBuf {
        let root = normalize_path(&self.project_root);
        let full = normalize_path(&root.join(path));
        match full.strip_prefix(&root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => full,
        }
    }

    fn units(&self, config_path: &Path) -> Vec<AnalysisUnit> {
        if self.args.paths.is_empty() {
            return vec![AnalysisUnit::new(config_path)];
        }

        self.args
            .paths
            .iter()
            .map(|path| AnalysisUnit::new(self.unit_path(path)))
            .collect()
    }

    fn config_exists(&self) -> bool {
        match &self.config_override {
            Some(path) => path.is_file(),
            None => ConfigPaths::discover(&self.project_root).has_project_config(),
        }
    }

    fn format_output(&self, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();

        let written = match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output),
            OutputFormat::Sarif => SarifFormatter::new("obsolint", env!("CARGO_PKG_VERSION"))
                .format(diagnostics, &mut output),
            OutputFormat::Human => {
                HumanFormatter::new(self.use_color).format(diagnostics, &mut output)
            }
        };
        if let Err(e) = written {
            tracing::debug!("Formatter failed: {}", e);
        }

        String::from_utf8_lossy(&output).into_owned()
    }

    fn show_details(&self, report: &Report, ui: &mut dyn UserInterface) {
        for unit in &report.units {
            ui.message(&format!(
                "{}: {} obsolete option(s)",
                unit.path.display(),
                unit.findings.len()
            ));
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.config_exists() {
            ui.error(&format!(
                "No configuration found in {}. Create .obsolint/config.yml first.",
                self.project_root.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(ObsolintError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let config_path =
            primary_config_path(&self.project_root, self.config_override.as_deref());
        let config_path = self.unit_path(&config_path);

        let driver = match Driver::new(&config) {
            Ok(driver) => driver.with_origin(&config_path),
            Err(ObsolintError::ConfigValidationError { message }) => {
                ui.error(&format!("Invalid configuration: {}", message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let units = self.units(&config_path);
        let report = driver.run(&units, &CancellationToken::new())?;

        if ui.output_mode().shows_details() {
            self.show_details(&report, ui);
        }

        let diagnostics = report.diagnostics();
        let has_errors = report.count(Severity::Error) > 0;
        let has_warnings = report.count(Severity::Warning) > 0;
        let should_fail = has_errors || (self.args.strict && has_warnings);

        match self.args.format {
            OutputFormat::Human if diagnostics.is_empty() => {
                ui.success(&format!(
                    "No obsolete options found in {} unit(s)",
                    report.units.len()
                ));
            }
            OutputFormat::Human => {
                let output = self.format_output(&diagnostics);
                ui.message(output.trim_end());
            }
            OutputFormat::Json | OutputFormat::Sarif => {
                ui.data(&self.format_output(&diagnostics));
            }
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
