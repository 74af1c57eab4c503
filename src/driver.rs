//! Analysis unit driver.
//!
//! The driver resolves options for every unit, runs the obsolete option pass
//! with a fresh [`ReportedState`] per unit, and collects the results into a
//! [`Report`] ordered by unit path. Units are validated in parallel.

use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;

use crate::config::{ObsolintConfig, OptionResolver};
use crate::error::{ObsolintError, Result};
use crate::lint::{
    effective_severity, CancellationToken, Finding, LintDiagnostic, ObsoleteOptionValidator,
    ReportedState, Severity, UnitContext,
};

const GENERATED_SUFFIXES: [&str; 5] = [
    ".g.cs",
    ".g.i.cs",
    ".designer.cs",
    ".generated.cs",
    ".assemblyattributes.cs",
];

const GENERATED_PREFIX: &str = "temporarygeneratedfile_";

/// Whether a file name marks generated code.
///
/// Matching is case-insensitive and only looks at the file name.
pub fn is_generated_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();

    name.starts_with(GENERATED_PREFIX) || GENERATED_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Lexically clean a unit path so it matches override globs.
///
/// `.` components are dropped and `..` removes the preceding name. Leading
/// `..` components of a relative path are kept. The filesystem is not read.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// One source file or compilation entry to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisUnit {
    pub path: PathBuf,
    pub generated: bool,
}

impl AnalysisUnit {
    /// A unit classified as generated or not by its file name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        let generated = is_generated_path(&path);
        Self { path, generated }
    }

    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }
}

/// Results for a single unit.
#[derive(Debug, Clone)]
pub struct UnitReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    /// Findings converted under the umbrella rule at its effective severity.
    pub diagnostics: Vec<LintDiagnostic>,
}

/// Results for a whole run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Per-unit results, sorted by path.
    pub units: Vec<UnitReport>,
}

impl Report {
    /// All diagnostics in unit order.
    pub fn diagnostics(&self) -> Vec<LintDiagnostic> {
        self.units
            .iter()
            .flat_map(|unit| unit.diagnostics.iter().cloned())
            .collect()
    }

    pub fn finding_count(&self) -> usize {
        self.units.iter().map(|unit| unit.findings.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }

    /// Number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.units
            .iter()
            .flat_map(|unit| &unit.diagnostics)
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Runs the obsolete option pass over a set of units.
pub struct Driver<'a> {
    config: &'a ObsolintConfig,
    resolver: OptionResolver<'a>,
    validator: ObsoleteOptionValidator,
}

impl<'a> Driver<'a> {
    /// Create a driver for a loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when an override glob does not compile.
    pub fn new(config: &'a ObsolintConfig) -> Result<Self> {
        Ok(Self {
            config,
            resolver: OptionResolver::new(config)?,
            validator: ObsoleteOptionValidator::new(),
        })
    }

    /// Report findings against `path`, usually the configuration file.
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolver = self.resolver.with_origin(path);
        self
    }

    /// Validate every unit.
    ///
    /// The token is checked before each unit starts. Once it is set, no new
    /// unit is started and the run fails with [`ObsolintError::Cancelled`].
    pub fn run(&self, units: &[AnalysisUnit], token: &CancellationToken) -> Result<Report> {
        tracing::debug!("Validating {} unit(s)", units.len());

        let results: Vec<Option<UnitReport>> = units
            .par_iter()
            .map(|unit| {
                if token.is_cancelled() {
                    None
                } else {
                    Some(self.analyze(unit, Some(token)))
                }
            })
            .collect();

        let completed = results.iter().filter(|r| r.is_some()).count();
        if completed < units.len() {
            return Err(ObsolintError::Cancelled { completed });
        }

        let mut units: Vec<UnitReport> = results.into_iter().flatten().collect();
        units.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Report { units })
    }

    /// Validate a single unit.
    pub fn analyze(&self, unit: &AnalysisUnit, token: Option<&CancellationToken>) -> UnitReport {
        let options = self.resolver.resolve(&unit.path);
        let mut context = UnitContext::new(&unit.path, &self.config.analyzer, &options)
            .with_generated(unit.generated);
        if let Some(token) = token {
            context = context.with_cancellation(token);
        }

        let mut state = ReportedState::new();
        let findings = self.validator.validate(&context, &mut state);

        let umbrella = self.validator.umbrella();
        let diagnostics = match effective_severity(umbrella, &context) {
            Some(severity) => findings
                .iter()
                .map(|finding| {
                    finding
                        .to_diagnostic(umbrella.rule_id(), severity)
                        .with_unit(&unit.path)
                })
                .collect(),
            None => Vec::new(),
        };

        UnitReport {
            path: unit.path.clone(),
            findings,
            diagnostics,
        }
    }
}
