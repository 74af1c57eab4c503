//! Per-unit analysis context.
//!
//! A [`UnitContext`] is the read-only view of one analysis unit that rules
//! and the validator evaluate against: its path, whether it is generated
//! code, the analyzer-wide settings, and the unit's resolved options.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::rule::SeverityOverride;
use crate::config::{AnalyzerSettings, ResolvedConfig};

/// Resolved-option key holding a unit-level severity for `rule_id`.
pub fn severity_key(rule_id: &str) -> String {
    format!("dotnet_diagnostic.{}.severity", rule_id)
}

/// Cooperative cancellation flag shared between a host and its workers.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Read-only view of one analysis unit.
#[derive(Clone, Copy)]
pub struct UnitContext<'a> {
    /// Path of the unit, as reported in findings.
    pub path: &'a Path,
    /// Whether the unit is generated code.
    pub generated: bool,
    /// Analyzer-wide severity settings.
    pub settings: &'a AnalyzerSettings,
    /// The unit's resolved options.
    pub options: &'a dyn ResolvedConfig,
    /// Host cancellation signal, if any.
    pub cancellation: Option<&'a CancellationToken>,
}

impl<'a> UnitContext<'a> {
    pub fn new(
        path: &'a Path,
        settings: &'a AnalyzerSettings,
        options: &'a dyn ResolvedConfig,
    ) -> Self {
        Self {
            path,
            generated: false,
            settings,
            options,
            cancellation: None,
        }
    }

    /// Mark the unit as generated (or not).
    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    /// Attach the host's cancellation token.
    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Unit-level severity for a rule, read from the resolved options.
    ///
    /// Values outside the severity vocabulary are ignored.
    pub fn severity_override(&self, rule_id: &str) -> Option<SeverityOverride> {
        let value = self.options.get(&severity_key(rule_id))?;
        match value.parse() {
            Ok(severity) => Some(severity),
            Err(e) => {
                tracing::debug!(
                    "Ignoring severity for {} in {}: {}",
                    rule_id,
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(CancellationToken::is_cancelled)
    }
}

impl std::fmt::Debug for UnitContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitContext")
            .field("path", &self.path)
            .field("generated", &self.generated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionMap;
    use crate::lint::Severity;

    #[test]
    fn severity_key_format() {
        assert_eq!(severity_key("RCS0051"), "dotnet_diagnostic.RCS0051.severity");
    }

    #[test]
    fn unit_severity_override_is_read_from_options() {
        let settings = AnalyzerSettings::default();
        let options: OptionMap = [("dotnet_diagnostic.RCS0051.severity", "none")]
            .into_iter()
            .collect();
        let unit = UnitContext::new(Path::new("a.cs"), &settings, &options);

        assert_eq!(
            unit.severity_override("RCS0051"),
            Some(SeverityOverride::Disabled)
        );
        assert_eq!(unit.severity_override("RCS0011"), None);
    }

    #[test]
    fn malformed_unit_severity_is_ignored() {
        let settings = AnalyzerSettings::default();
        let options: OptionMap = [("dotnet_diagnostic.RCS0051.severity", "loud")]
            .into_iter()
            .collect();
        let unit = UnitContext::new(Path::new("a.cs"), &settings, &options);

        assert_eq!(unit.severity_override("RCS0051"), None);
    }

    #[test]
    fn unit_severity_accepts_levels() {
        let settings = AnalyzerSettings::default();
        let options: OptionMap = [("dotnet_diagnostic.ROS0002.severity", "error")]
            .into_iter()
            .collect();
        let unit = UnitContext::new(Path::new("a.cs"), &settings, &options);

        assert_eq!(
            unit.severity_override("ROS0002"),
            Some(SeverityOverride::Enabled(Severity::Error))
        );
    }

    #[test]
    fn cancellation_token_is_shared_between_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn unit_reports_cancellation_through_token() {
        let settings = AnalyzerSettings::default();
        let options = OptionMap::new();
        let token = CancellationToken::new();
        let unit =
            UnitContext::new(Path::new("a.cs"), &settings, &options).with_cancellation(&token);

        assert!(!unit.is_cancelled());
        token.cancel();
        assert!(unit.is_cancelled());
    }

    #[test]
    fn unit_without_token_is_never_cancelled() {
        let settings = AnalyzerSettings::default();
        let options = OptionMap::new();
        let unit = UnitContext::new(Path::new("a.cs"), &settings, &options);

        assert!(!unit.is_cancelled());
    }
}
