//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use crate::ui::theme::ObsolintTheme;
use std::collections::BTreeSet;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: ObsolintTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            ObsolintTheme::new()
        } else {
            ObsolintTheme::plain()
        };
        Self { theme }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let label = severity.to_string();
        let style = match severity {
            Severity::Hint => &self.theme.hint,
            Severity::Warning => &self.theme.warning,
            Severity::Error => &self.theme.error,
        };
        style.apply_to(label).to_string()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // error[ROS0002]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id,
                self.theme.highlight.apply_to(&diag.message)
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  {} {}:{}",
                    self.theme.border.apply_to("-->"),
                    span.file.display(),
                    span.start_line
                )?;
            }

            if let Some(unit) = diag.distinct_unit() {
                writeln!(writer, "   = unit: {}", unit.display())?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: set `{}`", suggestion)?;
            }

            for related in &diag.related {
                writeln!(
                    writer,
                    "   = note: {} ({}:{})",
                    related.message,
                    related.span.file.display(),
                    related.span.start_line
                )?;
            }

            writeln!(writer)?;
        }

        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        let (errors, warnings, hints) = (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Hint),
        );

        if !diagnostics.is_empty() {
            let units: BTreeSet<_> = diagnostics
                .iter()
                .filter_map(|d| d.unit.as_deref())
                .collect();
            writeln!(
                writer,
                "Found {} error(s), {} warning(s) and {} hint(s) in {} unit(s)",
                errors,
                warnings,
                hints,
                units.len()
            )?;
        }

        Ok(())
    }
}
