//! Obsolete option detection.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Static descriptors of the rules that read options ([`RuleDescriptor`])
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Effectiveness** - Whether a rule would report in a unit ([`is_effective`])
//! - **Validator** - The obsolete option pass ([`ObsoleteOptionValidator`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use obsolint::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! let umbrella = registry.get(&RuleId::new("ROS0002")).unwrap();
//! assert_eq!(umbrella.default_severity, Severity::Warning);
//!
//! // Severity has ordering
//! assert!(Severity::Hint < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod context;
pub mod diagnostic;
pub mod effectiveness;
pub mod obsolete;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod span;
pub mod tracker;

pub use context::{severity_key, CancellationToken, UnitContext};
pub use diagnostic::{LintDiagnostic, RelatedInfo};
pub use effectiveness::{effective_severity, is_effective};
pub use obsolete::{Finding, ObsoleteOption, ObsoleteOptionValidator, OBSOLETE_OPTIONS};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use rule::{RuleDescriptor, RuleId, Severity, SeverityOverride};
pub use rules::{ANALYZER_OPTION_IS_OBSOLETE, BUILTIN_RULES};
pub use schema::SchemaGenerator;
pub use span::Span;
pub use tracker::{ReportedState, TupleId};
