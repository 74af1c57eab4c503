//! obsolint - Detect obsolete analyzer configuration options.
//!
//! Analyzer options get renamed over time. obsolint reads the options that
//! apply to each analysis unit and reports deprecated keys that are still
//! set to a value with a modern equivalent, along with the key and value to
//! use instead. A key is only reported when the rule that reads it is
//! active for that unit, and at most once per unit.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and option resolution
//! - [`driver`] - Running the validator over many analysis units
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, effectiveness, and the obsolete option validator
//! - [`options`] - Option key descriptors
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use obsolint::config::parse_config;
//! use obsolint::driver::{AnalysisUnit, Driver};
//! use obsolint::lint::CancellationToken;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "options:\n  add_new_line_after_equals_sign_instead_of_before_it: after",
//!     Path::new("config.yml"),
//! )
//! .unwrap();
//!
//! let driver = Driver::new(&config).unwrap();
//! let report = driver
//!     .run(&[AnalysisUnit::new("src/Program.cs")], &CancellationToken::new())
//!     .unwrap();
//!
//! let finding = &report.units[0].findings[0];
//! assert_eq!(finding.current_key, "equals_token_new_line");
//! assert_eq!(finding.recommended_value, "after");
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod lint;
pub mod options;
pub mod ui;

pub use error::{ObsolintError, Result};
