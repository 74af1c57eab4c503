//! Configuration loading, parsing, and option resolution.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Resolved option lookups in [`options`]
//! - Per-unit option resolution in [`resolver`]
//!
//! # Example
//!
//! ```
//! use obsolint::config::{load_merged_config, OptionResolver, ResolvedConfig};
//! use std::fs;
//! use std::path::Path;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".obsolint");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "options:\n  arrow_token_new_line: after").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! let resolver = OptionResolver::new(&config).unwrap();
//! let options = resolver.resolve(Path::new("src/Program.cs"));
//! assert_eq!(options.get("arrow_token_new_line"), Some("after"));
//! ```
//!
//! # Configuration File Locations
//!
//! obsolint discovers and merges configuration in this order:
//! 1. User global config (`$OBSOLINT_HOME/config.yml`)
//! 2. Project config (`.obsolint/config.yml`)
//! 3. Local overrides (`.obsolint/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod options;
pub mod resolver;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    merge_discovered, parse_config, primary_config_path, ConfigPaths, CONFIG_DIR, HOME_ENV,
};
pub use merger::{deep_merge, ConfigLayers};
pub use options::{OptionMap, ResolvedConfig};
pub use resolver::OptionResolver;
pub use schema::{AnalyzerSettings, ObsolintConfig, OutputMode, OverrideConfig, Settings};
