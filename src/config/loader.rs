//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::ConfigLayers;
use crate::config::schema::ObsolintConfig;
use crate::error::{ObsolintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".obsolint";

/// Environment variable pointing at the user's global config directory.
pub const HOME_ENV: &str = "OBSOLINT_HOME";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`$OBSOLINT_HOME/config.yml`)
/// 2. Project config (`.obsolint/config.yml`)
/// 3. Local overrides (`.obsolint/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: $OBSOLINT_HOME/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .obsolint/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .obsolint/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let user_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
        Self::discover_with_home(project_root, user_home.as_deref())
    }

    /// Discover config files with an explicit global config directory.
    pub fn discover_with_home(project_root: &Path, user_home: Option<&Path>) -> Self {
        Self {
            user_global: user_home.and_then(|home| existing(home.join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.obsolint` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into ObsolintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ObsolintConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into ObsolintConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ObsolintConfig> {
    if content.trim().is_empty() {
        return Ok(ObsolintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ObsolintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    serde_yaml::from_str(&content).map_err(|e| ObsolintError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObsolintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObsolintError::Io(e)
        }
    })
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<ObsolintConfig> {
    merge_discovered(project_root, &ConfigPaths::discover(project_root))
}

/// Load and merge the files named by `paths`.
pub fn merge_discovered(project_root: &Path, paths: &ConfigPaths) -> Result<ObsolintConfig> {
    let project_path = project_root.join(CONFIG_DIR).join("config.yml");

    if !paths.has_project_config() {
        return Err(ObsolintError::ConfigNotFound { path: project_path });
    }

    let mut layers = ConfigLayers::new();
    for path in paths.all_existing() {
        layers.push(path, load_config_value(path)?);
    }

    let merged = layers.into_value();

    serde_yaml::from_value(merged).map_err(|e| ObsolintError::ConfigParseError {
        path: project_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ObsolintConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}

/// The file a loaded configuration is attributed to in diagnostics.
pub fn primary_config_path(project_root: &Path, config_override: Option<&Path>) -> PathBuf {
    match config_override {
        Some(path) => path.to_path_buf(),
        None => project_root.join(CONFIG_DIR).join("config.yml"),
    }
}
