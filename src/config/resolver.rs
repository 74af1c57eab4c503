//! Per-unit option resolution.
//!
//! A unit's options are the global `options:` table with every matching
//! `overrides:` entry layered on top, in declaration order (later wins).

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use super::options::OptionMap;
use super::schema::{ObsolintConfig, OverrideConfig};
use crate::error::{ObsolintError, Result};

/// Resolves option values for analysis units.
#[derive(Debug)]
pub struct OptionResolver<'a> {
    config: &'a ObsolintConfig,
    scopes: Vec<(GlobMatcher, &'a OverrideConfig)>,
    origin: Option<PathBuf>,
}

impl<'a> OptionResolver<'a> {
    /// Compile the override globs of a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for a glob that does not compile.
    pub fn new(config: &'a ObsolintConfig) -> Result<Self> {
        let mut scopes = Vec::with_capacity(config.overrides.len());

        for scope in &config.overrides {
            let glob = GlobBuilder::new(&scope.files)
                .literal_separator(true)
                .build()
                .map_err(|e| ObsolintError::ConfigValidationError {
                    message: format!("invalid glob '{}' in overrides: {}", scope.files, e),
                })?;
            scopes.push((glob.compile_matcher(), scope));
        }

        Ok(Self {
            config,
            scopes,
            origin: None,
        })
    }

    /// Record `path` as the origin of every resolved value.
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin = Some(path.into());
        self
    }

    /// Resolve the options for one unit.
    ///
    /// `unit_path` is matched as given, so callers should pass paths relative
    /// to the project root.
    pub fn resolve(&self, unit_path: &Path) -> OptionMap {
        let mut resolved = OptionMap::new();
        self.apply(&mut resolved, self.config.options.iter());

        for (matcher, scope) in &self.scopes {
            if matcher.is_match(unit_path) {
                tracing::trace!(
                    "Override '{}' applies to {}",
                    scope.files,
                    unit_path.display()
                );
                self.apply(&mut resolved, scope.options.iter());
            }
        }

        resolved
    }

    fn apply<'v>(
        &self,
        resolved: &mut OptionMap,
        values: impl Iterator<Item = (&'v String, &'v String)>,
    ) {
        for (key, value) in values {
            match &self.origin {
                Some(origin) => resolved.insert_with_origin(key.as_str(), value.as_str(), origin),
                None => resolved.insert(key.as_str(), value.as_str()),
            }
        }
    }
}
