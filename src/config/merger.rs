//! Layering of configuration files.
//!
//! A project's configuration is built from up to three YAML documents
//! (user global, project, local). [`ConfigLayers`] folds them into one raw
//! value before it is deserialized into [`ObsolintConfig`](super::ObsolintConfig).
//!
//! Layering rules:
//!
//! - `settings`, `analyzer` (and its `severity` / `categories` tables) and
//!   `options` are mappings and merge key by key
//! - sequences such as `overrides` and `analyzer.suppress` are replaced by
//!   the later layer, never concatenated
//! - a key set to `null` removes the inherited value
//! - any other value replaces what was inherited

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base` in place.
fn merge_into(base: &mut Value, overlay: Value) {
    let Value::Mapping(target) = base else {
        *base = overlay;
        return;
    };
    let Value::Mapping(entries) = overlay else {
        *base = overlay;
        return;
    };

    for (key, value) in entries {
        if value.is_null() {
            target.remove(&key);
            continue;
        }
        match target.get_mut(&key) {
            Some(existing) => merge_into(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Merge two values, returning a new value. `overlay` wins at conflicts.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay.clone());
    merged
}

/// The configuration documents of a project, folded in load order.
#[derive(Debug, Clone)]
pub struct ConfigLayers {
    merged: Value,
    sources: Vec<PathBuf>,
}

impl ConfigLayers {
    pub fn new() -> Self {
        Self {
            merged: Value::Mapping(Mapping::new()),
            sources: Vec::new(),
        }
    }

    /// Layer the document loaded from `source` over everything pushed so far.
    ///
    /// An empty file parses to `null` and contributes nothing.
    pub fn push(&mut self, source: &Path, document: Value) {
        if document.is_null() {
            tracing::debug!("Skipping empty config layer {}", source.display());
            return;
        }

        tracing::debug!("Loaded config layer {}", source.display());
        merge_into(&mut self.merged, document);
        self.sources.push(source.to_path_buf());
    }

    /// Files that contributed to the merged value, lowest precedence first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn into_value(self) -> Value {
        self.merged
    }
}

impl Default for ConfigLayers {
    fn default() -> Self {
        Self::new()
    }
}
