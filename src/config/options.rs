//! Resolved option values for one analysis unit.
//!
//! The validator only needs point lookups, so it reads configuration through
//! the [`ResolvedConfig`] trait. [`OptionMap`] is the in-memory implementation
//! produced by [`OptionResolver`](super::OptionResolver); hosts with their own
//! configuration subsystem can implement the trait directly.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::lint::Span;

/// Read-only key/value view of a unit's configuration.
pub trait ResolvedConfig {
    /// Value of `key`, if set.
    fn get(&self, key: &str) -> Option<&str>;

    /// Where the value of `key` was defined, if known.
    fn origin(&self, _key: &str) -> Option<Span> {
        None
    }
}

/// Option values with the file each one came from.
///
/// Keys are case-insensitive: they are stored in ASCII lowercase and
/// lookups are lowercased the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    values: BTreeMap<String, String>,
    origins: BTreeMap<String, PathBuf>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value with no known origin.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = fold_key(key.into());
        self.origins.remove(&key);
        self.values.insert(key, value.into());
    }

    /// Set a value defined in `origin`.
    pub fn insert_with_origin(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        origin: impl Into<PathBuf>,
    ) {
        let key = fold_key(key.into());
        self.origins.insert(key.clone(), origin.into());
        self.values.insert(key, value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

fn fold_key(mut key: String) -> String {
    key.make_ascii_lowercase();
    key
}

impl ResolvedConfig for OptionMap {
    fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn origin(&self, key: &str) -> Option<Span> {
        self.origins.get(&key.to_ascii_lowercase()).map(Span::file)
    }
}

/// Exact match first, then a case-insensitive scan.
fn lookup<'m>(
    mut entries: impl Iterator<Item = (&'m String, &'m String)>,
    exact: Option<&'m String>,
    key: &str,
) -> Option<&'m str> {
    exact
        .or_else(|| {
            entries
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
        .map(String::as_str)
}

impl ResolvedConfig for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        lookup(self.iter(), BTreeMap::get(self, key), key)
    }
}

impl ResolvedConfig for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        lookup(self.iter(), HashMap::get(self, key), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_map_point_lookup() {
        let map: OptionMap = [("arrow_token_new_line", "after")].into_iter().collect();

        assert_eq!(map.get("arrow_token_new_line"), Some("after"));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn origin_is_tracked_per_key() {
        let mut map = OptionMap::new();
        map.insert_with_origin("a", "true", "/project/.obsolint/config.yml");
        map.insert("b", "false");

        let span = map.origin("a").unwrap();
        assert_eq!(span.file, PathBuf::from("/project/.obsolint/config.yml"));
        assert!(map.origin("b").is_none());
    }

    #[test]
    fn plain_insert_clears_previous_origin() {
        let mut map = OptionMap::new();
        map.insert_with_origin("a", "true", "config.yml");
        map.insert("a", "false");

        assert_eq!(map.get("a"), Some("false"));
        assert!(map.origin("a").is_none());
    }

    #[test]
    fn iter_is_key_ordered() {
        let map: OptionMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn keys_match_case_insensitively() {
        let mut map = OptionMap::new();
        map.insert_with_origin(
            "Remove_New_Line_Between_Closing_Brace_And_While_Keyword",
            "false",
            "config.yml",
        );

        assert_eq!(
            map.get("remove_new_line_between_closing_brace_and_while_keyword"),
            Some("false")
        );
        assert_eq!(map.get("REMOVE_NEW_LINE_BETWEEN_CLOSING_BRACE_AND_WHILE_KEYWORD"), Some("false"));
        assert!(map
            .origin("remove_new_line_between_closing_brace_and_while_keyword")
            .is_some());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn later_spelling_replaces_earlier() {
        let mut map = OptionMap::new();
        map.insert("Arrow_Token_New_Line", "before");
        map.insert("arrow_token_new_line", "after");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("ARROW_TOKEN_NEW_LINE"), Some("after"));
    }

    #[test]
    fn std_maps_match_case_insensitively() {
        let mut hash = HashMap::new();
        hash.insert("Equals_Token_New_Line".to_string(), "after".to_string());
        assert_eq!(ResolvedConfig::get(&hash, "equals_token_new_line"), Some("after"));

        let mut tree = BTreeMap::new();
        tree.insert("equals_token_new_line".to_string(), "before".to_string());
        assert_eq!(ResolvedConfig::get(&tree, "EQUALS_TOKEN_NEW_LINE"), Some("before"));
    }

    #[test]
    fn std_maps_are_resolved_configs() {
        let mut hash = HashMap::new();
        hash.insert("k".to_string(), "v".to_string());
        assert_eq!(ResolvedConfig::get(&hash, "k"), Some("v"));

        let mut tree = BTreeMap::new();
        tree.insert("k".to_string(), "v".to_string());
        assert_eq!(ResolvedConfig::get(&tree, "k"), Some("v"));
        assert!(tree.origin("k").is_none());
    }
}
