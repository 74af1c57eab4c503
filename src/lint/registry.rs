//! Rule registry for looking up rule descriptors.
//!
//! The [`RuleRegistry`] stores the available rule descriptors and provides
//! methods for registering, retrieving, and iterating over them. Iteration
//! follows registration order so output built from it is deterministic.

use std::collections::HashMap;

use super::rule::{RuleDescriptor, RuleId};
use super::rules::BUILTIN_RULES;

/// Registry of available rule descriptors.
pub struct RuleRegistry {
    rules: Vec<&'static RuleDescriptor>,
    index: HashMap<RuleId, usize>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for rule in BUILTIN_RULES.iter().copied() {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule, replacing any rule with the same id in place.
    pub fn register(&mut self, rule: &'static RuleDescriptor) {
        match self.index.get(&rule.rule_id()) {
            Some(&position) => self.rules[position] = rule,
            None => {
                self.index.insert(rule.rule_id(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&'static RuleDescriptor> {
        self.index.get(id).map(|&position| self.rules[position])
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static RuleDescriptor> + '_ {
        self.rules.iter().copied()
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
