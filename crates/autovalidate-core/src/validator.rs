// File: src/validator.rs
// Purpose: Registry bound to walk options, the main entry point

use crate::node::FormNode;
use crate::registry::{Rule, RuleRegistry};
use crate::result::ValidationResult;
use crate::walker::{walk, WalkOptions};

/// Validates forms with its own set of rules.
///
/// `FormValidator::new()` comes with the built-in rules; add more with
/// [`add_validation`](Self::add_validation).
#[derive(Debug, Default)]
pub struct FormValidator {
    registry: RuleRegistry,
    options: WalkOptions,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            options: WalkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Register `rule` under `name`, replacing an existing rule
    pub fn add_validation<R>(&mut self, name: &str, rule: R) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.registry.register(name, rule);
        self
    }

    /// Whether a rule is registered under `name`
    pub fn is_validation(&self, name: &str) -> bool {
        self.registry.has(name)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Run a full validation pass over the descendants of `root`
    pub fn validate<N: FormNode>(&self, root: &N) -> ValidationResult {
        walk(root, &self.registry, &self.options)
    }
}
