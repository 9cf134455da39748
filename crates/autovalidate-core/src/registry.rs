// File: src/registry.rs
// Purpose: Named validation rules and their lookup

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::UnknownRuleError;
use crate::result::ValidationResult;
use crate::rules;
use crate::state::ElementState;

/// A validation rule.
///
/// Returns `true` when the element passes. A rule that returns `false` must
/// record exactly one failure in `sink` first; it chooses the check type and
/// error kind itself.
pub trait Rule {
    fn check(&self, element: &ElementState, sink: &mut ValidationResult) -> bool;

    /// Like [`check`](Self::check), given the registry of the running pass.
    /// Rules that delegate to other registered rules override this.
    fn check_in(
        &self,
        element: &ElementState,
        sink: &mut ValidationResult,
        registry: &RuleRegistry,
    ) -> bool {
        let _ = registry;
        self.check(element, sink)
    }
}

impl<F> Rule for F
where
    F: Fn(&ElementState, &mut ValidationResult) -> bool,
{
    fn check(&self, element: &ElementState, sink: &mut ValidationResult) -> bool {
        self(element, sink)
    }
}

/// Lookup key for a rule name: first character upper-cased, rest untouched.
/// `fullName` and `FullName` share a key, `FULLNAME` does not.
pub fn normalize_rule_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rules by normalized name
pub struct RuleRegistry {
    rules: HashMap<String, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Registry without any rules
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry with radio, string, email, epost, checkbox and number
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        rules::register_builtins(&mut registry);
        registry
    }

    /// Store `rule` under `name`, replacing any rule with the same key
    pub fn register<R>(&mut self, name: &str, rule: R)
    where
        R: Rule + 'static,
    {
        let key = normalize_rule_name(name);
        if self.rules.insert(key.clone(), Box::new(rule)).is_some() {
            debug!(rule = %key, "Replaced validation rule");
        } else {
            debug!(rule = %key, "Registered validation rule");
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.rules.contains_key(&normalize_rule_name(name))
    }

    pub fn get(&self, name: &str) -> Result<&dyn Rule, UnknownRuleError> {
        self.rules
            .get(&normalize_rule_name(name))
            .map(|rule| &**rule)
            .ok_or_else(|| UnknownRuleError {
                name: name.to_string(),
            })
    }

    /// Normalized names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_fails(element: &ElementState, sink: &mut ValidationResult) -> bool {
        sink.record(&element.name, "custom", "nope");
        false
    }

    #[test]
    fn test_normalize_rule_name() {
        assert_eq!(normalize_rule_name("email"), "Email");
        assert_eq!(normalize_rule_name("fullName"), "FullName");
        assert_eq!(normalize_rule_name("FullName"), "FullName");
        assert_eq!(normalize_rule_name(""), "");
    }

    #[test]
    fn test_builtins_registered() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec!["Checkbox", "Email", "Epost", "Number", "Radio", "String"]
        );
        assert!(registry.has("email"));
        assert!(registry.has("Email"));
        assert!(!registry.has("EMAIL"));
    }

    #[test]
    fn test_get_unknown_rule() {
        let registry = RuleRegistry::empty();
        let err = registry.get("zip").err().unwrap();
        assert_eq!(err.name, "zip");
        assert_eq!(
            err.to_string(),
            "no validation rule registered under 'zip'"
        );
    }

    #[test]
    fn test_register_and_overwrite() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register("string", always_fails);
        assert_eq!(registry.len(), 6);

        let mut sink = ValidationResult::new();
        let passed = registry
            .get("String")
            .unwrap()
            .check(&ElementState::new("n").with_value("filled"), &mut sink);

        assert!(!passed);
        assert_eq!(sink.get("n").unwrap().check_type, "custom");
    }

    #[test]
    fn test_register_closure() {
        let mut registry = RuleRegistry::empty();
        let minimum = 3;
        registry.register(
            "minThree",
            move |element: &ElementState, sink: &mut ValidationResult| {
                if element.value.chars().count() < minimum {
                    sink.record(&element.name, "input_string", "short");
                    return false;
                }
                true
            },
        );

        assert!(registry.has("MinThree"));
        let mut sink = ValidationResult::new();
        let rule = registry.get("minThree").unwrap();
        assert!(rule.check(&ElementState::new("n").with_value("abcd"), &mut sink));
        assert!(!rule.check(&ElementState::new("n").with_value("ab"), &mut sink));
        assert_eq!(sink.get("n").unwrap().error_kind, "short");
    }
}
