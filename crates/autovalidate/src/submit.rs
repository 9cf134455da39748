// File: src/submit.rs
// Purpose: Validate on submit and decide whether the form goes out

use std::collections::HashMap;
use std::fmt;

use autovalidate_core::{FormNode, FormValidator, ValidationResult};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::facts::FormFacts;
use crate::feedback::{plan_feedback, Feedback, SubmitGate};

/// Callback run once a form passes validation.
///
/// `Some(false)` cancels the submit, `Some(true)` or `None` lets it through.
pub type SubmitCallback = Box<dyn Fn() -> Option<bool>>;

/// Resolves callback names that were not registered up front
pub type CallbackResolver = Box<dyn Fn(&str) -> Option<Option<bool>>>;

/// Callbacks a form can name through its callback attribute
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<String, SubmitCallback>,
    fallback: Option<CallbackResolver>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: &str, callback: F)
    where
        F: Fn() -> Option<bool> + 'static,
    {
        self.callbacks.insert(name.to_string(), Box::new(callback));
    }

    pub fn has(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    /// Consulted for names without a registered callback
    pub fn set_fallback<F>(&mut self, resolver: F)
    where
        F: Fn(&str) -> Option<Option<bool>> + 'static,
    {
        self.fallback = Some(Box::new(resolver));
    }

    /// Run the callback registered as `name`, `None` if there is none
    pub fn call(&self, name: &str) -> Option<Option<bool>> {
        match self.callbacks.get(name) {
            Some(callback) => Some(callback()),
            None => self.fallback.as_ref().and_then(|resolve| resolve(name)),
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.callbacks.keys().collect();
        names.sort();
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &names)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// Result of handling one submit
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub result: ValidationResult,
    pub facts: FormFacts,
    pub feedback: Feedback,
    /// Let the browser submit the form
    pub allow_submit: bool,
}

/// Validator, settings and callbacks for forms that validate themselves on
/// submit
pub struct AutoValidator {
    validator: FormValidator,
    settings: Settings,
    callback: Option<SubmitCallback>,
    callbacks: CallbackRegistry,
}

impl AutoValidator {
    /// Built-in rules, walker configured from `settings`
    pub fn new(settings: Settings) -> Self {
        let validator = FormValidator::new().with_options(settings.walk_options());
        Self::with_validator(validator, settings)
    }

    pub fn with_validator(validator: FormValidator, settings: Settings) -> Self {
        Self {
            validator,
            settings,
            callback: None,
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Callback used for every form, taking precedence over named callbacks
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> Option<bool> + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn register_callback<F>(&mut self, name: &str, callback: F) -> &mut Self
    where
        F: Fn() -> Option<bool> + 'static,
    {
        self.callbacks.register(name, callback);
        self
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut FormValidator {
        &mut self.validator
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn callbacks_mut(&mut self) -> &mut CallbackRegistry {
        &mut self.callbacks
    }

    /// Validate `form`, plan its feedback and decide whether it may submit
    pub fn on_submit<N: FormNode>(&self, form: &N) -> SubmitOutcome {
        let result = self.validator.validate(form);
        self.respond(form, result)
    }

    /// Plan feedback and the submit decision for a result produced elsewhere
    pub fn respond<N: FormNode>(&self, form: &N, result: ValidationResult) -> SubmitOutcome {
        let facts = FormFacts::collect(form, &self.settings);
        let feedback = plan_feedback(&result, &facts, &self.settings);

        let allow_submit = match &feedback.gate {
            SubmitGate::Block => {
                debug!(failures = result.len(), "Submit blocked by validation");
                false
            }
            SubmitGate::Proceed { callback } => self.run_callback(callback),
        };

        SubmitOutcome {
            result,
            facts,
            feedback,
            allow_submit,
        }
    }

    fn run_callback(&self, name: &str) -> bool {
        if let Some(callback) = &self.callback {
            return callback().unwrap_or(true);
        }

        match self.callbacks.call(name) {
            Some(answer) => answer.unwrap_or(true),
            None => {
                if name != self.settings.default_callback_function {
                    warn!(callback = %name, "Submit callback not registered, submitting");
                }
                true
            }
        }
    }
}

impl fmt::Debug for AutoValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoValidator")
            .field("validator", &self.validator)
            .field("settings", &self.settings)
            .field("callback", &self.callback.is_some())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autovalidate_core::Element;
    use std::cell::Cell;
    use std::rc::Rc;

    fn valid_form() -> Element {
        Element::new("form").child(
            Element::input("text", "name")
                .attr("data-validation", "string")
                .value("Jane"),
        )
    }

    #[test]
    fn test_callback_registry() {
        let mut callbacks = CallbackRegistry::new();
        callbacks.register("stay", || Some(false));

        assert!(callbacks.has("stay"));
        assert_eq!(callbacks.call("stay"), Some(Some(false)));
        assert_eq!(callbacks.call("missing"), None);
    }

    #[test]
    fn test_fallback_resolver() {
        let mut callbacks = CallbackRegistry::new();
        callbacks.register("known", || Some(true));
        callbacks.set_fallback(|name| (name == "legacy").then_some(Some(false)));

        assert_eq!(callbacks.call("known"), Some(Some(true)));
        assert_eq!(callbacks.call("legacy"), Some(Some(false)));
        assert_eq!(callbacks.call("other"), None);
    }

    #[test]
    fn test_named_callback_decides() {
        let mut auto = AutoValidator::new(Settings::default());
        auto.register_callback("submit", || Some(false));

        assert!(!auto.on_submit(&valid_form()).allow_submit);
    }

    #[test]
    fn test_callback_without_answer_submits() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let auto = AutoValidator::new(Settings::default()).with_callback(move || {
            counter.set(counter.get() + 1);
            None
        });

        assert!(auto.on_submit(&valid_form()).allow_submit);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_missing_callback_submits() {
        let auto = AutoValidator::new(Settings::default());
        assert!(auto.on_submit(&valid_form()).allow_submit);
    }

    #[test]
    fn test_callback_not_run_when_invalid() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let auto = AutoValidator::new(Settings::default()).with_callback(move || {
            counter.set(counter.get() + 1);
            Some(true)
        });

        let form = Element::new("form")
            .child(Element::input("text", "name").attr("data-validation", "string"));
        let outcome = auto.on_submit(&form);

        assert!(!outcome.allow_submit);
        assert_eq!(calls.get(), 0);
    }
}
