// File: src/rules.rs
// Purpose: Built-in validation rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::{Rule, RuleRegistry};
use crate::result::ValidationResult;
use crate::state::ElementState;

/// Check types recorded by the built-in rules
pub mod check_type {
    pub const RADIO: &str = "radio";
    pub const INPUT_STRING: &str = "input_string";
    pub const INPUT_EMAIL: &str = "input_email";
    pub const CHECKBOX: &str = "checkbox";
    pub const INPUT_NUMBER: &str = "input_number";
}

/// Error kinds recorded by the built-in rules
pub mod error_kind {
    pub const EMPTY: &str = "empty";
    pub const INVALID: &str = "invalid";
    pub const EPOST: &str = "epost";
    pub const UNCHECKED: &str = "unchecked";
    pub const NOT_A_NUMBER: &str = "not a number";
}

/// Domain suffix rejected by the `epost` rule
pub const EPOST_SUFFIX: &str = "@epost.de";

// Dot-separated local part, dot-separated domain, 2-4 letter final label
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_a-zA-Z0-9-]+(\.[_a-zA-Z0-9-]+)*@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*(\.[a-zA-Z]{2,4})$")
        .unwrap()
});

// What JavaScript's Number() accepts besides the empty string
static NUMERIC_LITERAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|[+-]?Infinity|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
    )
    .unwrap()
});

pub fn register_builtins(registry: &mut RuleRegistry) {
    registry.register("radio", radio);
    registry.register("string", string);
    registry.register("email", email);
    registry.register("epost", Epost);
    registry.register("checkbox", checkbox);
    registry.register("number", number);
}

/// Email format check on the raw, untrimmed value
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_epost_address(value: &str) -> bool {
    value.to_lowercase().ends_with(EPOST_SUFFIX)
}

/// Whether `value` converts to a number the way JavaScript's `Number()`
/// does: surrounding whitespace ignored, blank text is not a literal here.
pub fn is_numeric_literal(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && NUMERIC_LITERAL_REGEX.is_match(trimmed)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Some radio in the element's group is checked
pub fn radio(element: &ElementState, sink: &mut ValidationResult) -> bool {
    if !element.group_checked {
        sink.record(&element.name, check_type::RADIO, error_kind::UNCHECKED);
        return false;
    }
    true
}

/// Value is not blank
pub fn string(element: &ElementState, sink: &mut ValidationResult) -> bool {
    if is_blank(&element.value) {
        sink.record(&element.name, check_type::INPUT_STRING, error_kind::EMPTY);
        return false;
    }
    true
}

/// Value is a well-formed email address. Blank optional fields pass.
pub fn email(element: &ElementState, sink: &mut ValidationResult) -> bool {
    let blank = is_blank(&element.value);
    if blank && !element.optional {
        sink.record(&element.name, check_type::INPUT_EMAIL, error_kind::EMPTY);
        return false;
    }
    if !blank && !is_valid_email(&element.value) {
        sink.record(&element.name, check_type::INPUT_EMAIL, error_kind::INVALID);
        return false;
    }
    true
}

/// [`email`], then rejects `@epost.de` addresses.
///
/// Both checks always run, so an address failing both records two failures
/// and only the `epost` one survives in the result.
pub fn epost(element: &ElementState, sink: &mut ValidationResult) -> bool {
    let email_ok = email(element, sink);
    reject_epost(element, sink, email_ok)
}

fn reject_epost(element: &ElementState, sink: &mut ValidationResult, email_ok: bool) -> bool {
    if is_epost_address(&element.value) {
        sink.record(&element.name, check_type::INPUT_EMAIL, error_kind::EPOST);
        return false;
    }
    email_ok
}

/// The registered `epost` rule. Inside a pass the format check is whatever
/// is registered under `email`; the built-in [`email`] when nothing is.
pub struct Epost;

impl Rule for Epost {
    fn check(&self, element: &ElementState, sink: &mut ValidationResult) -> bool {
        epost(element, sink)
    }

    fn check_in(
        &self,
        element: &ElementState,
        sink: &mut ValidationResult,
        registry: &RuleRegistry,
    ) -> bool {
        let email_ok = match registry.get("email") {
            Ok(rule) => rule.check(element, sink),
            Err(_) => email(element, sink),
        };
        reject_epost(element, sink, email_ok)
    }
}

pub fn checkbox(element: &ElementState, sink: &mut ValidationResult) -> bool {
    if !element.checked {
        sink.record(&element.name, check_type::CHECKBOX, error_kind::UNCHECKED);
        return false;
    }
    true
}

/// Value is numeric. Blank optional fields pass.
pub fn number(element: &ElementState, sink: &mut ValidationResult) -> bool {
    let blank = is_blank(&element.value);
    if blank && !element.optional {
        sink.record(&element.name, check_type::INPUT_NUMBER, error_kind::EMPTY);
        return false;
    }
    if !blank && !is_numeric_literal(&element.value) {
        sink.record(
            &element.name,
            check_type::INPUT_NUMBER,
            error_kind::NOT_A_NUMBER,
        );
        return false;
    }
    true
}
