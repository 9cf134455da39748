//! Rules implemented in JavaScript

use autovalidate_core::{ElementState, Rule, ValidationResult};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Failure object a JavaScript rule may return
#[derive(Deserialize, Debug)]
struct JsFailure {
    #[serde(rename = "type")]
    check_type: String,
    error: String,
}

/// A JavaScript function registered through `addValidation`
pub struct JsRule {
    name: String,
    function: js_sys::Function,
}

impl JsRule {
    pub fn new(name: &str, function: js_sys::Function) -> Self {
        Self {
            name: name.to_string(),
            function,
        }
    }

    fn fail(&self, element: &ElementState, sink: &mut ValidationResult) -> bool {
        sink.record(&element.name, &self.name, "invalid");
        false
    }
}

impl Rule for JsRule {
    fn check(&self, element: &ElementState, sink: &mut ValidationResult) -> bool {
        let argument = match serde_wasm_bindgen::to_value(element) {
            Ok(argument) => argument,
            Err(err) => {
                web_sys::console::error_1(&JsValue::from(err));
                return self.fail(element, sink);
            }
        };

        // A throwing rule counts as a failure
        let answer = match self.function.call1(&JsValue::NULL, &argument) {
            Ok(answer) => answer,
            Err(err) => {
                web_sys::console::error_2(&format!("autovalidate: rule '{}' threw", self.name).into(), &err);
                return self.fail(element, sink);
            }
        };

        if answer.is_undefined() || answer.is_null() || answer.as_bool() == Some(true) {
            return true;
        }
        if answer.as_bool() == Some(false) {
            return self.fail(element, sink);
        }

        match serde_wasm_bindgen::from_value::<JsFailure>(answer) {
            Ok(failure) => {
                sink.record(&element.name, failure.check_type, failure.error);
                false
            }
            Err(_) => self.fail(element, sink),
        }
    }
}

/// Submit answer of a JavaScript callback: `false` cancels, anything else
/// (including no return value) submits, an exception cancels
pub fn answer(result: Result<JsValue, JsValue>) -> Option<bool> {
    match result {
        Ok(value) => value.as_bool(),
        Err(err) => {
            web_sys::console::error_2(&"autovalidate: submit callback threw".into(), &err);
            Some(false)
        }
    }
}
