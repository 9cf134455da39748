//! autovalidate WASM
//!
//! WebAssembly bindings for autovalidate. Validates live forms through the
//! DOM with the same rules as the headless crates and wires up submit
//! handling in the browser.
//!
//! ```javascript
//! import init, { validate, addValidation, autoValidate } from "./autovalidate_wasm.js";
//!
//! await init();
//! addValidation("postalCode", (el) => /^\d{5}$/.test(el.value) || { type: "input_postal", error: "invalid" });
//!
//! const errors = validate(document.querySelector("#newsletter"));
//! // {"EMAIL": {"type": "input_email", "error": "empty"}}
//!
//! autoValidate(document.querySelector("#raffle"), { addErrorClass: false });
//! ```

mod apply;
mod dom;
mod rule;
mod settings;

use std::cell::RefCell;

use autovalidate::AutoValidator;
use autovalidate_core::{walk_with_groups, FormValidator, ValidationResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub use dom::DomNode;

thread_local! {
    // Shared by validate, validateForm, addValidation and autoValidate
    static VALIDATOR: RefCell<FormValidator> = RefCell::new(FormValidator::new());

    // Submit listeners installed by autoValidate, one per form
    static LISTENERS: RefCell<Vec<(Element, Closure<dyn FnMut(Event)>)>> = RefCell::new(Vec::new());
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(result: &ValidationResult) -> Result<JsValue, JsValue> {
    // Plain objects rather than Maps, so the result reads like JSON
    Ok(result.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validate the descendants of `form`
///
/// # Returns
/// Object keyed by element name: `{"EMAIL": {"type": "input_email", "error": "empty"}}`.
/// Empty when every marked element passed.
#[wasm_bindgen]
pub fn validate(form: &Element) -> Result<JsValue, JsValue> {
    let node = DomNode(form.clone());
    let groups = dom::document_radio_groups(form)?;
    let result = VALIDATOR.with(|validator| {
        validator
            .try_borrow()
            .map(|validator| {
                walk_with_groups(&node, validator.registry(), validator.options(), groups)
            })
            .map_err(|_| JsValue::from_str("validation rules are being changed"))
    })?;
    to_js(&result)
}

/// Kept for compatibility
///
/// Deprecated: use `validate(form)` instead.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &Element) -> Result<JsValue, JsValue> {
    validate(form)
}

/// Register a rule implemented in JavaScript
///
/// The function receives `{name, value, checked, optional, groupChecked}`
/// and returns `true`, `null` or `undefined` to pass, `false` to fail with
/// `{type: name, error: "invalid"}`, or `{type, error}` to fail with those.
#[wasm_bindgen(js_name = addValidation)]
pub fn add_validation(name: &str, rule: js_sys::Function) -> Result<(), JsValue> {
    VALIDATOR.with(|validator| {
        let mut validator = validator
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot add a validation while a form is being validated"))?;
        validator.add_validation(name, rule::JsRule::new(name, rule));
        Ok(())
    })
}

/// Whether a rule is registered under `name`
#[wasm_bindgen(js_name = hasValidation)]
pub fn has_validation(name: &str) -> bool {
    VALIDATOR.with(|validator| {
        validator
            .try_borrow()
            .is_ok_and(|validator| validator.is_validation(name))
    })
}

/// Validate `form` on every submit, show the error feedback and cancel the
/// submit while errors remain
///
/// `options` takes the camelCase names of the presentation settings plus an
/// optional `callback` function run once the form is valid. Calling this
/// again for the same form replaces the previous listener.
#[wasm_bindgen(js_name = autoValidate)]
pub fn auto_validate(form: &Element, options: JsValue) -> Result<(), JsValue> {
    let callback = settings::callback(&options)?;
    let settings = settings::parse(&options)?;

    let mut auto = AutoValidator::new(settings);
    if let Some(callback) = callback {
        auto = auto.with_callback(move || rule::answer(callback.call0(&JsValue::NULL)));
    }
    auto.callbacks_mut().set_fallback(settings::global_callback);

    let target = form.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let node = DomNode(target.clone());
        let options = auto.settings().walk_options();
        let groups = match dom::document_radio_groups(&target) {
            Ok(groups) => groups,
            Err(err) => {
                web_sys::console::error_2(&"autovalidate: could not read radio groups".into(), &err);
                event.prevent_default();
                return;
            }
        };
        let result = VALIDATOR.with(|validator| {
            validator
                .try_borrow()
                .ok()
                .map(|validator| walk_with_groups(&node, validator.registry(), &options, groups))
        });
        let Some(result) = result else {
            web_sys::console::error_1(&"autovalidate: validation rules are being changed".into());
            event.prevent_default();
            return;
        };

        let outcome = auto.respond(&node, result);
        if let Err(err) = apply::apply_feedback(&target, &outcome.feedback, auto.settings()) {
            web_sys::console::error_2(&"autovalidate: could not show feedback".into(), &err);
        }
        if !outcome.allow_submit {
            event.prevent_default();
        }
    });

    remove_listener(form)?;
    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    LISTENERS.with(|listeners| listeners.borrow_mut().push((form.clone(), listener)));
    Ok(())
}

fn remove_listener(form: &Element) -> Result<(), JsValue> {
    let previous = LISTENERS.with(|listeners| {
        let mut listeners = listeners.borrow_mut();
        listeners
            .iter()
            .position(|(element, _)| js_sys::Object::is(element, form))
            .map(|index| listeners.remove(index))
    });

    if let Some((element, listener)) = previous {
        element.remove_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    }
    Ok(())
}
