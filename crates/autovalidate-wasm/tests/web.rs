//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use autovalidate_core::{FormNode, FormValidator};
use autovalidate_wasm::{add_validation, has_validation, validate, validate_form, DomNode};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn form(html: &str) -> web_sys::Element {
    let form = document().create_element("form").unwrap();
    form.set_inner_html(html);
    document().body().unwrap().append_child(&form).unwrap();
    form
}

fn error_of(result: &JsValue, name: &str) -> Option<String> {
    let failure = js_sys::Reflect::get(result, &JsValue::from_str(name)).ok()?;
    if failure.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&failure, &JsValue::from_str("error"))
        .ok()?
        .as_string()
}

#[wasm_bindgen_test]
fn test_dom_node_reads_controls() {
    let form = form(
        r#"<input type="radio" name="size" value="m" checked>
           <textarea name="note">hello</textarea>
           <select name="color"><option value="red" selected>Red</option></select>"#,
    );
    let node = DomNode(form);
    let children = node.children();

    assert!(children[0].is_radio());
    assert!(children[0].is_checked());
    assert_eq!(children[1].value(), "hello");
    assert_eq!(children[2].value(), "red");
}

#[wasm_bindgen_test]
fn test_validate_live_form() {
    let form = form(
        r#"<fieldset><input type="text" name="EMAIL" data-validation="email"></fieldset>
           <input type="checkbox" name="agb_cb" data-validation="checkbox" checked>
           <input type="text" name="AGE" class="optional" data-validation="number">"#,
    );

    let result = validate(&form).unwrap();
    assert_eq!(error_of(&result, "EMAIL").as_deref(), Some("empty"));
    assert_eq!(error_of(&result, "agb_cb"), None);
    assert_eq!(error_of(&result, "AGE"), None);
}

#[wasm_bindgen_test]
fn test_dom_and_owned_walkers_agree() {
    let form = form(
        r#"<input type="radio" name="salutation" data-validation="radio">
           <input type="text" name="n" data-validation="string" value=" ">"#,
    );
    let result = FormValidator::new().validate(&DomNode(form));

    assert_eq!(result.get("salutation").unwrap().error_kind, "unchecked");
    assert_eq!(result.get("n").unwrap().error_kind, "empty");
}

#[wasm_bindgen_test]
fn test_validate_form_alias() {
    let form = form(r#"<input type="text" name="city" data-validation="string">"#);
    let result = validate_form(&form).unwrap();
    assert_eq!(error_of(&result, "city").as_deref(), Some("empty"));
}

#[wasm_bindgen_test]
fn test_add_validation_from_javascript() {
    let rule = js_sys::Function::new_with_args("el", "return el.value === 'ok';");
    add_validation("mustBeOk", rule).unwrap();
    assert!(has_validation("MustBeOk"));

    let form = form(
        r#"<input type="text" name="a" data-validation="mustBeOk" value="ok">
           <input type="text" name="b" data-validation="mustBeOk" value="no">"#,
    );
    let result = validate(&form).unwrap();

    assert_eq!(error_of(&result, "a"), None);
    assert_eq!(error_of(&result, "b").as_deref(), Some("invalid"));
}

#[wasm_bindgen_test]
fn test_javascript_rule_returning_failure_object() {
    let rule = js_sys::Function::new_with_args(
        "el",
        "return /^\\d{5}$/.test(el.value) || { type: 'input_postal', error: 'format' };",
    );
    add_validation("postalCode", rule).unwrap();

    let form = form(r#"<input type="text" name="zip" data-validation="postalCode" value="123">"#);
    let result = validate(&form).unwrap();
    assert_eq!(error_of(&result, "zip").as_deref(), Some("format"));
}

#[wasm_bindgen_test]
fn test_radio_group_checked_elsewhere_in_document() {
    let order = form(r#"<input type="radio" name="shipping" value="post" data-validation="radio">"#);
    let result = validate(&order).unwrap();
    assert_eq!(error_of(&result, "shipping").as_deref(), Some("unchecked"));

    form(r#"<input type="radio" name="shipping" value="pickup" checked>"#);
    let result = validate(&order).unwrap();
    assert_eq!(error_of(&result, "shipping"), None);
}
