//! Applies a feedback plan to the DOM

use autovalidate::{Feedback, Settings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{css_string, elements};

/// Toggle error classes, show and hide message containers and raise the
/// alert, in the order the plan lists them
pub fn apply_feedback(form: &Element, feedback: &Feedback, settings: &Settings) -> Result<(), JsValue> {
    let document = form
        .owner_document()
        .ok_or_else(|| JsValue::from_str("form is not attached to a document"))?;

    if feedback.clear_error_classes {
        let selector = format!(".{}", settings.error_class);
        for element in elements(&form.query_selector_all(&selector)?) {
            element.class_list().remove_1(&settings.error_class)?;
        }
    }

    for target in &feedback.error_targets {
        let selector = format!("[name={}]", css_string(&target.name));
        for element in elements(&document.query_selector_all(&selector)?) {
            element.class_list().add_1(&settings.error_class)?;
        }
        if let Some(id) = &target.label_for {
            let selector = format!("label[for={}]", css_string(id));
            for label in elements(&document.query_selector_all(&selector)?) {
                label.class_list().add_1(&settings.error_class)?;
            }
        }
    }

    // Same filter and order as FormFacts::collect, so plan indexes line up
    let containers = elements(&form.query_selector_all(&format!(
        ".{}[data-for]",
        settings.custom_error_container_class
    ))?);
    let message_containers = elements(
        &form.query_selector_all(&format!(".{}", settings.validation_message_container_class))?,
    );

    if feedback.hide_containers {
        for element in message_containers.iter().chain(containers.iter()) {
            hide(element)?;
        }
    }

    for &index in &feedback.show_containers {
        if let Some(element) = containers.get(index) {
            show(element)?;
        }
    }

    if feedback.show_message_container {
        for element in &message_containers {
            show(element)?;
        }
    }

    if let Some(text) = &feedback.alert {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(text)?;
        }
    }

    Ok(())
}

fn hide(element: &Element) -> Result<(), JsValue> {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        element.style().set_property("display", "none")?;
    }
    Ok(())
}

/// Drop the inline `display`; fall back to `block` when a stylesheet keeps
/// the element hidden
fn show(element: &Element) -> Result<(), JsValue> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style().remove_property("display")?;

    let hidden_by_css = match web_sys::window() {
        Some(window) => window
            .get_computed_style(element)?
            .map(|style| style.get_property_value("display"))
            .transpose()?
            .is_some_and(|display| display == "none"),
        None => false,
    };
    if hidden_by_css {
        html.style().set_property("display", "block")?;
    }
    Ok(())
}
