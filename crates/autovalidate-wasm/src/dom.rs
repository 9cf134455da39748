//! DOM access for the walker

use std::borrow::Cow;
use std::collections::HashSet;

use autovalidate_core::walker::checked_radio_groups;
use autovalidate_core::FormNode;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

/// A live DOM element seen through [`FormNode`]
#[derive(Debug, Clone)]
pub struct DomNode(pub Element);

impl DomNode {
    fn input(&self) -> Option<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>()
    }
}

impl FormNode for DomNode {
    fn children(&self) -> Vec<Cow<'_, Self>> {
        let children = self.0.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .map(|element| Cow::Owned(DomNode(element)))
            .collect()
    }

    fn has_children(&self) -> bool {
        self.0.child_element_count() > 0
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn value(&self) -> String {
        if let Some(input) = self.input() {
            input.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn is_checked(&self) -> bool {
        self.input().is_some_and(|input| input.checked())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn is_radio(&self) -> bool {
        self.input()
            .is_some_and(|input| input.type_().eq_ignore_ascii_case("radio"))
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }
}

/// Names of radio groups with a checked member anywhere in the form's
/// document. Detached forms only see their own radios.
pub fn document_radio_groups(form: &Element) -> Result<HashSet<String>, JsValue> {
    let Some(document) = form.owner_document().filter(|_| form.is_connected()) else {
        return Ok(checked_radio_groups(&DomNode(form.clone())));
    };
    let checked = document.query_selector_all("input[type=radio]:checked")?;
    Ok(elements(&checked)
        .iter()
        .filter_map(|radio| radio.get_attribute("name"))
        .collect())
}

/// Elements of a node list, skipping non-element nodes
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Quote `value` for use inside a single-quoted CSS attribute selector
pub fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
