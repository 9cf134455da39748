// File: src/element.rs
// Purpose: Owned element tree for validating forms without a DOM

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::FormNode;

/// An owned form element.
///
/// Mirrors the parts of a DOM element the validator reads. Classes live in
/// the `class` attribute, exactly like HTML. Deserializes from JSON such as
/// `{"tag": "input", "attributes": {"name": "EMAIL", "data-validation": "email"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub value: String,
    pub checked: bool,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// `<input type="..." name="...">`
    pub fn input(input_type: &str, name: &str) -> Self {
        Self::new("input").attr("type", input_type).attr("name", name)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a class to the `class` attribute
    pub fn class(mut self, class: &str) -> Self {
        let classes = self.attributes.entry("class".to_string()).or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .map(|c| c.split_whitespace())
            .into_iter()
            .flatten()
    }
}

impl FormNode for Element {
    fn children(&self) -> Vec<Cow<'_, Self>> {
        self.children.iter().map(Cow::Borrowed).collect()
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    fn is_radio(&self) -> bool {
        self.tag.eq_ignore_ascii_case("input")
            && self
                .attributes
                .get("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
    }

    fn text(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.children {
            text.push_str(&FormNode::text(child));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder_appends() {
        let el = Element::new("input").class("optional").class("wide");
        assert_eq!(el.attribute("class").as_deref(), Some("optional wide"));
        assert!(el.has_class("optional"));
        assert!(el.has_class("wide"));
        assert!(!el.has_class("opt"));
    }

    #[test]
    fn test_radio_role() {
        assert!(Element::input("radio", "gender").is_radio());
        assert!(Element::input("RADIO", "gender").is_radio());
        assert!(!Element::input("checkbox", "agb").is_radio());
        assert!(!Element::new("div").attr("type", "radio").is_radio());
    }

    #[test]
    fn test_text_includes_descendants() {
        let el = Element::new("div")
            .text("Please ")
            .child(Element::new("b").text("check"));
        assert_eq!(FormNode::text(&el), "Please check");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let el: Element = serde_json::from_str(
            r#"{"tag": "input", "attributes": {"name": "EMAIL", "data-validation": "email"}}"#,
        )
        .unwrap();
        assert_eq!(el.name().as_deref(), Some("EMAIL"));
        assert_eq!(el.value, "");
        assert!(!el.checked);
        assert!(el.children.is_empty());
    }
}
