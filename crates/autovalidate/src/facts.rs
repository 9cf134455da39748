// File: src/facts.rs
// Purpose: Read what the presentation layer needs from a form

use std::collections::HashMap;

use autovalidate_core::{for_each_descendant, FormNode};
use serde::Serialize;

use crate::config::Settings;
use crate::feedback::MessageMode;

/// A field-specific message element (`data-for`, optional `data-errortype`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContainer {
    /// Position among the form's error containers in document order
    pub index: usize,
    /// Element name the message belongs to
    pub target: String,
    /// Error kind the message is specific to, `None` for any error
    pub error_kind: Option<String>,
    pub text: String,
}

/// Everything about a form the feedback plan depends on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFacts {
    pub message_mode: MessageMode,
    /// Name of the callback to run when the form is valid
    pub callback: String,
    /// The form carries the no-error-class marker
    pub opts_out_of_error_class: bool,
    pub has_message_container: bool,
    pub error_containers: Vec<ErrorContainer>,
    /// First id seen per element name, used for `label[for]` lookups
    pub ids_by_name: HashMap<String, String>,
}

impl FormFacts {
    pub fn collect<N: FormNode>(form: &N, settings: &Settings) -> Self {
        let message_mode = MessageMode::parse(
            &form
                .attribute(&settings.validation_message_attribute)
                .unwrap_or_else(|| settings.default_validation_message_type.clone()),
        );
        let callback = form
            .attribute(&settings.validation_callback_attribute)
            .unwrap_or_else(|| settings.default_callback_function.clone());

        let mut facts = Self {
            message_mode,
            callback,
            opts_out_of_error_class: form.has_class(&settings.no_error_class),
            ..Self::default()
        };

        for_each_descendant(form, &mut |node: &N| {
            if node.has_class(&settings.validation_message_container_class) {
                facts.has_message_container = true;
            }

            if node.has_class(&settings.custom_error_container_class) {
                if let Some(target) = node.attribute("data-for") {
                    facts.error_containers.push(ErrorContainer {
                        index: facts.error_containers.len(),
                        target,
                        error_kind: node.attribute("data-errortype"),
                        text: node.text(),
                    });
                }
            }

            if let (Some(name), Some(id)) = (node.name(), node.id()) {
                facts.ids_by_name.entry(name).or_insert(id);
            }
        });

        facts
    }

    /// Containers for `name` specific to `error_kind`, or else the generic
    /// containers for `name`
    pub fn containers_for(&self, name: &str, error_kind: &str) -> Vec<&ErrorContainer> {
        let specific: Vec<&ErrorContainer> = self
            .error_containers
            .iter()
            .filter(|c| c.target == name && c.error_kind.as_deref() == Some(error_kind))
            .collect();
        if !specific.is_empty() {
            return specific;
        }

        self.error_containers
            .iter()
            .filter(|c| c.target == name && c.error_kind.is_none())
            .collect()
    }
}
