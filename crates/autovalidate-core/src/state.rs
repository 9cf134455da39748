// File: src/state.rs
// Purpose: Snapshot of a single control handed to a rule

use std::collections::HashSet;

use serde::Serialize;

use crate::node::FormNode;
use crate::walker::WalkOptions;

/// What a rule gets to see of one element.
///
/// Built by the walker right before the rule runs. `group_checked` answers
/// the radio question: is any radio with this element's name checked
/// anywhere inside the validated root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementState {
    /// Value of the `name` attribute, empty when missing
    pub name: String,
    pub value: String,
    pub checked: bool,
    /// Element carries the optional class
    pub optional: bool,
    pub group_checked: bool,
}

impl ElementState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_group_checked(mut self, group_checked: bool) -> Self {
        self.group_checked = group_checked;
        self
    }

    /// Read the state of `node`. `checked_groups` holds the names of radio
    /// groups with a checked member.
    pub fn read<N: FormNode>(
        node: &N,
        options: &WalkOptions,
        checked_groups: &HashSet<String>,
    ) -> Self {
        let name = node.name().unwrap_or_default();
        let checked = node.is_checked();
        let group_checked =
            checked_groups.contains(&name) || (node.is_radio() && checked);

        Self {
            value: node.value(),
            checked,
            optional: node.has_class(&options.optional_class),
            group_checked,
            name,
        }
    }
}
