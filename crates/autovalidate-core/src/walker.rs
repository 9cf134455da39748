// File: src/walker.rs
// Purpose: Depth-first traversal applying rules to marked elements

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::node::{for_each_descendant, FormNode};
use crate::registry::RuleRegistry;
use crate::result::ValidationResult;
use crate::state::ElementState;

/// Attribute and class names the walker reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Attribute naming the rule of an element
    pub rule_attribute: String,
    /// Class that lets blank `email`/`number` fields pass
    pub optional_class: String,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            rule_attribute: "data-validation".to_string(),
            optional_class: "optional".to_string(),
        }
    }
}

/// State shared by every step of one pass
struct Pass<'a> {
    registry: &'a RuleRegistry,
    options: &'a WalkOptions,
    checked_groups: HashSet<String>,
}

/// Validate every marked descendant of `root` and return the failures.
///
/// Children are processed in document order; a node's subtree is validated
/// before the node itself. `root` is never checked. Each call starts from an
/// empty result.
pub fn walk<N: FormNode>(
    root: &N,
    registry: &RuleRegistry,
    options: &WalkOptions,
) -> ValidationResult {
    walk_with_groups(root, registry, options, checked_radio_groups(root))
}

/// [`walk`] with the checked radio groups supplied by the caller, for hosts
/// that resolve groups beyond `root` (a whole document).
pub fn walk_with_groups<N: FormNode>(
    root: &N,
    registry: &RuleRegistry,
    options: &WalkOptions,
    checked_groups: HashSet<String>,
) -> ValidationResult {
    let pass = Pass {
        registry,
        options,
        checked_groups,
    };

    let mut result = ValidationResult::new();
    visit(root, &pass, &mut result);

    debug!(failures = result.len(), "Validation pass finished");
    result
}

fn visit<N: FormNode>(node: &N, pass: &Pass<'_>, sink: &mut ValidationResult) {
    for child in node.children() {
        let child: &N = &child;
        if child.has_children() {
            visit(child, pass, sink);
        }
        apply_rule(child, pass, sink);
    }
}

fn apply_rule<N: FormNode>(node: &N, pass: &Pass<'_>, sink: &mut ValidationResult) {
    let Some(marker) = node.attribute(&pass.options.rule_attribute) else {
        return;
    };
    if !pass.registry.has(&marker) {
        trace!(rule = %marker, "No rule registered for marker, skipping");
        return;
    }
    let Ok(rule) = pass.registry.get(&marker) else {
        return;
    };

    let state = ElementState::read(node, pass.options, &pass.checked_groups);
    let writes_before = sink.writes();

    if rule.check_in(&state, sink, pass.registry) {
        trace!(rule = %marker, element = %state.name, "Element passed");
    } else if sink.writes() == writes_before {
        warn!(
            rule = %marker,
            element = %state.name,
            "Rule failed without recording a failure"
        );
    } else {
        debug!(rule = %marker, element = %state.name, "Element failed validation");
    }
}

/// Names of radio groups below `root` that have a checked member
pub fn checked_radio_groups<N: FormNode>(root: &N) -> HashSet<String> {
    let mut groups = HashSet::new();
    for_each_descendant(root, &mut |node: &N| {
        if node.is_radio() && node.is_checked() {
            if let Some(name) = node.name() {
                groups.insert(name);
            }
        }
    });
    groups
}
