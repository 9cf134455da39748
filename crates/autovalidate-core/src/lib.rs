//! autovalidate core
//!
//! Attribute-driven form validation. Rules are registered by name in a
//! [`RuleRegistry`]; the walker visits every descendant of a form root, picks
//! the rule named by the element's `data-validation` attribute and collects
//! failures into a [`ValidationResult`] keyed by element name.
//!
//! The walker only needs read access to the element tree, expressed by the
//! [`FormNode`] trait. [`Element`] is an owned, serde-friendly tree for
//! headless use; the browser binding implements the same trait over the DOM.
//!
//! ```rust
//! use autovalidate_core::{Element, FormValidator};
//!
//! let form = Element::new("form")
//!     .child(Element::input("text", "EMAIL").attr("data-validation", "email"))
//!     .child(Element::input("checkbox", "agb_cb").attr("data-validation", "checkbox"));
//!
//! let result = FormValidator::new().validate(&form);
//! assert_eq!(result.get("EMAIL").map(|f| f.error_kind.as_str()), Some("empty"));
//! assert_eq!(result.get("agb_cb").map(|f| f.error_kind.as_str()), Some("unchecked"));
//! ```

pub mod element;
pub mod error;
pub mod node;
pub mod registry;
pub mod result;
pub mod rules;
pub mod state;
pub mod validator;
pub mod walker;

pub use element::Element;
pub use error::UnknownRuleError;
pub use node::{for_each_descendant, FormNode};
pub use registry::{normalize_rule_name, Rule, RuleRegistry};
pub use result::{ValidationFailure, ValidationResult};
pub use state::ElementState;
pub use validator::FormValidator;
pub use walker::{walk, walk_with_groups, WalkOptions};

/// Validate `root` with the built-in rules and default options.
///
/// Kept for compatibility with callers of the old free function.
#[deprecated(note = "use FormValidator::validate instead")]
pub fn validate_form<N: FormNode>(root: &N) -> ValidationResult {
    FormValidator::new().validate(root)
}
