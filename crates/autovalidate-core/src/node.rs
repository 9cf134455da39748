// File: src/node.rs
// Purpose: Read-only view of a form element tree

use std::borrow::Cow;

/// Read access to one node of a form's element tree.
///
/// Implemented for the owned [`Element`](crate::Element) tree and, in the
/// browser binding, for DOM elements. `children` returns `Cow` so owned trees
/// can hand out borrows while DOM handles are produced on the fly.
pub trait FormNode: Clone {
    /// Direct element children in document order
    fn children(&self) -> Vec<Cow<'_, Self>>;

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Attribute value, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Option<String>;

    fn name(&self) -> Option<String> {
        self.attribute("name")
    }

    fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// Current value of a form control (empty for non-controls)
    fn value(&self) -> String;

    /// Checked state of checkboxes and radios
    fn is_checked(&self) -> bool;

    fn has_class(&self, class: &str) -> bool;

    /// Whether the node is an `<input type="radio">`
    fn is_radio(&self) -> bool;

    /// Text content of the node and its descendants
    fn text(&self) -> String;
}

/// Visit every descendant of `root` depth-first, parents before children.
/// `root` itself is not visited.
pub fn for_each_descendant<N, F>(root: &N, visit: &mut F)
where
    N: FormNode,
    F: FnMut(&N),
{
    for child in root.children() {
        let child: &N = &child;
        visit(child);
        for_each_descendant(child, visit);
    }
}
