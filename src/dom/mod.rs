//! DOM access behind a trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every helper in this crate touches the page only through [`Dom`]. The
//! browser build wires it to `web-sys` ([`BrowserDom`]); tests and any
//! non-browser harness use the in-memory tree in [`memory`].
//!
//! Lookups return `Option` so a missing element is an ordinary path rather
//! than an error.

pub mod memory;

#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::BrowserDom;
pub use memory::{MemoryDom, NodeRef};

use std::rc::Rc;

/// Callback for element events such as `click` or `animationend`.
pub type Listener = Rc<dyn Fn()>;

/// Callback for visibility changes: the element and whether it is now
/// intersecting the viewport.
pub type VisibilityListener<N> = Rc<dyn Fn(&N, bool)>;

/// The DOM operations the library needs.
pub trait Dom {
    /// Element handle. Cheap to clone; clones refer to the same element.
    type Node: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    /// Every element carrying any of `classes`, in document order.
    fn elements_with_any_class(&self, classes: &[&str]) -> Vec<Self::Node>;

    /// First descendant of `parent` carrying `class`.
    fn find_descendant(&self, parent: &Self::Node, class: &str) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Option<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Remove all children of `node` (`innerHTML = ''`).
    fn clear_children(&self, node: &Self::Node);

    /// Detach `node` from its parent.
    fn remove(&self, node: &Self::Node);

    fn set_text(&self, node: &Self::Node, text: &str);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Flip `class`; returns whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Set an inline style property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Smooth-scroll so `node` sits at the top of the viewport.
    fn scroll_into_view(&self, node: &Self::Node);

    /// Register `listener` for `event` on `node`. A `once` listener is
    /// removed after its first dispatch.
    fn listen(&self, node: &Self::Node, event: &str, once: bool, listener: Listener);

    /// Report visibility changes for `nodes` against `threshold` (fraction
    /// of the element visible).
    fn observe_visibility(&self, nodes: &[Self::Node], threshold: f64, listener: VisibilityListener<Self::Node>);
}
