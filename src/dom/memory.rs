//! In-memory element tree implementing [`Dom`].
//!
//! Models just enough of a document for the helpers in this crate: ids,
//! class lists, text, a disabled flag, inline styles, event listeners, and
//! a viewport-visibility hook. Tests build a page with
//! [`MemoryDom::add_element`], act on it through [`Dom`], then inspect it.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Dom, Listener, VisibilityListener};

/// Handle to a node in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

struct Registration {
    event: String,
    once: bool,
    listener: Listener,
}

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    children: Vec<NodeRef>,
    parent: Option<NodeRef>,
    disabled: bool,
    style: BTreeMap<String, String>,
    listeners: Vec<Registration>,
    scrolled_into_view: usize,
}

struct Observer {
    nodes: Vec<NodeRef>,
    threshold: f64,
    listener: VisibilityListener<NodeRef>,
    crossed: BTreeMap<usize, bool>,
}

struct Inner {
    nodes: Vec<Node>,
    observers: Vec<Observer>,
}

/// A detached document with a `<body>` root.
pub struct MemoryDom {
    inner: RefCell<Inner>,
}

const BODY: NodeRef = NodeRef(0);

impl Default for MemoryDom {
    fn default() -> Self {
        let body = Node { tag: "body".to_owned(), ..Node::default() };
        Self { inner: RefCell::new(Inner { nodes: vec![body], observers: Vec::new() }) }
    }
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element under `parent` with an optional id and classes.
    pub fn add_element(&self, parent: NodeRef, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeRef {
        let node = self.alloc(tag);
        {
            let mut inner = self.inner.borrow_mut();
            let data = &mut inner.nodes[node.0];
            data.id = id.map(str::to_owned);
            data.classes = classes.iter().map(|c| (*c).to_owned()).collect();
        }
        self.append_child(&parent, &node);
        node
    }

    #[must_use]
    pub fn body_ref(&self) -> NodeRef {
        BODY
    }

    #[must_use]
    pub fn tag(&self, node: NodeRef) -> String {
        self.inner.borrow().nodes[node.0].tag.clone()
    }

    #[must_use]
    pub fn classes(&self, node: NodeRef) -> Vec<String> {
        self.inner.borrow().nodes[node.0].classes.clone()
    }

    #[must_use]
    pub fn children(&self, node: NodeRef) -> Vec<NodeRef> {
        self.inner.borrow().nodes[node.0].children.clone()
    }

    /// Concatenated text of `node` and its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeRef) -> String {
        let inner = self.inner.borrow();
        let mut out = String::new();
        collect_text(&inner.nodes, node, &mut out);
        out
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeRef) -> bool {
        self.inner.borrow().nodes[node.0].disabled
    }

    #[must_use]
    pub fn style(&self, node: NodeRef, property: &str) -> Option<String> {
        self.inner.borrow().nodes[node.0].style.get(property).cloned()
    }

    /// Whether `node` is reachable from `<body>`.
    #[must_use]
    pub fn is_attached(&self, node: NodeRef) -> bool {
        let inner = self.inner.borrow();
        let mut current = Some(node);
        while let Some(n) = current {
            if n == BODY {
                return true;
            }
            current = inner.nodes[n.0].parent;
        }
        false
    }

    #[must_use]
    pub fn scroll_count(&self, node: NodeRef) -> usize {
        self.inner.borrow().nodes[node.0].scrolled_into_view
    }

    #[must_use]
    pub fn listener_count(&self, node: NodeRef, event: &str) -> usize {
        self.inner.borrow().nodes[node.0]
            .listeners
            .iter()
            .filter(|r| r.event == event)
            .count()
    }

    /// Fire `event` on `node`, running its listeners in registration order.
    pub fn dispatch(&self, node: NodeRef, event: &str) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            let registered = &mut inner.nodes[node.0].listeners;
            let matching = registered
                .iter()
                .filter(|r| r.event == event)
                .map(|r| r.listener.clone())
                .collect::<Vec<_>>();
            registered.retain(|r| !(r.once && r.event == event));
            matching
        };
        for listener in listeners {
            listener();
        }
    }

    pub fn click(&self, node: NodeRef) {
        self.dispatch(node, "click");
    }

    /// Report that `ratio` of `node` is now inside the viewport. Observers
    /// are notified when the ratio crosses their threshold in either
    /// direction.
    pub fn set_visibility(&self, node: NodeRef, ratio: f64) {
        let notify = {
            let mut inner = self.inner.borrow_mut();
            let mut notify = Vec::new();
            for observer in &mut inner.observers {
                if !observer.nodes.contains(&node) {
                    continue;
                }
                let crossed = if observer.threshold <= 0.0 { ratio > 0.0 } else { ratio >= observer.threshold };
                let previous = observer.crossed.insert(node.0, crossed).unwrap_or(false);
                if previous != crossed {
                    notify.push((observer.listener.clone(), crossed));
                }
            }
            notify
        };
        for (listener, intersecting) in notify {
            listener(&node, intersecting);
        }
    }

    fn alloc(&self, tag: &str) -> NodeRef {
        let mut inner = self.inner.borrow_mut();
        inner.nodes.push(Node { tag: tag.to_owned(), ..Node::default() });
        NodeRef(inner.nodes.len() - 1)
    }

    fn walk(&self, root: NodeRef, mut visit: impl FnMut(NodeRef, &Node) -> bool) -> Option<NodeRef> {
        let inner = self.inner.borrow();
        let mut stack = inner.nodes[root.0].children.iter().rev().copied().collect::<Vec<_>>();
        while let Some(n) = stack.pop() {
            let data = &inner.nodes[n.0];
            if visit(n, data) {
                return Some(n);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }
}

fn collect_text(nodes: &[Node], node: NodeRef, out: &mut String) {
    let data = &nodes[node.0];
    out.push_str(&data.text);
    for child in &data.children {
        collect_text(nodes, *child, out);
    }
}

impl Dom for MemoryDom {
    type Node = NodeRef;

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.walk(BODY, |_, data| data.id.as_deref() == Some(id))
    }

    fn body(&self) -> Option<NodeRef> {
        Some(BODY)
    }

    fn elements_with_any_class(&self, classes: &[&str]) -> Vec<NodeRef> {
        let mut found = Vec::new();
        self.walk(BODY, |n, data| {
            if data.classes.iter().any(|c| classes.contains(&c.as_str())) {
                found.push(n);
            }
            false
        });
        found
    }

    fn find_descendant(&self, parent: &NodeRef, class: &str) -> Option<NodeRef> {
        self.walk(*parent, |_, data| data.classes.iter().any(|c| c == class))
    }

    fn create_element(&self, tag: &str) -> Option<NodeRef> {
        Some(self.alloc(tag))
    }

    fn append_child(&self, parent: &NodeRef, child: &NodeRef) {
        self.remove(child);
        let mut inner = self.inner.borrow_mut();
        inner.nodes[child.0].parent = Some(*parent);
        inner.nodes[parent.0].children.push(*child);
    }

    fn clear_children(&self, node: &NodeRef) {
        let mut inner = self.inner.borrow_mut();
        let children = std::mem::take(&mut inner.nodes[node.0].children);
        for child in children {
            inner.nodes[child.0].parent = None;
        }
        inner.nodes[node.0].text.clear();
    }

    fn remove(&self, node: &NodeRef) {
        let mut inner = self.inner.borrow_mut();
        if let Some(parent) = inner.nodes[node.0].parent.take() {
            inner.nodes[parent.0].children.retain(|c| c != node);
        }
    }

    fn set_text(&self, node: &NodeRef, text: &str) {
        self.clear_children(node);
        self.inner.borrow_mut().nodes[node.0].text = text.to_owned();
    }

    fn add_class(&self, node: &NodeRef, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let classes = &mut inner.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeRef, class: &str) {
        self.inner.borrow_mut().nodes[node.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, node: &NodeRef, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn has_class(&self, node: &NodeRef, class: &str) -> bool {
        self.inner.borrow().nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn set_disabled(&self, node: &NodeRef, disabled: bool) {
        self.inner.borrow_mut().nodes[node.0].disabled = disabled;
    }

    fn set_style(&self, node: &NodeRef, property: &str, value: &str) {
        self.inner.borrow_mut().nodes[node.0]
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn scroll_into_view(&self, node: &NodeRef) {
        self.inner.borrow_mut().nodes[node.0].scrolled_into_view += 1;
    }

    fn listen(&self, node: &NodeRef, event: &str, once: bool, listener: Listener) {
        self.inner.borrow_mut().nodes[node.0]
            .listeners
            .push(Registration { event: event.to_owned(), once, listener });
    }

    fn observe_visibility(&self, nodes: &[NodeRef], threshold: f64, listener: VisibilityListener<NodeRef>) {
        self.inner.borrow_mut().observers.push(Observer {
            nodes: nodes.to_vec(),
            threshold,
            listener,
            crossed: BTreeMap::new(),
        });
    }
}
