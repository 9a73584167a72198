use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn element_by_id_finds_only_attached_nodes() {
    let dom = MemoryDom::new();
    let body = dom.body_ref();
    let wrapper = dom.add_element(body, "div", None, &[]);
    let inner = dom.add_element(wrapper, "span", Some("target"), &[]);

    assert_eq!(dom.element_by_id("target"), Some(inner));
    dom.remove(&wrapper);
    assert_eq!(dom.element_by_id("target"), None);
    assert!(!dom.is_attached(inner));
}

#[test]
fn class_queries_return_document_order() {
    let dom = MemoryDom::new();
    let body = dom.body_ref();
    let a = dom.add_element(body, "div", None, &["glass-card"]);
    let section = dom.add_element(body, "section", None, &[]);
    let b = dom.add_element(section, "div", None, &["stat-card"]);
    let c = dom.add_element(body, "div", None, &["glass-card", "stat-card"]);
    dom.add_element(body, "div", None, &["other"]);

    assert_eq!(dom.elements_with_any_class(&["glass-card", "stat-card"]), vec![a, b, c]);
    assert_eq!(dom.find_descendant(&section, "stat-card"), Some(b));
    assert_eq!(dom.find_descendant(&section, "glass-card"), None);
}

#[test]
fn set_text_replaces_children() {
    let dom = MemoryDom::new();
    let body = dom.body_ref();
    let box_ = dom.add_element(body, "div", None, &[]);
    let child = dom.add_element(box_, "span", None, &[]);
    dom.set_text(&child, "old");
    assert_eq!(dom.text_content(box_), "old");

    dom.set_text(&box_, "new");
    assert_eq!(dom.text_content(box_), "new");
    assert!(dom.children(box_).is_empty());
}

#[test]
fn class_list_edits_are_idempotent() {
    let dom = MemoryDom::new();
    let el = dom.add_element(dom.body_ref(), "button", None, &[]);
    dom.add_class(&el, "loading");
    dom.add_class(&el, "loading");
    assert_eq!(dom.classes(el), vec!["loading".to_owned()]);

    assert!(!dom.toggle_class(&el, "loading"));
    assert!(dom.toggle_class(&el, "loading"));
    dom.remove_class(&el, "loading");
    dom.remove_class(&el, "loading");
    assert!(!dom.has_class(&el, "loading"));
}

#[test]
fn once_listener_runs_a_single_time() {
    let dom = MemoryDom::new();
    let el = dom.add_element(dom.body_ref(), "div", None, &[]);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    dom.listen(&el, "animationend", true, Rc::new(move || counter.set(counter.get() + 1)));

    dom.dispatch(el, "click");
    dom.dispatch(el, "animationend");
    dom.dispatch(el, "animationend");
    assert_eq!(hits.get(), 1);
    assert_eq!(dom.listener_count(el, "animationend"), 0);
}

#[test]
fn visibility_notifies_on_threshold_crossings_only() {
    let dom = MemoryDom::new();
    let el = dom.add_element(dom.body_ref(), "div", None, &[]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    dom.observe_visibility(&[el], 0.1, Rc::new(move |_: &NodeRef, visible: bool| sink.borrow_mut().push(visible)));

    dom.set_visibility(el, 0.05);
    dom.set_visibility(el, 0.1);
    dom.set_visibility(el, 0.8);
    dom.set_visibility(el, 0.0);
    assert_eq!(*seen.borrow(), vec![true, false]);
}
