use super::*;
use crate::dom::MemoryDom;

// =============================================================
// Loading state
// =============================================================

#[test]
fn loading_class_and_disabled_move_together() {
    let dom = MemoryDom::new();
    let button = dom.add_element(dom.body_ref(), "button", None, &["btn"]);

    set_button_loading(&dom, Some(&button), true);
    assert!(dom.has_class(&button, "loading"));
    assert!(dom.is_disabled(button));

    set_button_loading(&dom, Some(&button), true);
    assert_eq!(dom.classes(button), vec!["btn", "loading"]);

    set_button_loading(&dom, Some(&button), false);
    assert!(!dom.has_class(&button, "loading"));
    assert!(!dom.is_disabled(button));
}

#[test]
fn helpers_ignore_missing_targets() {
    let dom = MemoryDom::new();
    set_button_loading(&dom, None, true);
    validate_input(&dom, None, false);
    clear_validation(&dom, None);
    show_loader(&dom, "nope");
    hide_loader(&dom, "nope");
    scroll_to_element(&dom, "nope");
    update_progress_bar(&dom, 40.0);
    animate(&Rc::new(MemoryDom::new()), None, "shake");
    assert!(dom.children(dom.body_ref()).is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validation_states_are_exclusive() {
    let dom = MemoryDom::new();
    let input = dom.add_element(dom.body_ref(), "input", None, &[]);

    validate_input(&dom, Some(&input), true);
    assert_eq!(dom.classes(input), vec!["success"]);
    validate_input(&dom, Some(&input), false);
    assert_eq!(dom.classes(input), vec!["error"]);
    validate_input(&dom, Some(&input), true);
    assert_eq!(dom.classes(input), vec!["success"]);

    clear_validation(&dom, Some(&input));
    assert!(dom.classes(input).is_empty());
}

// =============================================================
// Loader
// =============================================================

#[test]
fn loader_replaces_and_clears_container_content() {
    let dom = MemoryDom::new();
    let results = dom.add_element(dom.body_ref(), "div", Some("results"), &[]);
    dom.set_text(&results, "stale rows");

    show_loader(&dom, "results");
    let children = dom.children(results);
    assert_eq!(children.len(), 1);
    assert_eq!(dom.classes(children[0]), vec!["loader"]);
    assert_eq!(dom.text_content(results), "");

    hide_loader(&dom, "results");
    assert!(dom.children(results).is_empty());
}

// =============================================================
// Scroll, progress, animation
// =============================================================

#[test]
fn scroll_to_element_scrolls_target() {
    let dom = MemoryDom::new();
    let section = dom.add_element(dom.body_ref(), "section", Some("results"), &[]);
    scroll_to_element(&dom, "results");
    assert_eq!(dom.scroll_count(section), 1);
}

#[test]
fn progress_bar_width_tracks_percentage() {
    let dom = MemoryDom::new();
    let bar = dom.add_element(dom.body_ref(), "div", None, &["progress-bar"]);
    let fill = dom.add_element(bar, "div", None, &["progress-bar-fill"]);

    update_progress_bar(&dom, 42.5);
    assert_eq!(dom.style(fill, "width").as_deref(), Some("42.5%"));
    update_progress_bar(&dom, 100.0);
    assert_eq!(dom.style(fill, "width").as_deref(), Some("100%"));
}

#[test]
fn animate_removes_class_after_first_animationend() {
    let dom = Rc::new(MemoryDom::new());
    let card = dom.add_element(dom.body_ref(), "div", None, &["card"]);

    animate(&dom, Some(&card), "shake");
    assert!(dom.has_class(&card, "shake"));
    dom.dispatch(card, "animationend");
    assert!(!dom.has_class(&card, "shake"));
    assert_eq!(dom.listener_count(card, "animationend"), 0);
}

#[test]
fn decorate_buttons_adds_ripple_once() {
    let dom = MemoryDom::new();
    let body = dom.body_ref();
    let plain = dom.add_element(body, "button", None, &["btn"]);
    let already = dom.add_element(body, "button", None, &["btn", "ripple"]);
    let link = dom.add_element(body, "a", None, &["link"]);

    assert_eq!(decorate_buttons(&dom), 1);
    assert!(dom.has_class(&plain, "ripple"));
    assert_eq!(dom.classes(already), vec!["btn", "ripple"]);
    assert!(!dom.has_class(&link, "ripple"));
    assert_eq!(decorate_buttons(&dom), 0);
}
