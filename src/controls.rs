//! Element state helpers: loading buttons, validation styling, spinners,
//! progress bars, scroll and one-shot animations.
//!
//! Every helper takes its target as an `Option` (or looks it up by id) and
//! does nothing when the element is missing.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::rc::Rc;

use crate::dom::Dom;

const LOADING_CLASS: &str = "loading";
const VALID_CLASS: &str = "success";
const INVALID_CLASS: &str = "error";
const LOADER_CLASS: &str = "loader";
const PROGRESS_FILL_CLASS: &str = "progress-bar-fill";
const BUTTON_CLASS: &str = "btn";
const RIPPLE_CLASS: &str = "ripple";

/// Put a button into (or out of) its loading state. The `loading` class and
/// the disabled flag always move together.
pub fn set_button_loading<D: Dom>(dom: &D, button: Option<&D::Node>, loading: bool) {
    let Some(button) = button else {
        return;
    };
    if loading {
        dom.add_class(button, LOADING_CLASS);
    } else {
        dom.remove_class(button, LOADING_CLASS);
    }
    dom.set_disabled(button, loading);
}

/// Mark an input valid or invalid; the two states exclude each other.
pub fn validate_input<D: Dom>(dom: &D, input: Option<&D::Node>, is_valid: bool) {
    let Some(input) = input else {
        return;
    };
    let (set, clear) = if is_valid { (VALID_CLASS, INVALID_CLASS) } else { (INVALID_CLASS, VALID_CLASS) };
    dom.remove_class(input, clear);
    dom.add_class(input, set);
}

/// Return an input to the neutral state.
pub fn clear_validation<D: Dom>(dom: &D, input: Option<&D::Node>) {
    let Some(input) = input else {
        return;
    };
    dom.remove_class(input, VALID_CLASS);
    dom.remove_class(input, INVALID_CLASS);
}

/// Replace the content of `container_id` with a spinner.
pub fn show_loader<D: Dom>(dom: &D, container_id: &str) {
    let Some(container) = dom.element_by_id(container_id) else {
        return;
    };
    dom.clear_children(&container);
    let Some(spinner) = dom.create_element("div") else {
        return;
    };
    dom.add_class(&spinner, LOADER_CLASS);
    dom.append_child(&container, &spinner);
}

/// Clear the content of `container_id`.
pub fn hide_loader<D: Dom>(dom: &D, container_id: &str) {
    if let Some(container) = dom.element_by_id(container_id) {
        dom.clear_children(&container);
    }
}

pub fn scroll_to_element<D: Dom>(dom: &D, element_id: &str) {
    if let Some(element) = dom.element_by_id(element_id) {
        dom.scroll_into_view(&element);
    }
}

/// Set the width of the first `.progress-bar-fill` to `percentage`%.
/// The value is passed through unclamped.
pub fn update_progress_bar<D: Dom>(dom: &D, percentage: f64) {
    let Some(body) = dom.body() else {
        return;
    };
    if let Some(fill) = dom.find_descendant(&body, PROGRESS_FILL_CLASS) {
        dom.set_style(&fill, "width", &format!("{percentage}%"));
    }
}

/// Add `class` to `element` and take it off again at the first
/// `animationend`.
pub fn animate<D: Dom + 'static>(dom: &Rc<D>, element: Option<&D::Node>, class: &str) {
    let Some(element) = element else {
        return;
    };
    dom.add_class(element, class);

    let target = element.clone();
    let owner = Rc::clone(dom);
    let class = class.to_owned();
    dom.listen(element, "animationend", true, Rc::new(move || owner.remove_class(&target, &class)));
}

/// Give every `.btn` the ripple effect class. Returns how many buttons were
/// touched.
pub fn decorate_buttons<D: Dom>(dom: &D) -> usize {
    let mut decorated = 0;
    for button in dom.elements_with_any_class(&[BUTTON_CLASS]) {
        if !dom.has_class(&button, RIPPLE_CLASS) {
            dom.add_class(&button, RIPPLE_CLASS);
            decorated += 1;
        }
    }
    decorated
}
