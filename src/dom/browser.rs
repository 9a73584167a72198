//! `web-sys` implementation of [`Dom`].
//!
//! DOM calls that throw are logged at `warn` and otherwise ignored; the
//! helpers built on top treat the page as best-effort.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{Dom, Listener, VisibilityListener};
use crate::error::UiError;

/// The live page document.
#[derive(Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Wrap the current window's document, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}", UiError::Dom(format!("{what}: {err:?}")));
            None
        }
    }
}

fn class_selector(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| format!(".{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Dom for BrowserDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn elements_with_any_class(&self, classes: &[&str]) -> Vec<Element> {
        if classes.is_empty() {
            return Vec::new();
        }
        let Some(list) = warn_on_err("querySelectorAll", self.document.query_selector_all(&class_selector(classes)))
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .flat_map(|node| node.dyn_into::<Element>())
            .collect()
    }

    fn find_descendant(&self, parent: &Element, class: &str) -> Option<Element> {
        warn_on_err("querySelector", parent.query_selector(&class_selector(&[class]))).flatten()
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        warn_on_err("createElement", self.document.create_element(tag))
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        warn_on_err("appendChild", parent.append_child(child));
    }

    fn clear_children(&self, node: &Element) {
        node.set_inner_html("");
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_err("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_err("classList.remove", node.class_list().remove_1(class));
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        warn_on_err("classList.toggle", node.class_list().toggle(class)).unwrap_or(false)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        warn_on_err("toggleAttribute", node.toggle_attribute_with_force("disabled", disabled));
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            warn_on_err("style.setProperty", el.style().set_property(property, value));
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn listen(&self, node: &Element, event: &str, once: bool, listener: Listener) {
        let options = AddEventListenerOptions::new();
        options.set_once(once);
        // A once-closure frees itself after it runs; persistent handlers live
        // as long as the page.
        let callback = if once {
            Closure::once_into_js(move || listener())
        } else {
            Closure::<dyn Fn()>::new(move || listener()).into_js_value()
        };
        warn_on_err(
            "addEventListener",
            node.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.unchecked_ref(),
                &options,
            ),
        );
    }

    fn observe_visibility(&self, nodes: &[Element], threshold: f64, listener: VisibilityListener<Element>) {
        let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    listener(&entry.target(), entry.is_intersecting());
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let Some(observer) = warn_on_err(
            "IntersectionObserver",
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
        ) else {
            return;
        };
        for node in nodes {
            observer.observe(node);
        }
        callback.forget();
    }
}
