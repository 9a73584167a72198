//! JavaScript export surface and wasm entry point.
//!
//! Page scripts call these by their camelCase names (`showAlert`,
//! `formatTime`, ...). All of them share one lazily built [`PageHost`] over
//! the live document.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element};

use crate::clipboard::{BrowserClipboard, copy_to_clipboard};
use crate::config::UiConfig;
use crate::controls;
use crate::debounce::Debounced;
use crate::dom::BrowserDom;
use crate::format;
use crate::notify::Severity;
use crate::page::{Page, PageHost};
use crate::schedule::BrowserScheduler;

thread_local! {
    static HOST: RefCell<Option<Rc<PageHost<BrowserDom>>>> = const { RefCell::new(None) };
}

fn host() -> Option<Rc<PageHost<BrowserDom>>> {
    HOST.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let dom = BrowserDom::current()?;
            *slot = Some(Rc::new(PageHost::new(Rc::new(dom), Rc::new(BrowserScheduler::new()))));
        }
        slot.clone()
    })
}

fn page() -> Option<Rc<Page<BrowserDom>>> {
    host().map(|host| host.page())
}

fn init_page() {
    if let Some(host) = host() {
        host.init();
    }
}

#[wasm_bindgen(inline_js = "export function collect_args(inner) { return function (...args) { inner(args); }; }")]
extern "C" {
    /// Wrap `inner(args: Array)` as a variadic JS function.
    fn collect_args(inner: &JsValue) -> js_sys::Function;
}

fn severity(kind: Option<String>) -> Severity {
    kind.as_deref().map_or(Severity::Info, Severity::parse)
}

// JS numbers: negative and NaN count as zero, fractions are dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 { 0 } else { seconds.floor() as u64 }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let Some(host) = host() else {
        return;
    };
    let document = host.page().dom().document().clone();
    if document.ready_state() != "loading" {
        // Next macrotask: lets a `configure` call right after module load land first.
        host.init_soon();
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let on_ready = Closure::once_into_js(init_page);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        log::warn!("DOMContentLoaded listener failed: {err:?}; initializing on next turn");
        host.init_soon();
    }
}

/// Run load-time setup now: scroll reveal, button ripples, sidebar. Safe to
/// call more than once; only the first call does anything.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page_now() {
    init_page();
}

/// Replace the page configuration. Must run before load-time setup, which
/// happens on the turn after module start or at `DOMContentLoaded`.
///
/// # Errors
///
/// Rejects malformed or out-of-range config, and calls made after setup.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json(config_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let Some(host) = host() else {
        return Err(JsValue::from_str("no document"));
    };
    host.configure(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: &str, kind: Option<String>) {
    if let Some(page) = page() {
        page.notifier().present(message, severity(kind));
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    if let Some(page) = page() {
        page.notifier().toast(message, severity(kind));
    }
}

#[wasm_bindgen(js_name = setButtonLoading)]
pub fn set_button_loading(button: Option<Element>, loading: bool) {
    if let Some(page) = page() {
        controls::set_button_loading(page.dom().as_ref(), button.as_ref(), loading);
    }
}

#[wasm_bindgen(js_name = showLoader)]
pub fn show_loader(container_id: &str) {
    if let Some(page) = page() {
        controls::show_loader(page.dom().as_ref(), container_id);
    }
}

#[wasm_bindgen(js_name = hideLoader)]
pub fn hide_loader(container_id: &str) {
    if let Some(page) = page() {
        controls::hide_loader(page.dom().as_ref(), container_id);
    }
}

#[wasm_bindgen(js_name = validateInput)]
pub fn validate_input(input: Option<Element>, is_valid: bool) {
    if let Some(page) = page() {
        controls::validate_input(page.dom().as_ref(), input.as_ref(), is_valid);
    }
}

#[wasm_bindgen(js_name = clearValidation)]
pub fn clear_validation(input: Option<Element>) {
    if let Some(page) = page() {
        controls::clear_validation(page.dom().as_ref(), input.as_ref());
    }
}

#[wasm_bindgen(js_name = scrollToElement)]
pub fn scroll_to_element(element_id: &str) {
    if let Some(page) = page() {
        controls::scroll_to_element(page.dom().as_ref(), element_id);
    }
}

#[wasm_bindgen]
pub fn animate(element: Option<Element>, class: &str) {
    if let Some(page) = page() {
        controls::animate(page.dom(), element.as_ref(), class);
    }
}

#[wasm_bindgen(js_name = updateProgressBar)]
pub fn update_progress_bar(percentage: f64) {
    if let Some(page) = page() {
        controls::update_progress_bar(page.dom().as_ref(), percentage);
    }
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(seconds: f64) -> String {
    format::format_time(whole_seconds(seconds))
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(seconds: f64) -> String {
    format::format_duration(whole_seconds(seconds))
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    format::is_valid_email(email)
}

#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone(phone: &str) -> bool {
    format::is_valid_phone(phone)
}

/// Debounce a JS function. The returned function takes any arguments and
/// forwards all of them from the last call in a burst.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait: u32) -> js_sys::Function {
    let debounced = Debounced::new(
        move |args: js_sys::Array| {
            if let Err(err) = func.apply(&JsValue::NULL, &args) {
                log::error!("debounced function threw: {err:?}");
            }
        },
        Duration::from_millis(u64::from(wait)),
        Rc::new(BrowserScheduler::new()),
    );
    let inner = Closure::<dyn Fn(js_sys::Array)>::new(move |args: js_sys::Array| {
        debounced.call(args);
    })
    .into_js_value();
    collect_args(&inner)
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_text(text: String) -> bool {
    let page = page();
    copy_to_clipboard(&BrowserClipboard, page.as_deref().map(Page::notifier), &text).await
}
