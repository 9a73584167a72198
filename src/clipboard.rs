//! Clipboard writes with failure absorbed into a boolean.
//!
//! ERROR HANDLING
//! ==============
//! A rejected write (permission denied, no clipboard API, insecure context)
//! is logged and reported as `false`, optionally with a toast. Nothing is
//! propagated to the caller.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use futures::future::LocalBoxFuture;

use crate::dom::Dom;
use crate::error::UiError;
use crate::notify::{Notifier, Severity};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy";

/// Asynchronous text clipboard.
pub trait Clipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>>;
}

/// Write `text` to `clipboard`. Returns whether the write succeeded. With
/// `feedback`, the outcome is also shown as a toast.
pub async fn copy_to_clipboard<C, D>(clipboard: &C, feedback: Option<&Notifier<D>>, text: &str) -> bool
where
    C: Clipboard + ?Sized,
    D: Dom + 'static,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            if let Some(notifier) = feedback {
                notifier.toast(COPIED_MESSAGE, Severity::Success);
            }
            true
        }
        Err(err) => {
            log::error!("Failed to copy: {err}");
            if let Some(notifier) = feedback {
                notifier.toast(COPY_FAILED_MESSAGE, Severity::Error);
            }
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserClipboard;

#[cfg(feature = "hydrate")]
mod browser {
    use futures::FutureExt;
    use futures::future::LocalBoxFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::Clipboard;
    use crate::error::UiError;

    /// `navigator.clipboard`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserClipboard;

    fn platform_clipboard() -> Result<web_sys::Clipboard, UiError> {
        let window = web_sys::window().ok_or_else(|| UiError::Clipboard("no window".to_owned()))?;
        // Looked up dynamically: the property is absent outside secure contexts.
        let value = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|err| UiError::Clipboard(format!("{err:?}")))?;
        value
            .dyn_into::<web_sys::Clipboard>()
            .map_err(|_| UiError::Clipboard("clipboard API unavailable".to_owned()))
    }

    impl Clipboard for BrowserClipboard {
        fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>> {
            async move {
                let clipboard = platform_clipboard()?;
                JsFuture::from(clipboard.write_text(text))
                    .await
                    .map_err(|err| UiError::Clipboard(format!("{err:?}")))?;
                Ok(())
            }
            .boxed_local()
        }
    }
}
