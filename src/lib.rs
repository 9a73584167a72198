//! # portal-ui
//!
//! Browser UI helpers for the exam portal, compiled to WebAssembly with the
//! `hydrate` feature and to a plain rlib for host-side tests.
//!
//! The helpers reach the page only through the [`dom::Dom`] and
//! [`schedule::Scheduler`] traits, so everything except the thin `web-sys`
//! adapters runs under `cargo test` against an in-memory document and a
//! virtual clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`notify`] | Alerts in a container, toast fallback, auto-dismiss |
//! | [`controls`] | Loading buttons, validation styling, spinners, progress, animations |
//! | [`format`] | `MM:SS` time, durations, email/phone predicates, HTML escaping |
//! | [`debounce`] | Debounce combinator with one owned timer slot |
//! | [`clipboard`] | Clipboard writes reported as `bool` |
//! | [`reveal`] | Scroll-triggered reveal class |
//! | [`sidebar`] | Sidebar open/close toggle |
//! | [`page`] | Per-page wiring and load-time setup |
//! | [`dom`] | DOM trait, in-memory and browser implementations |
//! | [`schedule`] | Delayed tasks: manual clock and `setTimeout` |
//! | [`config`] | Ids, classes, and timings with JSON overrides |
//! | [`error`] | [`error::UiError`] |

pub mod clipboard;
pub mod config;
pub mod controls;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod format;
pub mod notify;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod sidebar;

#[cfg(feature = "hydrate")]
pub mod exports;

pub use config::UiConfig;
pub use debounce::{Debounced, debounce};
pub use error::UiError;
pub use format::{escape_html, format_duration, format_time, is_valid_email, is_valid_phone};
pub use notify::{Notifier, Severity};
pub use page::{Page, PageHost};
