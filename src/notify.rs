//! Alert and toast notifications.
//!
//! DESIGN
//! ======
//! An alert goes into the configured container, replacing whatever is
//! there, and dismisses itself after a fixed delay with a short fade. With
//! no container on the page the message becomes a toast appended to
//! `<body>`. There is no queue: the newest message wins.
//!
//! A dismiss timer from an earlier alert is not cancelled by a later one,
//! so it can fade and clear the newer alert early. Callers rely on
//! last-write-wins only, so that race is left as is.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::rc::Rc;

use crate::config::NotifyConfig;
use crate::dom::Dom;
use crate::schedule::Scheduler;

/// How a notification is styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse an exact, lowercase severity name; anything else is
    /// [`Severity::Info`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    /// Stylesheet class, e.g. `alert-success`.
    #[must_use]
    pub fn class(self) -> String {
        format!("alert-{}", self.as_str())
    }
}

/// Presents alerts and toasts on a page.
pub struct Notifier<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    config: NotifyConfig,
}

impl<D: Dom + 'static> Notifier<D> {
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, config: NotifyConfig) -> Self {
        Self { dom, scheduler, config }
    }

    #[must_use]
    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Show `message` in the alert container, or as a toast if the page has
    /// no container.
    pub fn present(&self, message: &str, severity: Severity) {
        let Some(container) = self.dom.element_by_id(&self.config.container_id) else {
            self.toast(message, severity);
            return;
        };

        self.dom.clear_children(&container);
        let Some(alert) = self.build_alert(message, severity) else {
            return;
        };
        self.dom.append_child(&container, &alert);
        self.schedule_dismiss(container);
    }

    /// Append a transient toast to `<body>` and remove it after the toast
    /// display time.
    pub fn toast(&self, message: &str, severity: Severity) {
        let dom = &self.dom;
        let Some(body) = dom.body() else {
            log::debug!("no document body; dropping toast: {message}");
            return;
        };
        let Some(toast) = dom.create_element("div") else {
            return;
        };
        dom.add_class(&toast, "toast");
        dom.add_class(&toast, &severity.class());
        dom.set_text(&toast, message);
        dom.append_child(&body, &toast);

        let dom = Rc::clone(&self.dom);
        self.scheduler
            .schedule(self.config.toast_display(), Box::new(move || dom.remove(&toast)));
    }

    fn build_alert(&self, message: &str, severity: Severity) -> Option<D::Node> {
        let dom = &self.dom;
        let alert = dom.create_element("div")?;
        dom.add_class(&alert, "alert");
        dom.add_class(&alert, &severity.class());
        dom.add_class(&alert, "scale-in");

        let icon = dom.create_element("span")?;
        dom.add_class(&icon, "alert-icon");
        dom.set_text(&icon, severity.icon());
        dom.append_child(&alert, &icon);

        let text = dom.create_element("span")?;
        dom.add_class(&text, "alert-message");
        dom.set_text(&text, message);
        dom.append_child(&alert, &text);
        Some(alert)
    }

    fn schedule_dismiss(&self, container: D::Node) {
        let dom = Rc::clone(&self.dom);
        let scheduler = Rc::clone(&self.scheduler);
        let fade = self.config.alert_fade();
        let animation = format!("fadeOut {}s ease", fade.as_secs_f64());

        self.scheduler.schedule(
            self.config.alert_display(),
            Box::new(move || {
                let Some(alert) = dom.find_descendant(&container, "alert") else {
                    return;
                };
                dom.set_style(&alert, "animation", &animation);
                scheduler.schedule(fade, Box::new(move || dom.clear_children(&container)));
            }),
        );
    }
}
