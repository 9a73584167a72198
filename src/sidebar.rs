//! Mobile sidebar toggle.
//!
//! The open button, close button, and backdrop all run the same toggle,
//! which flips `active` on the panel, the open button, and the backdrop.
//! Any of the controls may be missing from a page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use std::rc::Rc;

use crate::config::SidebarConfig;
use crate::dom::Dom;

const ACTIVE_CLASS: &str = "active";

/// Resolved sidebar elements.
pub struct Sidebar<D: Dom> {
    dom: Rc<D>,
    panel: Option<D::Node>,
    open: Option<D::Node>,
    close: Option<D::Node>,
    overlay: Option<D::Node>,
}

impl<D: Dom + 'static> Sidebar<D> {
    /// Look up the sidebar elements named in `config`.
    pub fn resolve(dom: Rc<D>, config: &SidebarConfig) -> Self {
        Self {
            panel: dom.element_by_id(&config.panel_id),
            open: dom.element_by_id(&config.open_id),
            close: dom.element_by_id(&config.close_id),
            overlay: dom.element_by_id(&config.overlay_id),
            dom,
        }
    }

    /// Resolve the elements and attach the toggle to every trigger present.
    pub fn bind(dom: Rc<D>, config: &SidebarConfig) -> Rc<Self> {
        let sidebar = Rc::new(Self::resolve(dom, config));
        for trigger in [&sidebar.open, &sidebar.close, &sidebar.overlay].into_iter().flatten() {
            let target = Rc::clone(&sidebar);
            sidebar
                .dom
                .listen(trigger, "click", false, Rc::new(move || target.toggle()));
        }
        sidebar
    }

    /// Flip the open state. Without a panel there is nothing to toggle.
    pub fn toggle(&self) {
        let Some(panel) = &self.panel else {
            return;
        };
        self.dom.toggle_class(panel, ACTIVE_CLASS);
        if let Some(open) = &self.open {
            self.dom.toggle_class(open, ACTIVE_CLASS);
        }
        if let Some(overlay) = &self.overlay {
            self.dom.toggle_class(overlay, ACTIVE_CLASS);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel
            .as_ref()
            .is_some_and(|panel| self.dom.has_class(panel, ACTIVE_CLASS))
    }
}
