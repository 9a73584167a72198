//! One page's worth of wiring: DOM, scheduler, config, and the notifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser entry point owns a [`PageHost<BrowserDom>`]. Load-time setup
//! is deferred to the next scheduler turn so a `configure` call made right
//! after the module loads still lands first. Tests build the same thing over
//! [`crate::dom::MemoryDom`] and a manual scheduler.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::config::UiConfig;
use crate::controls;
use crate::debounce::Debounced;
use crate::dom::Dom;
use crate::error::UiError;
use crate::notify::Notifier;
use crate::reveal;
use crate::schedule::Scheduler;
use crate::sidebar::Sidebar;

pub struct Page<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    config: UiConfig,
    notifier: Notifier<D>,
    sidebar: RefCell<Option<Rc<Sidebar<D>>>>,
    initialized: Cell<bool>,
}

impl<D: Dom + 'static> Page<D> {
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, config: UiConfig) -> Self {
        let notifier = Notifier::new(Rc::clone(&dom), Rc::clone(&scheduler), config.notify.clone());
        Self { dom, scheduler, config, notifier, sidebar: RefCell::new(None), initialized: Cell::new(false) }
    }

    #[must_use]
    pub fn dom(&self) -> &Rc<D> {
        &self.dom
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier<D> {
        &self.notifier
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    #[must_use]
    pub fn sidebar(&self) -> Option<Rc<Sidebar<D>>> {
        self.sidebar.borrow().clone()
    }

    /// Page-load setup: scroll reveal, button ripples, sidebar toggle.
    /// Runs once; later calls are ignored.
    pub fn init(&self) {
        if self.initialized.replace(true) {
            log::debug!("page already initialized");
            return;
        }
        let revealed = reveal::init_scroll_reveal(&self.dom, &self.config.reveal);
        let decorated = controls::decorate_buttons(self.dom.as_ref());
        *self.sidebar.borrow_mut() = Some(Sidebar::bind(Rc::clone(&self.dom), &self.config.sidebar));
        log::info!("page ui ready: {revealed} reveal targets, {decorated} buttons decorated");
    }

    /// Debounce `func` on this page's scheduler.
    pub fn debounce<A: 'static>(&self, func: impl Fn(A) + 'static, wait: Duration) -> Debounced<A> {
        Debounced::new(func, wait, Rc::clone(&self.scheduler))
    }
}

/// Holds the current [`Page`] and swaps it when configuration arrives
/// before load-time setup.
pub struct PageHost<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    page: RefCell<Rc<Page<D>>>,
}

impl<D: Dom + 'static> PageHost<D> {
    /// Start with a page on the default config.
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>) -> Self {
        let page = Rc::new(Page::new(Rc::clone(&dom), Rc::clone(&scheduler), UiConfig::default()));
        Self { dom, scheduler, page: RefCell::new(page) }
    }

    #[must_use]
    pub fn page(&self) -> Rc<Page<D>> {
        Rc::clone(&self.page.borrow())
    }

    /// Replace the page config.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::AlreadyInitialized`] once load-time setup has run,
    /// and [`UiError::InvalidConfig`] for out-of-range values.
    pub fn configure(&self, config: UiConfig) -> Result<(), UiError> {
        if self.page.borrow().is_initialized() {
            return Err(UiError::AlreadyInitialized);
        }
        config.validate()?;
        let next = Page::new(Rc::clone(&self.dom), Rc::clone(&self.scheduler), config);
        *self.page.borrow_mut() = Rc::new(next);
        Ok(())
    }

    /// Run load-time setup on the current page now.
    pub fn init(&self) {
        self.page().init();
    }

    /// Run load-time setup on the next scheduler turn, against whatever page
    /// is current by then.
    pub fn init_soon(self: &Rc<Self>) {
        let host = Rc::clone(self);
        self.scheduler.schedule(Duration::ZERO, Box::new(move || host.init()));
    }
}
