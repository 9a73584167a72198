//! Debounce combinator.
//!
//! A [`Debounced`] value owns exactly one timer slot. Every call cancels the
//! pending invocation (if any) and schedules a fresh one carrying the latest
//! arguments, so the wrapped function fires once per quiet period of `wait`.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::{Scheduler, TimerId};

/// A function wrapped so that bursts of calls collapse into one.
pub struct Debounced<A> {
    func: Rc<dyn Fn(A)>,
    wait: Duration,
    scheduler: Rc<dyn Scheduler>,
    slot: Rc<RefCell<Option<TimerId>>>,
}

impl<A: 'static> Debounced<A> {
    pub fn new(func: impl Fn(A) + 'static, wait: Duration, scheduler: Rc<dyn Scheduler>) -> Self {
        Self { func: Rc::new(func), wait, scheduler, slot: Rc::new(RefCell::new(None)) }
    }

    /// Restart the quiet period; `args` replace any earlier pending ones.
    pub fn call(&self, args: A) {
        self.cancel();

        let func = Rc::clone(&self.func);
        let slot = Rc::clone(&self.slot);
        let id = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                slot.borrow_mut().take();
                func(args);
            }),
        );
        *self.slot.borrow_mut() = Some(id);
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        let pending = self.slot.borrow_mut().take();
        if let Some(id) = pending {
            self.scheduler.cancel(id);
        }
    }

    /// Whether an invocation is waiting for the quiet period to end.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// Closure form of [`Debounced`], for callers that just want `impl Fn(A)`.
pub fn debounce<A: 'static>(
    func: impl Fn(A) + 'static,
    wait: Duration,
    scheduler: Rc<dyn Scheduler>,
) -> impl Fn(A) {
    let debounced = Debounced::new(func, wait, scheduler);
    move |args| debounced.call(args)
}
