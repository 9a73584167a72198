//! Deferred callbacks with exact cancellation.
//!
//! DESIGN
//! ======
//! Timer-driven helpers (alert auto-dismiss, toast removal, debounce) ask a
//! [`Scheduler`] to run a task after a delay instead of calling
//! `setTimeout` directly. The browser build uses [`BrowserScheduler`]; tests
//! drive a [`ManualScheduler`] whose clock only moves when told to.
//!
//! Everything runs on one event-loop thread, so state lives behind
//! `Rc<RefCell<..>>` and nothing here is `Send`.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle for a scheduled task, unique within its scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A one-shot task queued on a scheduler.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the current event loop.
pub trait Scheduler {
    /// Queue `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Drop a queued task. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

// =============================================================
// ManualScheduler
// =============================================================

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), Task>,
    due: HashMap<TimerId, Duration>,
}

/// Virtual-clock scheduler. Tasks run only inside [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<ManualInner>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move the clock forward by `by`, running every task that comes due in
    /// order. Tasks queued while advancing run too if they fall inside the
    /// window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let Some((&(at, id), _)) = inner.queue.first_key_value() else {
                    break;
                };
                if at > target {
                    break;
                }
                inner.now = at;
                inner.due.remove(&id);
                inner.queue.remove(&(at, id))
            };
            // Borrow released: the task may schedule or cancel.
            if let Some(task) = next {
                task();
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Shorthand for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let at = inner.now + delay;
        inner.queue.insert((at, id), task);
        inner.due.insert(id, at);
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(at) = inner.due.remove(&id) {
            inner.queue.remove(&(at, id));
        }
    }
}

// =============================================================
// BrowserScheduler
// =============================================================

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::time::Duration;

    use gloo_timers::callback::Timeout;

    use super::{Scheduler, Task, TimerId};

    #[derive(Default)]
    struct Inner {
        next_id: u64,
        timers: HashMap<TimerId, Timeout>,
    }

    /// `setTimeout`-backed scheduler. Dropping a [`Timeout`] clears it, so
    /// cancellation is removal from the map.
    #[derive(Clone, Default)]
    pub struct BrowserScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl BrowserScheduler {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Scheduler for BrowserScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> TimerId {
            let id = {
                let mut inner = self.inner.borrow_mut();
                let id = TimerId(inner.next_id);
                inner.next_id += 1;
                id
            };
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let weak = Rc::downgrade(&self.inner);
            let timeout = Timeout::new(millis, move || {
                // The Timeout owns this closure; drop it after the callback returns.
                if let Some(inner) = weak.upgrade() {
                    let fired = inner.borrow_mut().timers.remove(&id);
                    wasm_bindgen_futures::spawn_local(async move { drop(fired) });
                }
                task();
            });
            self.inner.borrow_mut().timers.insert(id, timeout);
            id
        }

        fn cancel(&self, id: TimerId) {
            let removed = self.inner.borrow_mut().timers.remove(&id);
            drop(removed);
        }
    }
}
