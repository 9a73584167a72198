use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |label: &'static str| -> Task {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn task_runs_only_once_delay_elapses() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(Duration::from_millis(100), task("a"));

    scheduler.advance_ms(99);
    assert!(log.borrow().is_empty());
    scheduler.advance_ms(1);
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn tasks_run_in_due_order_then_insertion_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(Duration::from_millis(30), task("late"));
    scheduler.schedule(Duration::from_millis(10), task("early"));
    scheduler.schedule(Duration::from_millis(10), task("early-second"));

    scheduler.advance_ms(50);
    assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
    assert_eq!(scheduler.now(), Duration::from_millis(50));
}

#[test]
fn cancelled_task_never_runs() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let id = scheduler.schedule(Duration::from_millis(10), task("x"));
    scheduler.cancel(id);
    scheduler.cancel(id);

    scheduler.advance_ms(100);
    assert!(log.borrow().is_empty());
}

#[test]
fn task_scheduled_from_task_runs_within_same_advance() {
    let scheduler = Rc::new(ManualScheduler::new());
    let (log, task) = recorder();
    let inner = Rc::clone(&scheduler);
    let follow_up = task("second");
    scheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || {
            inner.schedule(Duration::from_millis(5), follow_up);
        }),
    );

    scheduler.advance_ms(15);
    assert_eq!(*log.borrow(), vec!["second"]);
}

#[test]
fn delays_are_relative_to_current_clock() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.advance_ms(1000);
    scheduler.schedule(Duration::from_millis(10), task("a"));

    scheduler.advance_ms(9);
    assert!(log.borrow().is_empty());
    scheduler.advance_ms(1);
    assert_eq!(*log.borrow(), vec!["a"]);
}
