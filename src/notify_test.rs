use super::*;
use crate::dom::{MemoryDom, NodeRef};
use crate::schedule::ManualScheduler;

fn page(with_container: bool) -> (Rc<MemoryDom>, Rc<ManualScheduler>, Notifier<MemoryDom>, Option<NodeRef>) {
    let dom = Rc::new(MemoryDom::new());
    let container = with_container.then(|| dom.add_element(dom.body_ref(), "div", Some("alert-container"), &[]));
    let scheduler = Rc::new(ManualScheduler::new());
    let notifier = Notifier::new(
        Rc::clone(&dom),
        Rc::clone(&scheduler) as Rc<dyn Scheduler>,
        NotifyConfig::default(),
    );
    (dom, scheduler, notifier, container)
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_parse_falls_back_to_info() {
    assert_eq!(Severity::parse("success"), Severity::Success);
    assert_eq!(Severity::parse("warning"), Severity::Warning);
    assert_eq!(Severity::parse("error"), Severity::Error);
    assert_eq!(Severity::parse("info"), Severity::Info);
    assert_eq!(Severity::parse("critical"), Severity::Info);
    assert_eq!(Severity::parse(""), Severity::Info);
}

#[test]
fn severity_parse_is_exact_match_only() {
    assert_eq!(Severity::parse("SUCCESS"), Severity::Info);
    assert_eq!(Severity::parse("Error"), Severity::Info);
    assert_eq!(Severity::parse(" warning "), Severity::Info);
}

#[test]
fn severity_icons_and_classes() {
    assert_eq!(Severity::Success.icon(), "✓");
    assert_eq!(Severity::Error.icon(), "✗");
    assert_eq!(Severity::Warning.icon(), "⚠");
    assert_eq!(Severity::Info.icon(), "ℹ");
    assert_eq!(Severity::Warning.class(), "alert-warning");
    assert_eq!(Severity::default(), Severity::Info);
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn present_renders_alert_with_icon_and_message() {
    let (dom, _scheduler, notifier, container) = page(true);
    let container = container.unwrap();
    notifier.present("Exam submitted", Severity::Success);

    let children = dom.children(container);
    assert_eq!(children.len(), 1);
    let alert = children[0];
    assert_eq!(dom.classes(alert), vec!["alert", "alert-success", "scale-in"]);
    assert_eq!(dom.text_content(alert), "✓Exam submitted");
}

#[test]
fn present_treats_message_as_text() {
    let (dom, _scheduler, notifier, container) = page(true);
    notifier.present("<b>bold</b>", Severity::Info);
    let alert = dom.children(container.unwrap())[0];
    let message = dom.children(alert)[1];
    assert_eq!(dom.text_content(message), "<b>bold</b>");
    assert!(dom.children(message).is_empty());
}

#[test]
fn newer_alert_replaces_current_one() {
    let (dom, _scheduler, notifier, container) = page(true);
    let container = container.unwrap();
    notifier.present("first", Severity::Info);
    notifier.present("second", Severity::Error);

    let children = dom.children(container);
    assert_eq!(children.len(), 1);
    assert_eq!(dom.text_content(container), "✗second");
}

#[test]
fn alert_fades_then_clears() {
    let (dom, scheduler, notifier, container) = page(true);
    let container = container.unwrap();
    notifier.present("saved", Severity::Success);
    let alert = dom.children(container)[0];

    scheduler.advance_ms(4999);
    assert_eq!(dom.style(alert, "animation"), None);
    scheduler.advance_ms(1);
    assert_eq!(dom.style(alert, "animation").as_deref(), Some("fadeOut 0.3s ease"));
    assert_eq!(dom.children(container).len(), 1);

    scheduler.advance_ms(299);
    assert_eq!(dom.children(container).len(), 1);
    scheduler.advance_ms(1);
    assert!(dom.children(container).is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn stale_dismiss_timer_clears_newer_alert() {
    let (dom, scheduler, notifier, container) = page(true);
    let container = container.unwrap();
    notifier.present("first", Severity::Info);
    scheduler.advance_ms(4000);
    notifier.present("second", Severity::Info);

    // The first alert's timer fires at 5000 and takes the second one down.
    scheduler.advance_ms(1300);
    assert!(dom.children(container).is_empty());
}

#[test]
fn dismiss_skips_fade_when_container_already_empty() {
    let (dom, scheduler, notifier, container) = page(true);
    let container = container.unwrap();
    notifier.present("gone", Severity::Info);
    dom.clear_children(&container);

    scheduler.advance_ms(5000);
    assert_eq!(scheduler.pending(), 0);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn present_without_container_falls_back_to_toast() {
    let (dom, scheduler, notifier, _) = page(false);
    notifier.present("Copied", Severity::Warning);

    let body = dom.body_ref();
    let toasts = dom.children(body);
    assert_eq!(toasts.len(), 1);
    let toast = toasts[0];
    assert_eq!(dom.classes(toast), vec!["toast", "alert-warning"]);
    assert_eq!(dom.text_content(toast), "Copied");

    scheduler.advance_ms(2999);
    assert!(dom.is_attached(toast));
    scheduler.advance_ms(1);
    assert!(!dom.is_attached(toast));
    assert!(dom.children(body).is_empty());
}

#[test]
fn toasts_stack_and_expire_independently() {
    let (dom, scheduler, notifier, _) = page(false);
    notifier.toast("one", Severity::Info);
    scheduler.advance_ms(1000);
    notifier.toast("two", Severity::Info);
    assert_eq!(dom.children(dom.body_ref()).len(), 2);

    scheduler.advance_ms(2000);
    let left = dom.children(dom.body_ref());
    assert_eq!(left.len(), 1);
    assert_eq!(dom.text_content(left[0]), "two");
}

#[test]
fn custom_container_id_is_honoured() {
    let dom = Rc::new(MemoryDom::new());
    let flash = dom.add_element(dom.body_ref(), "div", Some("flash"), &[]);
    let scheduler = Rc::new(ManualScheduler::new());
    let config = NotifyConfig { container_id: "flash".to_owned(), ..NotifyConfig::default() };
    let notifier = Notifier::new(Rc::clone(&dom), scheduler as Rc<dyn Scheduler>, config);

    notifier.present("hi", Severity::Info);
    assert_eq!(dom.text_content(flash), "ℹhi");
}
