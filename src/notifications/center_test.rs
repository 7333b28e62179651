use super::*;
use crate::notifications::memory_dom::MemoryDom;
use crate::timing::VirtualTimer;
use std::collections::HashSet;

const CONTAINER: &str = "toastContainer";

fn setup() -> (MemoryDom, Rc<VirtualTimer>, NotificationCenter<MemoryDom>) {
    let dom = MemoryDom::new();
    let timer = Rc::new(VirtualTimer::new());
    let center = NotificationCenter::new(dom.clone(), timer.clone());
    (dom, timer, center)
}

// =============================================================
// Container lifecycle
// =============================================================

#[test]
fn no_container_before_first_notify() {
    let (dom, _timer, center) = setup();
    assert!(!center.has_container());
    assert_eq!(dom.containers_created(), 0);
}

#[test]
fn first_notify_creates_exactly_one_container() {
    let (dom, _timer, center) = setup();
    center.notify("one", Severity::Info);
    assert_eq!(dom.containers_created(), 1);
    assert_eq!(
        dom.class_of(CONTAINER).as_deref(),
        Some("toast-container position-fixed top-0 end-0 p-3")
    );

    for i in 0..10 {
        center.notify(&format!("more {i}"), Severity::Success);
    }
    assert_eq!(dom.containers_created(), 1);
}

#[test]
fn existing_container_on_page_is_adopted() {
    let dom = MemoryDom::with_container(CONTAINER, "server");
    let center = NotificationCenter::new(dom.clone(), Rc::new(VirtualTimer::new()));
    let id = center.notify("hello", Severity::Info);
    assert_eq!(dom.containers_created(), 0);
    assert_eq!(dom.children_of(CONTAINER), vec![center.dom_id(id)]);
}

#[test]
fn two_centers_on_one_page_share_a_container() {
    let dom = MemoryDom::new();
    let timer: Rc<dyn Timer> = Rc::new(VirtualTimer::new());
    let first = NotificationCenter::new(dom.clone(), Rc::clone(&timer));
    let second = NotificationCenter::new(dom.clone(), timer);

    let a = first.notify("a", Severity::Info);
    let b = second.notify("b", Severity::Info);
    assert_eq!(dom.containers_created(), 1);
    assert_ne!(a, b);
    assert_eq!(dom.children_of(CONTAINER).len(), 2);
}

#[test]
fn container_replaced_by_page_is_found_again() {
    let (dom, _timer, center) = setup();
    center.notify("before", Severity::Info);
    assert!(dom.detach(CONTAINER));

    let id = center.notify("after", Severity::Info);
    assert_eq!(center.phase(id), ToastPhase::Shown);
    assert_eq!(dom.containers_created(), 2);
    assert_eq!(dom.children_of(CONTAINER), vec![center.dom_id(id)]);

    center.notify("again", Severity::Info);
    assert_eq!(dom.containers_created(), 2);
}

#[test]
fn server_rendered_replacement_container_is_adopted() {
    let (dom, _timer, center) = setup();
    center.notify("before", Severity::Info);
    dom.detach(CONTAINER);
    let mut page = dom.clone();
    page.create_container(CONTAINER, "rerendered");

    let id = center.notify("after", Severity::Info);
    assert_eq!(dom.containers_created(), 2);
    assert_eq!(dom.class_of(CONTAINER).as_deref(), Some("rerendered"));
    assert_eq!(dom.children_of(CONTAINER), vec![center.dom_id(id)]);
}

#[test]
fn custom_config_controls_container_and_ids() {
    let dom = MemoryDom::new();
    let config = ToastConfig {
        container_id: "alerts".to_owned(),
        id_prefix: "note-".to_owned(),
        ..ToastConfig::default()
    };
    let center = NotificationCenter::with_config(dom.clone(), Rc::new(VirtualTimer::new()), config);
    let id = center.notify("x", Severity::Info);
    assert_eq!(center.dom_id(id), format!("note-{}", id.sequence()));
    assert_eq!(dom.children_of("alerts"), vec![center.dom_id(id)]);
}

// =============================================================
// notify
// =============================================================

#[test]
fn every_notify_creates_one_element_with_distinct_id() {
    let (dom, _timer, center) = setup();
    let ids = (0..25)
        .map(|i| center.notify(&format!("msg {i}"), Severity::Info))
        .collect::<Vec<_>>();

    assert_eq!(dom.toasts_created(), 25);
    let distinct = ids.iter().copied().collect::<HashSet<_>>();
    assert_eq!(distinct.len(), 25);
    let dom_ids = dom.children_of(CONTAINER).into_iter().collect::<HashSet<_>>();
    assert_eq!(dom_ids.len(), 25);
}

#[test]
fn toasts_are_displayed_in_call_order() {
    let (dom, _timer, center) = setup();
    let a = center.notify("a", Severity::Info);
    let b = center.notify("b", Severity::Error);
    let c = center.notify("c", Severity::Success);

    assert_eq!(center.live_ids(), vec![a, b, c]);
    assert_eq!(
        dom.children_of(CONTAINER),
        vec![center.dom_id(a), center.dom_id(b), center.dom_id(c)]
    );
}

#[test]
fn notify_shows_toast_and_renders_severity() {
    let (dom, _timer, center) = setup();
    let id = center.notify("Uploaded", Severity::Success);
    let dom_id = center.dom_id(id);

    assert_eq!(center.phase(id), ToastPhase::Shown);
    assert!(dom.is_visible(&dom_id));
    let markup = dom.markup_of(&dom_id).expect("markup");
    assert!(markup.contains("text-success"));
    assert!(markup.contains("Uploaded"));
}

#[test]
fn unknown_kind_degrades_to_info() {
    let (dom, _timer, center) = setup();
    let id = center.notify_kind("careful", "warning");
    assert_eq!(center.severity(id), Some(Severity::Info));
    let markup = dom.markup_of(&center.dom_id(id)).expect("markup");
    assert!(markup.contains("fa-info-circle"));
}

#[test]
fn notify_binds_listeners_without_scheduling_timers() {
    let (dom, timer, center) = setup();
    center.notify("a", Severity::Info);
    assert_eq!(dom.binding_count(), 1);
    assert_eq!(timer.pending_count(), 0);
}

// =============================================================
// Dismissal and cleanup
// =============================================================

#[test]
fn dismiss_moves_to_hiding_then_hidden_removes_element() {
    let (dom, _timer, center) = setup();
    let id = center.notify("bye", Severity::Info);
    let dom_id = center.dom_id(id);

    assert!(center.dismiss(id));
    assert_eq!(center.phase(id), ToastPhase::Hiding);
    assert!(dom.contains(&dom_id));
    assert!(!dom.is_visible(&dom_id));

    assert_eq!(dom.finish_transitions(), 1);
    assert_eq!(center.phase(id), ToastPhase::Removed);
    assert!(!dom.contains(&dom_id));
    assert!(dom.children_of(CONTAINER).is_empty());
    assert!(center.is_empty());
}

#[test]
fn hidden_completion_releases_all_listeners() {
    let (dom, _timer, center) = setup();
    let keep = center.notify("keep", Severity::Info);
    let before = dom.binding_count();
    let gone = center.notify("gone", Severity::Info);
    assert_eq!(dom.binding_count(), before + 1);

    center.dismiss(gone);
    dom.finish_transitions();
    assert_eq!(dom.binding_count(), before);
    assert_eq!(center.live_ids(), vec![keep]);
}

#[test]
fn second_dismiss_is_noop() {
    let (dom, _timer, center) = setup();
    let id = center.notify("x", Severity::Info);
    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert_eq!(dom.finish_transitions(), 1);
    assert!(!center.dismiss(id));
    assert!(!center.complete_hide(id));
}

#[test]
fn double_click_on_close_button_is_idempotent() {
    let (dom, _timer, center) = setup();
    let id = center.notify("x", Severity::Info);
    let dom_id = center.dom_id(id);

    assert!(dom.click_close(&dom_id));
    assert!(dom.click_close(&dom_id));
    assert_eq!(center.phase(id), ToastPhase::Hiding);
    assert_eq!(dom.finish_transitions(), 1);
    assert!(!dom.click_close(&dom_id));
    assert_eq!(dom.binding_count(), 0);
}

#[test]
fn hidden_event_without_dismiss_still_removes() {
    let (dom, _timer, center) = setup();
    let id = center.notify("x", Severity::Info);
    assert!(dom.fire_hidden(&center.dom_id(id)));
    assert_eq!(center.phase(id), ToastPhase::Removed);
    assert_eq!(dom.binding_count(), 0);
}

#[test]
fn removal_order_is_independent_of_creation_order() {
    let (dom, _timer, center) = setup();
    let a = center.notify("a", Severity::Info);
    let b = center.notify("b", Severity::Info);
    let c = center.notify("c", Severity::Info);

    center.dismiss(b);
    dom.finish_transitions();
    assert_eq!(center.live_ids(), vec![a, c]);
    center.dismiss(a);
    dom.finish_transitions();
    assert_eq!(center.live_ids(), vec![c]);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let (_dom, _timer, center) = setup();
    let other = NotificationCenter::new(MemoryDom::new(), Rc::new(VirtualTimer::new()));
    let foreign = other.notify("elsewhere", Severity::Info);
    assert!(!center.dismiss(foreign));
    assert_eq!(center.phase(foreign), ToastPhase::Removed);
}

#[test]
fn dismiss_all_hides_every_shown_toast() {
    let (dom, _timer, center) = setup();
    let a = center.notify("a", Severity::Info);
    center.notify("b", Severity::Info);
    center.dismiss(a);

    assert_eq!(center.dismiss_all(), 1);
    assert_eq!(dom.finish_transitions(), 2);
    assert!(center.is_empty());
}

// =============================================================
// Auto-dismiss policy
// =============================================================

#[test]
fn timeout_dismisses_after_delay() {
    let (dom, timer, center) = setup();
    let id = center.notify_with_timeout("soon", Severity::Info, Duration::from_millis(3000));

    timer.advance_to(2999);
    assert_eq!(center.phase(id), ToastPhase::Shown);
    timer.advance_to(3000);
    assert_eq!(center.phase(id), ToastPhase::Hiding);
    dom.finish_transitions();
    assert_eq!(center.phase(id), ToastPhase::Removed);
}

#[test]
fn manual_dismiss_cancels_pending_timeout() {
    let (dom, timer, center) = setup();
    let id = center.notify_with_timeout("x", Severity::Info, Duration::from_millis(1000));
    assert_eq!(timer.pending_count(), 1);

    center.dismiss(id);
    assert_eq!(timer.pending_count(), 0);
    dom.finish_transitions();
    assert_eq!(timer.advance_to(5000), 0);
}

#[test]
fn external_hidden_event_cancels_pending_timeout() {
    let (dom, timer, center) = setup();
    let id = center.notify_with_timeout("x", Severity::Info, Duration::from_millis(1000));
    dom.fire_hidden(&center.dom_id(id));
    assert_eq!(timer.pending_count(), 0);
}

#[test]
fn notify_auto_uses_configured_delay() {
    let dom = MemoryDom::new();
    let timer = Rc::new(VirtualTimer::new());
    let config = ToastConfig { auto_dismiss_ms: 250, ..ToastConfig::default() };
    let center = NotificationCenter::with_config(dom, timer.clone(), config);
    let id = center.notify_auto("x", Severity::Success);

    timer.advance_to(249);
    assert_eq!(center.phase(id), ToastPhase::Shown);
    timer.advance_to(250);
    assert_eq!(center.phase(id), ToastPhase::Hiding);
}

#[test]
fn late_timer_after_center_dropped_is_ignored() {
    let timer = Rc::new(VirtualTimer::new());
    {
        let center = NotificationCenter::new(MemoryDom::new(), timer.clone());
        center.notify_with_timeout("x", Severity::Info, Duration::from_millis(10));
    }
    assert_eq!(timer.advance_to(100), 1);
}
