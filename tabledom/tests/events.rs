use std::cell::RefCell;
use std::rc::Rc;

use tabledom::{DispatchError, DispatchOutcome, Document, Element, Event, EventKind, MouseButton};

fn document() -> Document {
    Document::new(
        Element::box_().id("root").child(
            Element::tr()
                .id("row")
                .child(Element::th("A").id("a"))
                .child(Element::th("B").id("b")),
        ),
    )
}

// ============================================================================
// Event helpers
// ============================================================================

#[test]
fn test_click_helper() {
    let event = Event::click("a");
    assert_eq!(event.target(), Some("a"));
    assert_eq!(event.kind(), EventKind::Click);
    assert_eq!(
        event,
        Event::Click {
            target: Some("a".into()),
            button: MouseButton::Left,
        }
    );
}

#[test]
fn test_mouse_button_from_crossterm() {
    use crossterm::event::MouseButton as CtBtn;
    assert_eq!(MouseButton::from(CtBtn::Left), MouseButton::Left);
    assert_eq!(MouseButton::from(CtBtn::Right), MouseButton::Right);
    assert_eq!(MouseButton::from(CtBtn::Middle), MouseButton::Middle);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_runs_target_listener() {
    let mut doc = document();
    doc.add_listener("a", EventKind::Click, |root, _| {
        root.add_class("clicked-a");
        Ok(())
    });

    let outcome = doc.dispatch(&Event::click("a")).unwrap();
    assert_eq!(outcome, DispatchOutcome::Handled(1));
    assert!(doc.root().has_class("clicked-a"));
}

#[test]
fn test_dispatch_ignores_other_targets() {
    let mut doc = document();
    doc.add_listener("a", EventKind::Click, |_, _| Ok(()));

    let outcome = doc.dispatch(&Event::click("b")).unwrap();
    assert_eq!(outcome, DispatchOutcome::NotHandled);
    assert!(!outcome.is_handled());
}

#[test]
fn test_dispatch_bubbles_target_first() {
    let mut doc = document();
    let order = Rc::new(RefCell::new(Vec::new()));

    for id in ["root", "row", "a"] {
        let order = Rc::clone(&order);
        doc.add_listener(id, EventKind::Click, move |_, _| {
            order.borrow_mut().push(id);
            Ok(())
        });
    }

    let outcome = doc.dispatch(&Event::click("a")).unwrap();
    assert_eq!(outcome, DispatchOutcome::Handled(3));
    assert_eq!(*order.borrow(), vec!["a", "row", "root"]);
}

#[test]
fn test_dispatch_without_target_is_not_handled() {
    let mut doc = document();
    doc.add_listener("root", EventKind::Click, |_, _| Ok(()));
    let event = Event::Click {
        target: None,
        button: MouseButton::Left,
    };
    assert_eq!(doc.dispatch(&event).unwrap(), DispatchOutcome::NotHandled);
}

#[test]
fn test_dispatch_unknown_target() {
    let mut doc = document();
    let err = doc.dispatch(&Event::click("ghost")).unwrap_err();
    assert!(matches!(err, DispatchError::UnknownTarget(id) if id == "ghost"));
}

#[test]
fn test_dispatch_stops_at_first_error() {
    let mut doc = document();
    let reached_root = Rc::new(RefCell::new(false));

    doc.add_listener("a", EventKind::Click, |_, _| Err("boom".into()));
    let flag = Rc::clone(&reached_root);
    doc.add_listener("root", EventKind::Click, move |_, _| {
        *flag.borrow_mut() = true;
        Ok(())
    });

    let err = doc.dispatch(&Event::click("a")).unwrap_err();
    match err {
        DispatchError::Handler { target, source } => {
            assert_eq!(target, "a");
            assert_eq!(source.to_string(), "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!*reached_root.borrow());
}

// ============================================================================
// Listener removal
// ============================================================================

#[test]
fn test_remove_listener() {
    let mut doc = document();
    let id = doc.add_listener("a", EventKind::Click, |_, _| Ok(()));
    assert_eq!(doc.listener_count(), 1);
    assert_eq!(doc.listeners_on("a"), 1);

    assert!(doc.remove_listener(id));
    assert!(!doc.remove_listener(id));
    assert_eq!(doc.listener_count(), 0);
    assert_eq!(
        doc.dispatch(&Event::click("a")).unwrap(),
        DispatchOutcome::NotHandled
    );
}

#[test]
fn test_listener_ids_are_distinct() {
    let mut doc = document();
    let first = doc.add_listener("a", EventKind::Click, |_, _| Ok(()));
    let second = doc.add_listener("a", EventKind::Click, |_, _| Ok(()));
    assert_ne!(first, second);
    assert!(doc.remove_listener(first));
    assert_eq!(doc.listeners_on("a"), 1);
}
