use std::cell::RefCell;
use std::rc::Rc;

use eframe_whiteboard::{
    ChangeOrigin, EngineEvent, RemoteChange, RemoteHistoryPolicy, Shape, ShapeStampKind, ToolKind,
    Whiteboard, WhiteboardConfig,
};
use egui::Color32;

fn board(policy: RemoteHistoryPolicy) -> Whiteboard {
    Whiteboard::with_surface(WhiteboardConfig {
        surface_width: 250,
        surface_height: 250,
        remote_history: policy,
        ..Default::default()
    })
    .unwrap()
}

fn record_events(board: &Whiteboard) -> Rc<RefCell<Vec<EngineEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    board.subscribe(move |event: &EngineEvent| sink.borrow_mut().push(event.clone()));
    events
}

fn remote_circle() -> RemoteChange {
    RemoteChange::Insert {
        shape: Shape::stamp(ShapeStampKind::Circle, Color32::BLUE, 4.0),
    }
}

#[test]
fn test_every_local_change_is_observed() {
    let mut board = board(RemoteHistoryPolicy::Barrier);
    let events = record_events(&board);

    board.add_shape(ShapeStampKind::Rectangle);
    board.undo();
    board.redo();
    board.clear();

    let events = events.borrow();
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events[0],
        EngineEvent::ShapeCommitted { origin: ChangeOrigin::Local, .. }
    ));
    assert!(matches!(events[1], EngineEvent::Undone { .. }));
    assert!(matches!(events[2], EngineEvent::Redone { .. }));
    assert!(matches!(events[3], EngineEvent::Cleared { origin: ChangeOrigin::Local }));

    let outgoing: Vec<RemoteChange> = events.iter().filter_map(RemoteChange::from_event).collect();
    assert_eq!(outgoing.len(), 3);
    assert_eq!(outgoing[2], RemoteChange::Clear);
}

#[test]
fn test_barrier_policy_seals_local_history() {
    let mut board = board(RemoteHistoryPolicy::Barrier);
    board.add_shape(ShapeStampKind::Rectangle);
    board.add_shape(ShapeStampKind::Triangle);
    board.undo();

    board.apply_remote(remote_circle());

    assert_eq!(board.shapes().len(), 2);
    assert_eq!(board.shapes()[1].kind().name(), "Circle");
    assert!(!board.can_undo());
    assert!(!board.can_redo());
    assert!(!board.undo());
    assert_eq!(board.shapes().len(), 2);
}

#[test]
fn test_shared_policy_records_remote_inserts() {
    let mut board = board(RemoteHistoryPolicy::Shared);
    board.add_shape(ShapeStampKind::Rectangle);

    board.apply_remote(remote_circle());
    assert_eq!(board.history().undo_stack().len(), 2);

    assert!(board.undo());
    assert_eq!(board.shapes().len(), 1);
    assert_eq!(board.shapes()[0].kind().name(), "Rectangle");
}

#[test]
fn test_remote_changes_are_not_echoed() {
    let mut board = board(RemoteHistoryPolicy::Barrier);
    let events = record_events(&board);

    board.apply_remote(remote_circle());
    board.apply_remote(RemoteChange::Clear);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.origin() == ChangeOrigin::Remote));
    assert!(events.iter().filter_map(RemoteChange::from_event).next().is_none());
}

#[test]
fn test_remote_clear_keeps_local_tool_state() {
    let mut board = board(RemoteHistoryPolicy::Barrier);
    board.select_tool(ToolKind::Eraser);
    board.select_color(Color32::RED);
    board.add_shape(ShapeStampKind::Rectangle);

    board.apply_remote(RemoteChange::Clear);

    assert!(board.shapes().is_empty());
    assert!(!board.can_undo());
    assert_eq!(board.tool(), ToolKind::Eraser);
    assert_eq!(board.color(), Color32::RED);
}

#[test]
fn test_remote_insert_from_json() {
    let mut sender = board(RemoteHistoryPolicy::Barrier);
    let events = record_events(&sender);
    sender.add_shape(ShapeStampKind::Triangle);

    let wire = RemoteChange::from_event(&events.borrow()[0]).unwrap().to_json().unwrap();

    let mut receiver = board(RemoteHistoryPolicy::Barrier);
    receiver.apply_remote(RemoteChange::from_json(&wire).unwrap());

    assert_eq!(receiver.shapes(), sender.shapes());
    assert_eq!(receiver.surface(), sender.surface());
}

#[test]
fn test_peer_matches_after_commit_undo_redo() {
    let mut local = board(RemoteHistoryPolicy::Barrier);
    let events = record_events(&local);
    let mut peer = board(RemoteHistoryPolicy::Barrier);

    local.add_shape(ShapeStampKind::Rectangle);
    local.undo();
    local.redo();

    for change in events.borrow().iter().filter_map(RemoteChange::from_event) {
        peer.apply_remote(change);
    }

    assert_eq!(peer.shapes(), local.shapes());
    assert_eq!(peer.shapes().len(), 1);
}

#[test]
fn test_repeated_remote_insert_is_applied_once() {
    let mut board = board(RemoteHistoryPolicy::Shared);
    let change = remote_circle();

    board.apply_remote(change.clone());
    board.apply_remote(change);

    assert_eq!(board.shapes().len(), 1);
    assert_eq!(board.history().undo_stack().len(), 1);
}
