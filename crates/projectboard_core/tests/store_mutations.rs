use projectboard_core::{Project, ProjectStatus, ProjectStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

/// Registers a listener that records every delivered snapshot.
fn record_snapshots(store: &mut ProjectStore) -> Rc<RefCell<Vec<Vec<Project>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.add_listener(move |projects| sink.borrow_mut().push(projects));
    seen
}

#[test]
fn store_size_matches_add_calls_and_ids_are_unique() {
    let mut store = ProjectStore::new();
    for i in 0..10 {
        store.add_project(format!("Project {i}"), "a valid description", 3);
    }

    assert_eq!(store.len(), 10);
    let ids: HashSet<_> = store.snapshot().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn add_project_yields_an_active_project_with_given_fields() {
    let mut store = ProjectStore::new();
    let id = store.add_project("T", "a valid description", 3);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    let project = &snapshot[0];
    assert_eq!(project.id, id);
    assert_eq!(project.title, "T");
    assert_eq!(project.description, "a valid description");
    assert_eq!(project.team_size, 3);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn move_project_changes_only_status_and_notifies() {
    let mut store = ProjectStore::new();
    let id = store.add_project("T", "a valid description", 3);
    let seen = record_snapshots(&mut store);

    store.move_project(id, ProjectStatus::Finished);

    let snapshots = seen.borrow();
    assert_eq!(snapshots.len(), 1);
    let delivered = &snapshots[0][0];
    assert_eq!(delivered.status, ProjectStatus::Finished);
    assert_eq!(delivered.id, id);
    assert_eq!(delivered.title, "T");
    assert_eq!(delivered.description, "a valid description");
    assert_eq!(delivered.team_size, 3);
}

#[test]
fn move_with_unknown_id_is_a_silent_noop() {
    let mut store = ProjectStore::new();
    store.add_project("T", "a valid description", 3);
    let before = store.snapshot();
    let seen = record_snapshots(&mut store);

    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert!(seen.borrow().is_empty());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn move_to_the_current_status_does_not_notify() {
    let mut store = ProjectStore::new();
    let id = store.add_project("T", "a valid description", 3);
    let seen = record_snapshots(&mut store);

    store.move_project(id, ProjectStatus::Active);
    assert!(seen.borrow().is_empty());

    store.move_project(id, ProjectStatus::Finished);
    assert_eq!(seen.borrow().len(), 1);
    store.move_project(id, ProjectStatus::Finished);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn delivered_snapshots_are_independent_copies() {
    let mut store = ProjectStore::new();
    let seen = record_snapshots(&mut store);
    let id = store.add_project("T", "a valid description", 3);

    // Tampering with a delivered snapshot must not leak anywhere.
    {
        let mut snapshots = seen.borrow_mut();
        let delivered = &mut snapshots[0];
        delivered[0].status = ProjectStatus::Finished;
        delivered.clear();
    }

    let mut pulled = store.snapshot();
    assert_eq!(pulled.len(), 1);
    assert_eq!(pulled[0].status, ProjectStatus::Active);

    // Same copy semantics for pull-style snapshots.
    pulled[0].status = ProjectStatus::Finished;
    assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);

    store.move_project(id, ProjectStatus::Finished);
    let snapshots = seen.borrow();
    assert_eq!(snapshots.last().unwrap().len(), 1);
}

#[test]
fn registering_the_same_callback_twice_notifies_twice() {
    let mut store = ProjectStore::new();
    let counter = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&counter);
    let callback = move |_: Vec<Project>| *sink.borrow_mut() += 1;
    store.add_listener(callback.clone());
    store.add_listener(callback);

    store.add_project("T", "a valid description", 3);
    assert_eq!(*counter.borrow(), 2);
}

#[test]
fn removed_listeners_stop_receiving_notifications() {
    let mut store = ProjectStore::new();
    let counter = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&counter);
    let handle = store.add_listener(move |_: Vec<Project>| *sink.borrow_mut() += 1);

    store.add_project("T", "a valid description", 3);
    assert_eq!(*counter.borrow(), 1);

    assert!(store.remove_listener(handle));
    store.add_project("U", "another description", 2);
    assert_eq!(*counter.borrow(), 1);

    // A handle removes at most once.
    assert!(!store.remove_listener(handle));
}
