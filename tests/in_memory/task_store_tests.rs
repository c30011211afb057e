//! In-memory integration tests for task store mutations.

use super::helpers::{MemoryStore, add_all, open_store, persistence, store, today};
use crate::test_helpers::date;
use rstest::rstest;
use taskdeck::task::{
    adapters::memory::InMemoryTaskPersistence,
    domain::{Priority, TaskDetails, TaskDomainError, TaskId},
    ports::TaskPersistence,
    services::{AddTaskRequest, TaskStoreError, UpdateTaskRequest},
};

#[rstest]
fn reopened_store_sees_saved_tasks(persistence: InMemoryTaskPersistence) {
    let mut first_session = open_store(&persistence);
    let added = add_all(
        &mut first_session,
        [
            AddTaskRequest::new("Buy milk", Priority::Low),
            AddTaskRequest::new("File taxes", Priority::High).with_deadline(today()),
        ],
    )
    .expect("tasks are added");

    let second_session = open_store(&persistence);

    assert_eq!(second_session.tasks(), added.as_slice());
}

#[rstest]
fn sessions_do_not_share_in_memory_state(persistence: InMemoryTaskPersistence) {
    let mut first_session = open_store(&persistence);
    let second_session = open_store(&persistence);

    first_session
        .add(AddTaskRequest::new("Only in first", Priority::Medium))
        .expect("task is added");

    assert_eq!(first_session.len(), 1);
    assert!(second_session.is_empty());
}

#[rstest]
fn edit_flow_updates_snapshot(persistence: InMemoryTaskPersistence) {
    let mut store = open_store(&persistence);
    let added = store
        .add(AddTaskRequest::new("Paint fence", Priority::Low))
        .expect("task is added");

    store
        .update(
            added.id(),
            UpdateTaskRequest::new()
                .with_priority(Priority::Medium)
                .with_deadline(Some(date(2026, 10, 24)))
                .with_details(TaskDetails {
                    assignees: vec!["kim".to_owned()],
                    estimate: Some("1d".to_owned()),
                    size: None,
                }),
        )
        .expect("update succeeds");
    store
        .set_completed(added.id(), true)
        .expect("completion succeeds");

    let saved = persistence.load().expect("snapshot readable");
    let task = saved.first().expect("task saved");
    assert_eq!(task.id(), added.id());
    assert_eq!(task.priority(), Priority::Medium);
    assert_eq!(task.deadline(), Some(date(2026, 10, 24)));
    assert_eq!(task.details().assignees, vec!["kim".to_owned()]);
    assert!(task.is_completed());
    assert_eq!(persistence.save_count().expect("count readable"), 3);
}

#[rstest]
fn rejected_edit_leaves_snapshot_untouched(persistence: InMemoryTaskPersistence) {
    let mut store = open_store(&persistence);
    let added = store
        .add(AddTaskRequest::new("Keep me", Priority::High))
        .expect("task is added");

    let result = store.update(added.id(), UpdateTaskRequest::new().with_title(""));

    assert!(matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ));
    assert_eq!(persistence.save_count().expect("count readable"), 1);
    assert_eq!(
        persistence.load().expect("snapshot readable"),
        vec![added]
    );
}

#[rstest]
fn delete_twice_shrinks_collection_once(mut store: MemoryStore) {
    let tasks = add_all(
        &mut store,
        [
            AddTaskRequest::new("one", Priority::Low),
            AddTaskRequest::new("two", Priority::Low),
            AddTaskRequest::new("three", Priority::Low),
        ],
    )
    .expect("tasks are added");
    let target = tasks.get(1).expect("second task").id();

    let first = store.delete(target).expect("delete succeeds");
    let second = store.delete(target).expect("delete succeeds");

    assert!(first);
    assert!(!second);
    assert_eq!(store.len(), 2);
}

#[rstest]
fn operations_on_unknown_ids_are_reported(mut store: MemoryStore) {
    let unknown = TaskId::new();

    assert!(store.get(unknown).is_none());
    assert!(!store.delete(unknown).expect("delete succeeds"));
    assert!(matches!(
        store.set_completed(unknown, true),
        Err(TaskStoreError::NotFound(id)) if id == unknown
    ));
}
