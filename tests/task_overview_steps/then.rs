//! Then steps for task overview BDD scenarios.

use super::world::TaskOverviewWorld;
use rstest_bdd_macros::then;
use taskdeck::task::{
    domain::{SortMode, StatusFilter, Task, TaskDomainError, TaskQuery},
    services::TaskStoreError,
};

fn check_titles(listed: &[Task], expected: &str) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    let wanted: Vec<&str> = expected.split(", ").collect();
    if actual != wanted {
        return Err(eyre::eyre!("expected {wanted:?}, listed {actual:?}"));
    }
    Ok(())
}

#[then(r#"the priority view lists "{titles}""#)]
fn priority_view_lists(world: &TaskOverviewWorld, titles: String) -> Result<(), eyre::Report> {
    let listed = world.store()?.list(&TaskQuery::new());
    check_titles(&listed, &titles)
}

#[then(r#"the deadline view lists "{titles}""#)]
fn deadline_view_lists(world: &TaskOverviewWorld, titles: String) -> Result<(), eyre::Report> {
    let listed = world
        .store()?
        .list(&TaskQuery::new().sorted_by(SortMode::Deadline));
    check_titles(&listed, &titles)
}

#[then(r#"the open view lists "{titles}""#)]
fn open_view_lists(world: &TaskOverviewWorld, titles: String) -> Result<(), eyre::Report> {
    let listed = world
        .store()?
        .list(&TaskQuery::new().with_status(StatusFilter::Open));
    check_titles(&listed, &titles)
}

#[then(r#"the badge for "{title}" reads "{text}""#)]
fn badge_reads(world: &TaskOverviewWorld, title: String, text: String) -> Result<(), eyre::Report> {
    let store = world.store()?;
    let id = world.task_id(&title)?;
    let task = store
        .get(id)
        .ok_or_else(|| eyre::eyre!("task {title:?} vanished"))?;
    let badge = store.deadline_badge(task).to_string();
    if badge != text {
        return Err(eyre::eyre!("expected badge {text:?}, found {badge:?}"));
    }
    Ok(())
}

#[then(r#"the calendar colour of "{title}" is "{hex}""#)]
fn calendar_colour_is(
    world: &TaskOverviewWorld,
    title: String,
    hex: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let events = world.store()?.calendar_events();
    let event = events
        .iter()
        .find(|event| event.task_id == id)
        .ok_or_else(|| eyre::eyre!("no calendar event for {title:?}"))?;
    if event.color.as_hex() != hex {
        return Err(eyre::eyre!(
            "expected colour {hex}, found {}",
            event.color.as_hex()
        ));
    }
    Ok(())
}

#[then("the last add fails because the title is empty")]
fn add_failed_empty_title(world: &TaskOverviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;
    if !matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected EmptyTitle error, got {result:?}"));
    }
    Ok(())
}

#[then("the last add fails because the priority is unknown")]
fn add_failed_unknown_priority(world: &TaskOverviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result"))?;
    if !matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::UnknownPriority(_)))
    ) {
        return Err(eyre::eyre!("expected UnknownPriority error, got {result:?}"));
    }
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskOverviewWorld) -> Result<(), eyre::Report> {
    let store = world.store()?;
    if !store.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", store.len()));
    }
    Ok(())
}
