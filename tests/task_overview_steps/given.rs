//! Given steps for task overview BDD scenarios.

use super::world::TaskOverviewWorld;
use chrono::{Days, NaiveDate};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::services::AddTaskRequest;

#[given("today is {day}")]
fn today_is(world: &mut TaskOverviewWorld, day: String) -> Result<(), eyre::Report> {
    world.today = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .wrap_err_with(|| format!("parse scenario date {day:?}"))?;
    Ok(())
}

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskOverviewWorld) -> Result<(), eyre::Report> {
    world.open_store()
}

#[given(r#"the task "{title}" with priority "{priority}" due in {days:u64} days"#)]
fn existing_task_due_in(
    world: &mut TaskOverviewWorld,
    title: String,
    priority: String,
    days: u64,
) -> Result<(), eyre::Report> {
    let deadline = world
        .today
        .checked_add_days(Days::new(days))
        .ok_or_else(|| eyre::eyre!("deadline out of range"))?;
    world
        .store_mut()?
        .add(AddTaskRequest::new(title, priority).with_deadline(deadline))
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
