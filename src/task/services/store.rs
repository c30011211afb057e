//! Task store: the single owner of a session's task collection.

use crate::config::TrackerConfig;
use crate::task::{
    adapters::file::JsonFileTaskPersistence,
    domain::{
        CalendarEvent, DeadlineBadge, Priority, Task, TaskDomainError, TaskId, TaskQuery,
        TaskTitle, calendar_events, today,
    },
    ports::{TaskPersistence, TaskPersistenceError},
    services::{AddTaskRequest, UpdateTaskRequest},
};
use chrono::{Days, NaiveDate};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed; the store is unchanged.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task has the given identifier; the store is unchanged.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Loading or saving failed. A failed save does not undo the in-memory
    /// mutation that preceded it.
    #[error(transparent)]
    Persistence(#[from] TaskPersistenceError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Ordered, in-memory task collection backed by a persistence port.
///
/// Each session owns one store. The collection is loaded once by
/// [`TaskStore::open`] and saved after every successful mutation; stored
/// order is always insertion order.
pub struct TaskStore<P, C>
where
    P: TaskPersistence,
    C: Clock,
{
    tasks: Vec<Task>,
    persistence: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> TaskStore<P, C>
where
    P: TaskPersistence,
    C: Clock,
{
    /// Opens a store by loading the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when loading fails or the
    /// loaded collection repeats an identifier.
    pub fn open(persistence: Arc<P>, clock: Arc<C>) -> TaskStoreResult<Self> {
        let tasks = persistence.load()?;
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(duplicate) = tasks.iter().find(|task| !seen.insert(task.id())) {
            return Err(TaskPersistenceError::corrupt(format!(
                "duplicate task identifier: {}",
                duplicate.id()
            ))
            .into());
        }
        tracing::debug!(count = tasks.len(), "opened task store");
        Ok(Self {
            tasks,
            persistence,
            clock,
        })
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the date the store's clock considers today.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today(&*self.clock)
    }

    /// Adds a new open task at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] for an empty title or an
    /// unrecognised priority, in which case nothing changes. Returns
    /// [`TaskStoreError::Persistence`] when the save fails; the task stays in
    /// the collection.
    pub fn add(&mut self, request: AddTaskRequest) -> TaskStoreResult<Task> {
        let fields = request.validate()?;
        let task = Task::new(fields.title, fields.priority, fields.deadline, &*self.clock)
            .with_details(fields.details);
        self.tasks.push(task.clone());
        tracing::info!(task_id = %task.id(), priority = %task.priority(), "task added");
        self.persist()?;
        Ok(task)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Applies a partial edit to an existing task.
    ///
    /// All fields are validated before any is applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when `id` is unknown and
    /// [`TaskStoreError::Validation`] when the new title is empty or the
    /// priority unrecognised; neither changes the store. Returns
    /// [`TaskStoreError::Persistence`] when the save fails; the edit stays
    /// applied.
    pub fn update(&mut self, id: TaskId, request: UpdateTaskRequest) -> TaskStoreResult<Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return Err(TaskStoreError::NotFound(id));
        };
        let changes = request.validate()?;
        task.apply(changes, &*self.clock);
        let updated = task.clone();
        tracing::info!(task_id = %id, "task updated");
        self.persist()?;
        Ok(updated)
    }

    /// Marks a task as completed or reopens it.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::update`].
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> TaskStoreResult<Task> {
        self.update(id, UpdateTaskRequest::new().with_completed(completed))
    }

    /// Removes a task.
    ///
    /// Returns `false` without saving when no task has this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the save fails; the task
    /// stays removed.
    pub fn delete(&mut self, id: TaskId) -> TaskStoreResult<bool> {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "delete skipped, task absent");
            return Ok(false);
        };
        self.tasks.remove(position);
        tracing::info!(task_id = %id, "task deleted");
        self.persist()?;
        Ok(true)
    }

    /// Returns the tasks selected and ordered by `query`.
    ///
    /// The stored collection is never modified.
    #[must_use]
    pub fn list(&self, query: &TaskQuery) -> Vec<Task> {
        query.apply(&self.tasks)
    }

    /// Projects `tasks` onto calendar events using today's date.
    #[must_use]
    pub fn to_calendar_events(&self, tasks: &[Task]) -> Vec<CalendarEvent> {
        calendar_events(tasks, self.today())
    }

    /// Projects the whole collection onto calendar events.
    #[must_use]
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.to_calendar_events(&self.tasks)
    }

    /// Returns the deadline badge for `task` as of today.
    #[must_use]
    pub fn deadline_badge(&self, task: &Task) -> DeadlineBadge {
        task.deadline_badge(self.today())
    }

    /// Adds the two starter tasks shown to a first-time user.
    ///
    /// Both tasks are saved together in a single write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the save fails; both
    /// tasks stay in the collection.
    pub fn seed_sample_tasks(&mut self) -> TaskStoreResult<Vec<Task>> {
        let presentation_due = self.today().checked_add_days(Days::new(4));
        let seeded = vec![
            Task::new(
                TaskTitle::new("Prepare important presentation")?,
                Priority::High,
                presentation_due,
                &*self.clock,
            ),
            Task::new(
                TaskTitle::new("Plan team meeting")?,
                Priority::Medium,
                None,
                &*self.clock,
            ),
        ];
        self.tasks.extend(seeded.iter().cloned());
        self.persist()?;
        Ok(seeded)
    }

    fn persist(&self) -> TaskStoreResult<()> {
        self.persistence
            .save(&self.tasks)
            .inspect_err(|err| tracing::warn!(error = %err, "saving tasks failed"))?;
        Ok(())
    }
}

impl<C> TaskStore<JsonFileTaskPersistence, C>
where
    C: Clock,
{
    /// Opens a JSON-file-backed store as described by `config`.
    ///
    /// When seeding is enabled and the data file does not exist yet, the
    /// starter tasks are added and saved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when loading or seeding fails.
    pub fn open_with_config(config: &TrackerConfig, clock: Arc<C>) -> TaskStoreResult<Self> {
        let persistence = JsonFileTaskPersistence::new(config.data_file.clone());
        let first_run = !persistence.exists();
        let mut store = Self::open(Arc::new(persistence), clock)?;
        if config.seed_sample_tasks && first_run {
            let seeded = store.seed_sample_tasks()?;
            tracing::info!(count = seeded.len(), "seeded sample tasks");
        }
        Ok(store)
    }
}
