//! JSON-file implementation of the task persistence port.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};

use super::models::{DOCUMENT_VERSION, TaskDocument, TaskRecord};
use crate::fs_utils;
use crate::task::{
    domain::{PersistedTaskData, Priority, Task, TaskDetails, TaskId, TaskTitle},
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};

/// Task persistence backed by a single JSON document on disk.
///
/// The parent directory must exist before the first save. Saves go through a
/// staging file in the same directory, so a failed write leaves the previous
/// document intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileTaskPersistence {
    path: Utf8PathBuf,
}

impl JsonFileTaskPersistence {
    /// Creates a backend for the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns whether the document exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs_utils::open_parent_dir(&self.path)
            .is_ok_and(|(dir, file_name)| dir.metadata(file_name).is_ok())
    }
}

impl TaskPersistence for JsonFileTaskPersistence {
    fn load(&self) -> TaskPersistenceResult<Vec<Task>> {
        let Some(contents) =
            fs_utils::read_optional(&self.path).map_err(TaskPersistenceError::backend)?
        else {
            tracing::debug!(path = %self.path, "task document missing, starting empty");
            return Ok(Vec::new());
        };

        let document: TaskDocument = serde_json::from_str(&contents)
            .map_err(|err| TaskPersistenceError::corrupt(format!("{}: {err}", self.path)))?;
        if document.version != DOCUMENT_VERSION {
            return Err(TaskPersistenceError::corrupt(format!(
                "{}: unsupported document version {}",
                self.path, document.version
            )));
        }

        let mut seen = HashSet::with_capacity(document.tasks.len());
        let mut tasks = Vec::with_capacity(document.tasks.len());
        for record in document.tasks {
            let task = record_to_task(record)?;
            if !seen.insert(task.id()) {
                return Err(TaskPersistenceError::corrupt(format!(
                    "duplicate task identifier: {}",
                    task.id()
                )));
            }
            tasks.push(task);
        }

        tracing::debug!(path = %self.path, count = tasks.len(), "loaded task document");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()> {
        let document = TaskDocument {
            version: DOCUMENT_VERSION,
            tasks: tasks.iter().map(task_to_record).collect(),
        };
        let encoded =
            serde_json::to_vec_pretty(&document).map_err(TaskPersistenceError::backend)?;
        fs_utils::write_atomic(&self.path, &encoded).map_err(TaskPersistenceError::backend)?;
        tracing::debug!(path = %self.path, count = tasks.len(), "saved task document");
        Ok(())
    }
}

fn record_to_task(record: TaskRecord) -> TaskPersistenceResult<Task> {
    let TaskRecord {
        id,
        title: raw_title,
        priority_level,
        priority_label,
        completed,
        deadline,
        assignees,
        estimate,
        size,
        created_at,
        updated_at,
    } = record;

    let title = TaskTitle::new(raw_title)
        .map_err(|err| TaskPersistenceError::corrupt(format!("task {id}: {err}")))?;
    let priority = Priority::from_parts(priority_level, &priority_label)
        .map_err(|err| TaskPersistenceError::corrupt(format!("task {id}: {err}")))?;
    // Hand-written rows may omit timestamps entirely.
    let created = created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        priority,
        completed,
        deadline,
        details: TaskDetails {
            assignees,
            estimate,
            size,
        },
        created_at: created,
        updated_at: updated_at.unwrap_or(created),
    }))
}

fn task_to_record(task: &Task) -> TaskRecord {
    let details = task.details();
    TaskRecord {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        priority_level: task.priority().rank(),
        priority_label: task.priority().label().to_owned(),
        completed: task.is_completed(),
        deadline: task.deadline(),
        assignees: details.assignees.clone(),
        estimate: details.estimate.clone(),
        size: details.size.clone(),
        created_at: Some(task.created_at()),
        updated_at: Some(task.updated_at()),
    }
}
