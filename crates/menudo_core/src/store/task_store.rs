//! Task store and board snapshot.
//!
//! # Responsibility
//! - Hold the single ordered task collection.
//! - Produce per-quadrant views for the presentation layer.
//!
//! # Invariants
//! - `tasks_for(q)` yields exactly the tasks with `quadrant == q`, in
//!   insertion order.
//! - Titles are normalized on every write path and never become empty.
//! - Store logs carry ids and quadrant keys only, never titles.

use crate::model::quadrant::Quadrant;
use crate::model::task::{normalize_title, Task, TaskId, TaskValidationError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected by task validation (empty title after trim).
    InvalidArgument(TaskValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Result of a rename request. Renames never raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleUpdate {
    /// Title replaced with the trimmed input.
    Renamed,
    /// Input trimmed to nothing; previous title kept.
    EmptyTitleIgnored,
    /// No task with that id (already deleted).
    NotFound,
}

/// Ordered tasks of one quadrant, cloned for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantSnapshot {
    pub quadrant: Quadrant,
    pub tasks: Vec<Task>,
}

/// Whole-board view in row-major quadrant order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub quadrants: Vec<QuadrantSnapshot>,
}

impl BoardSnapshot {
    pub fn quadrant(&self, quadrant: Quadrant) -> Option<&QuadrantSnapshot> {
        self.quadrants.iter().find(|entry| entry.quadrant == quadrant)
    }
}

/// Sole owner of the task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new open task to the end of the collection.
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when `title` trims to empty.
    pub fn add(&mut self, title: &str, quadrant: Quadrant) -> StoreResult<Task> {
        let task = Task::new(title, quadrant)?;
        info!(
            "event=task_add module=store status=ok task_id={} quadrant={}",
            task.id, quadrant
        );
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flips completion. Returns the new state, or `None` when absent.
    pub fn toggle_completion(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.find_mut(id) else {
            debug!("event=task_toggle module=store status=skipped reason=not_found task_id={id}");
            return None;
        };
        task.is_completed = !task.is_completed;
        let completed = task.is_completed;
        info!("event=task_toggle module=store status=ok task_id={id} completed={completed}");
        Some(completed)
    }

    /// Removes the task if present. Idempotent.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=store status=skipped reason=not_found task_id={id}");
            return None;
        };
        // `Vec::remove` shifts the tail, keeping relative order.
        let removed = self.tasks.remove(position);
        info!(
            "event=task_delete module=store status=ok task_id={id} quadrant={}",
            removed.quadrant
        );
        Some(removed)
    }

    /// Replaces the title with the trimmed input.
    ///
    /// Empty input and absent ids are no-ops reported through `TitleUpdate`.
    pub fn update_title(&mut self, id: TaskId, raw_title: &str) -> TitleUpdate {
        let Some(task) = self.find_mut(id) else {
            debug!("event=task_rename module=store status=skipped reason=not_found task_id={id}");
            return TitleUpdate::NotFound;
        };
        match normalize_title(raw_title) {
            Ok(title) => {
                task.title = title;
                info!("event=task_rename module=store status=ok task_id={id}");
                TitleUpdate::Renamed
            }
            Err(_) => {
                debug!(
                    "event=task_rename module=store status=skipped reason=empty_title task_id={id}"
                );
                TitleUpdate::EmptyTitleIgnored
            }
        }
    }

    /// Lazily filters the live collection by quadrant, in insertion order.
    ///
    /// Each call starts a fresh pass over the collection.
    pub fn tasks_for(&self, quadrant: Quadrant) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.quadrant == quadrant)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Clones the board into per-quadrant lists for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            quadrants: Quadrant::ALL
                .into_iter()
                .map(|quadrant| QuadrantSnapshot {
                    quadrant,
                    tasks: self.tasks_for(quadrant).cloned().collect(),
                })
                .collect(),
        }
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TaskStore, TitleUpdate};
    use crate::model::quadrant::Quadrant;
    use crate::model::task::TaskValidationError;

    #[test]
    fn add_rejects_whitespace_title_without_mutation() {
        let mut store = TaskStore::new();
        let err = store.add(" \n ", Quadrant::Neither).unwrap_err();

        assert_eq!(
            err,
            StoreError::InvalidArgument(TaskValidationError::EmptyTitle)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn delete_keeps_relative_order_of_remaining_tasks() {
        let mut store = TaskStore::new();
        let first = store.add("a", Quadrant::UrgentImportant).unwrap();
        let second = store.add("b", Quadrant::UrgentImportant).unwrap();
        let third = store.add("c", Quadrant::UrgentImportant).unwrap();

        store.delete(second.id).unwrap();

        let ids: Vec<_> = store
            .tasks_for(Quadrant::UrgentImportant)
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn update_title_reports_absent_task() {
        let mut store = TaskStore::new();
        let task = store.add("gone", Quadrant::Neither).unwrap();
        store.delete(task.id);

        assert_eq!(store.update_title(task.id, "back"), TitleUpdate::NotFound);
    }
}
