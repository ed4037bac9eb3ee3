//! Task domain model.
//!
//! # Responsibility
//! - Define the task record owned by `TaskStore`.
//! - Own title normalization shared by create and rename paths.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - `quadrant` is assigned at creation and never changes.
//! - `title` is trimmed and non-empty.

use crate::model::quadrant::Quadrant;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Validation errors for task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title was empty or whitespace-only.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

/// One actionable item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub is_completed: bool,
    pub quadrant: Quadrant,
}

impl Task {
    /// Creates an open task with a fresh v4 id.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when `title` trims to nothing.
    pub fn new(title: &str, quadrant: Quadrant) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: normalize_title(title)?,
            is_completed: false,
            quadrant,
        })
    }
}

/// Trims surrounding whitespace and newlines, rejecting empty results.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, TaskValidationError};

    #[test]
    fn normalize_title_trims_newlines_and_spaces() {
        assert_eq!(normalize_title("\n  ship it \t").unwrap(), "ship it");
    }

    #[test]
    fn normalize_title_rejects_whitespace_only() {
        assert_eq!(
            normalize_title(" \n\t ").unwrap_err(),
            TaskValidationError::EmptyTitle
        );
    }
}
