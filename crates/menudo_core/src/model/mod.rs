//! Domain model for the quadrant task board.
//!
//! # Responsibility
//! - Define the fixed quadrant configuration and the task record.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - A task title is never empty after trimming.

pub mod quadrant;
pub mod task;
