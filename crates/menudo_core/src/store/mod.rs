//! Authoritative in-memory task collection.
//!
//! # Responsibility
//! - Own every task created on the board.
//! - Expose create/toggle/delete/rename plus quadrant-filtered reads.
//!
//! # Invariants
//! - Collection order is insertion order; deletion never reorders the rest.
//! - Operations on absent ids are silent no-ops.

pub mod task_store;
