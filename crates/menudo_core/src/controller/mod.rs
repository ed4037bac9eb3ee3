//! Transient text-entry state driven by presentation events.
//!
//! # Responsibility
//! - Hold per-quadrant drafts and the single inline-edit session.
//! - Decide when a draft or edit commits into `TaskStore`.
//!
//! # Invariants
//! - At most one text-entry context owns focus at any time.
//! - Every focus loss runs exactly one commit-or-discard evaluation.

pub mod draft_edit;
