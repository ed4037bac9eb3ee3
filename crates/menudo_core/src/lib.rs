//! Core domain logic for MenuDo, a quadrant task board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{ConfigError, ConfigResult, LogLevel, LoggingConfig};
pub use controller::draft_edit::{
    DraftAndEditController, DraftOutcome, EditOutcome, EditSession, EditStart, FocusTarget,
    ResignOutcome,
};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::quadrant::{ParseQuadrantError, Quadrant, QuadrantColor, QuadrantMap};
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use service::board_service::QuadrantBoard;
pub use store::task_store::{
    BoardSnapshot, QuadrantSnapshot, StoreError, StoreResult, TaskStore, TitleUpdate,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
