//! FFI board API for the menu-bar presentation layer.
//!
//! # Responsibility
//! - Expose the board contract surface to the UI through FRB.
//! - Translate string ids and quadrant keys into core types.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every board operation runs under the session's single lock.
//! - The host owns the `BoardSession` lifetime; there is no global board.

use log::warn;
use menudo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, DraftOutcome,
    EditOutcome, EditStart, LoggingConfig, Quadrant, QuadrantBoard, ResignOutcome, Task, TaskId,
    TitleUpdate,
};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let config = match LoggingConfig::new(level.as_str(), log_dir.as_str()) {
        Ok(config) => config,
        Err(err) => return err.to_string(),
    };
    match init_logging_inner(&config) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Static description of one quadrant cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantInfo {
    /// Stable key (`urgent_important|important_not_urgent|urgent_not_important|neither`).
    pub key: String,
    pub title: String,
    /// `#rrggbb`.
    pub color_hex: String,
    pub row: u32,
    pub column: u32,
}

/// Fixed quadrant configuration in row-major order.
#[flutter_rust_bridge::frb(sync)]
pub fn quadrants() -> Vec<QuadrantInfo> {
    Quadrant::ALL
        .into_iter()
        .map(|quadrant| {
            let (row, column) = quadrant.grid_position();
            QuadrantInfo {
                key: quadrant.key().to_string(),
                title: quadrant.title().to_string(),
                color_hex: quadrant.color().hex(),
                row: row as u32,
                column: column as u32,
            }
        })
        .collect()
}

/// Task row as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub title: String,
    pub is_completed: bool,
    /// `false` while this task is being edited; gates toggle/delete controls.
    pub is_editable: bool,
}

/// Ordered rows of one quadrant plus its compose-field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantView {
    pub key: String,
    pub draft_text: String,
    pub tasks: Vec<TaskItem>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the request was accepted.
    pub ok: bool,
    /// Task affected or created, when one exists.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id: task_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Host-owned board handle.
///
/// Created once by the application root and kept alive for the window's
/// lifetime.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct BoardSession {
    board: Mutex<QuadrantBoard>,
}

impl BoardSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one quadrant.
    #[flutter_rust_bridge::frb(sync)]
    pub fn quadrant_view(&self, quadrant_key: String) -> Option<QuadrantView> {
        let quadrant = parse_quadrant(&quadrant_key).ok()?;
        let board = self.lock();
        Some(render_quadrant(&board, quadrant))
    }

    /// Renders every quadrant in row-major order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn board_view(&self) -> Vec<QuadrantView> {
        let board = self.lock();
        Quadrant::ALL
            .into_iter()
            .map(|quadrant| render_quadrant(&board, quadrant))
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&self, title: String, quadrant_key: String) -> BoardActionResponse {
        let quadrant = match parse_quadrant(&quadrant_key) {
            Ok(quadrant) => quadrant,
            Err(response) => return response,
        };
        match self.lock().add_task(&title, quadrant) {
            Ok(task) => BoardActionResponse::success("Task created.", Some(task.id)),
            Err(err) => BoardActionResponse::failure(format!("add_task failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&self, task_id: String) -> BoardActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.lock().toggle_task(id) {
            Some(true) => BoardActionResponse::success("Task completed.", Some(id)),
            Some(false) => BoardActionResponse::success("Task reopened.", Some(id)),
            None => BoardActionResponse::success("Task no longer exists.", None),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&self, task_id: String) -> BoardActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.lock().delete_task(id) {
            Some(_) => BoardActionResponse::success("Task deleted.", Some(id)),
            None => BoardActionResponse::success("Task no longer exists.", None),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn rename_task(&self, task_id: String, new_title: String) -> BoardActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        title_update_response(self.lock().rename_task(id, &new_title), id)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn is_editable(&self, task_id: String) -> bool {
        match Uuid::parse_str(task_id.trim()) {
            Ok(id) => self.lock().is_editable(id),
            Err(_) => true,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_draft_focus(&self, quadrant_key: String) -> BoardActionResponse {
        let quadrant = match parse_quadrant(&quadrant_key) {
            Ok(quadrant) => quadrant,
            Err(response) => return response,
        };
        resign_response(self.lock().on_draft_focus(quadrant))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_draft_change(&self, quadrant_key: String, text: String) -> BoardActionResponse {
        let quadrant = match parse_quadrant(&quadrant_key) {
            Ok(quadrant) => quadrant,
            Err(response) => return response,
        };
        self.lock().on_draft_change(quadrant, text);
        BoardActionResponse::success("Draft updated.", None)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_draft_submit(&self, quadrant_key: String) -> BoardActionResponse {
        let quadrant = match parse_quadrant(&quadrant_key) {
            Ok(quadrant) => quadrant,
            Err(response) => return response,
        };
        draft_response(self.lock().on_draft_submit(quadrant))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_draft_blur(&self, quadrant_key: String) -> BoardActionResponse {
        let quadrant = match parse_quadrant(&quadrant_key) {
            Ok(quadrant) => quadrant,
            Err(response) => return response,
        };
        draft_response(self.lock().on_draft_blur(quadrant))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_edit_start(&self, task_id: String) -> BoardActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.lock().on_edit_start(id) {
            EditStart::Started => BoardActionResponse::success("Editing task.", Some(id)),
            EditStart::AlreadyEditing => {
                BoardActionResponse::success("Task already being edited.", Some(id))
            }
            EditStart::TaskMissing => BoardActionResponse::failure("Task no longer exists."),
        }
    }

    /// Returns the current edit buffer, or `None` when no task is being edited.
    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_buffer(&self) -> Option<String> {
        self.lock().edit_buffer().map(str::to_string)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_edit_buffer_change(&self, text: String) -> BoardActionResponse {
        if self.lock().on_edit_buffer_change(text) {
            BoardActionResponse::success("Edit buffer updated.", None)
        } else {
            BoardActionResponse::failure("No task is being edited.")
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_edit_commit(&self) -> BoardActionResponse {
        edit_response(self.lock().on_edit_commit())
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_edit_blur(&self, task_id: String) -> BoardActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        edit_response(self.lock().on_edit_blur(id))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn on_resign_focus(&self) -> BoardActionResponse {
        resign_response(self.lock().on_resign_focus())
    }

    fn lock(&self) -> MutexGuard<'_, QuadrantBoard> {
        // Board mutations are single writes; a poisoned board is still consistent.
        self.board.lock().unwrap_or_else(|poisoned| {
            warn!("event=board_lock module=ffi status=recovered reason=poisoned");
            poisoned.into_inner()
        })
    }
}

fn render_quadrant(board: &QuadrantBoard, quadrant: Quadrant) -> QuadrantView {
    QuadrantView {
        key: quadrant.key().to_string(),
        draft_text: board.draft_text(quadrant).to_string(),
        tasks: board
            .tasks_for(quadrant)
            .map(|task| to_task_item(board, task))
            .collect(),
    }
}

fn to_task_item(board: &QuadrantBoard, task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        title: task.title.clone(),
        is_completed: task.is_completed,
        is_editable: board.is_editable(task.id),
    }
}

fn parse_quadrant(raw: &str) -> Result<Quadrant, BoardActionResponse> {
    raw.parse::<Quadrant>()
        .map_err(|err| BoardActionResponse::failure(err.to_string()))
}

fn parse_task_id(raw: &str) -> Result<TaskId, BoardActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| BoardActionResponse::failure(format!("invalid task id `{}`", raw.trim())))
}

fn draft_response(outcome: DraftOutcome) -> BoardActionResponse {
    match outcome {
        DraftOutcome::Created(task) => BoardActionResponse::success("Task created.", Some(task.id)),
        DraftOutcome::Discarded => BoardActionResponse::success("Empty draft discarded.", None),
    }
}

fn edit_response(outcome: EditOutcome) -> BoardActionResponse {
    match outcome {
        EditOutcome::Committed { task_id, update } => title_update_response(update, task_id),
        EditOutcome::NotEditing => BoardActionResponse::success("Nothing to commit.", None),
    }
}

fn resign_response(outcome: ResignOutcome) -> BoardActionResponse {
    match outcome {
        ResignOutcome::Idle => BoardActionResponse::success("Nothing to commit.", None),
        ResignOutcome::Draft { outcome, .. } => draft_response(outcome),
        ResignOutcome::Edit(outcome) => edit_response(outcome),
    }
}

fn title_update_response(update: TitleUpdate, id: TaskId) -> BoardActionResponse {
    match update {
        TitleUpdate::Renamed => BoardActionResponse::success("Task renamed.", Some(id)),
        TitleUpdate::EmptyTitleIgnored => {
            BoardActionResponse::success("Empty title ignored; previous title kept.", Some(id))
        }
        TitleUpdate::NotFound => BoardActionResponse::success("Task no longer exists.", None),
    }
}
