//! Board use-case service.
//!
//! # Responsibility
//! - Compose one `TaskStore` with one `DraftAndEditController`.
//! - Expose the contract surface consumed by the presentation layer.
//!
//! # Invariants
//! - The board is constructed by the application root and passed by
//!   reference; there is no process-wide instance.
//! - Store state flows out through reads; the controller only reaches the
//!   store through the operations it invokes.

use crate::controller::draft_edit::{
    DraftAndEditController, DraftOutcome, EditOutcome, EditStart, FocusTarget, ResignOutcome,
};
use crate::model::quadrant::Quadrant;
use crate::model::task::{Task, TaskId};
use crate::store::task_store::{BoardSnapshot, StoreResult, TaskStore, TitleUpdate};

/// Quadrant board: task store plus transient entry state.
#[derive(Debug, Default)]
pub struct QuadrantBoard {
    store: TaskStore,
    controller: DraftAndEditController,
}

impl QuadrantBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn controller(&self) -> &DraftAndEditController {
        &self.controller
    }

    pub fn add_task(&mut self, title: &str, quadrant: Quadrant) -> StoreResult<Task> {
        self.store.add(title, quadrant)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        self.store.toggle_completion(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        self.store.delete(id)
    }

    pub fn rename_task(&mut self, id: TaskId, new_title: &str) -> TitleUpdate {
        self.store.update_title(id, new_title)
    }

    pub fn tasks_for(&self, quadrant: Quadrant) -> impl Iterator<Item = &Task> + '_ {
        self.store.tasks_for(quadrant)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    pub fn draft_text(&self, quadrant: Quadrant) -> &str {
        self.controller.draft_text(quadrant)
    }

    pub fn editing_task_id(&self) -> Option<TaskId> {
        self.controller.editing_task_id()
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.controller.edit_buffer()
    }

    pub fn focus(&self) -> Option<&FocusTarget> {
        self.controller.focus()
    }

    pub fn is_editable(&self, id: TaskId) -> bool {
        self.controller.is_editable(id)
    }

    pub fn on_draft_focus(&mut self, quadrant: Quadrant) -> ResignOutcome {
        self.controller.on_draft_focus(&mut self.store, quadrant)
    }

    pub fn on_draft_change(
        &mut self,
        quadrant: Quadrant,
        text: impl Into<String>,
    ) -> ResignOutcome {
        self.controller
            .on_draft_change(&mut self.store, quadrant, text)
    }

    pub fn on_draft_submit(&mut self, quadrant: Quadrant) -> DraftOutcome {
        self.controller.on_draft_submit(&mut self.store, quadrant)
    }

    pub fn on_draft_blur(&mut self, quadrant: Quadrant) -> DraftOutcome {
        self.controller.on_draft_blur(&mut self.store, quadrant)
    }

    pub fn on_edit_start(&mut self, id: TaskId) -> EditStart {
        self.controller.on_edit_start(&mut self.store, id)
    }

    pub fn on_edit_buffer_change(&mut self, text: impl Into<String>) -> bool {
        self.controller.on_edit_buffer_change(text)
    }

    pub fn on_edit_commit(&mut self) -> EditOutcome {
        self.controller.on_edit_commit(&mut self.store)
    }

    pub fn on_edit_blur(&mut self, id: TaskId) -> EditOutcome {
        self.controller.on_edit_blur(&mut self.store, id)
    }

    pub fn on_resign_focus(&mut self) -> ResignOutcome {
        self.controller.on_resign_focus(&mut self.store)
    }
}
