//! Draft and inline-edit lifecycle.
//!
//! # Responsibility
//! - Buffer typed-but-unsubmitted text for each quadrant.
//! - Track which task, if any, is being renamed and its edit buffer.
//! - Translate submit/blur/resign events into store mutations.
//!
//! # Invariants
//! - `focus` is the only record of the active context, so a draft field and
//!   an edit field can never both be active.
//! - A focus-gain event first runs the blur transition of the previous owner.
//! - An edit commits at most once; stale blur signals for a task that is no
//!   longer being edited never reach the store.
//! - Draft text is reset to `""` on every submit, whether or not a task was
//!   created.

use crate::model::quadrant::{Quadrant, QuadrantMap};
use crate::model::task::{normalize_title, Task, TaskId};
use crate::store::task_store::{TaskStore, TitleUpdate};
use log::{debug, warn};

/// Inline rename in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub buffer: String,
}

/// Owner of text-entry focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// Compose field of a quadrant.
    Draft(Quadrant),
    /// Edit field of one task.
    Edit(EditSession),
}

/// Result of a draft submit or blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    Created(Task),
    /// Draft trimmed to nothing; no task created.
    Discarded,
}

/// Result of an edit commit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Committed { task_id: TaskId, update: TitleUpdate },
    /// No matching edit session; the store was not touched.
    NotEditing,
}

/// Result of an edit start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStart {
    Started,
    /// The task already owns the edit field; buffer kept.
    AlreadyEditing,
    /// The task no longer exists; focus unchanged.
    TaskMissing,
}

/// What a focus release resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResignOutcome {
    /// Nothing held focus.
    Idle,
    Draft {
        quadrant: Quadrant,
        outcome: DraftOutcome,
    },
    Edit(EditOutcome),
}

/// Per-quadrant drafts plus the global edit pointer.
#[derive(Debug, Default)]
pub struct DraftAndEditController {
    drafts: QuadrantMap<String>,
    focus: Option<FocusTarget>,
}

impl DraftAndEditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    pub fn draft_text(&self, quadrant: Quadrant) -> &str {
        &self.drafts[quadrant]
    }

    pub fn editing_task_id(&self) -> Option<TaskId> {
        match &self.focus {
            Some(FocusTarget::Edit(session)) => Some(session.task_id),
            _ => None,
        }
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.focus {
            Some(FocusTarget::Edit(session)) => Some(session.buffer.as_str()),
            _ => None,
        }
    }

    /// Whether toggle/delete controls for `task_id` may be enabled.
    pub fn is_editable(&self, task_id: TaskId) -> bool {
        self.editing_task_id() != Some(task_id)
    }

    /// Gives focus to the compose field of `quadrant`.
    ///
    /// Returns what the previous focus owner resolved to.
    pub fn on_draft_focus(&mut self, store: &mut TaskStore, quadrant: Quadrant) -> ResignOutcome {
        if self.focus == Some(FocusTarget::Draft(quadrant)) {
            return ResignOutcome::Idle;
        }
        let released = self.release_focus(store);
        self.focus = Some(FocusTarget::Draft(quadrant));
        debug!("event=draft_focus module=controller status=ok quadrant={quadrant}");
        released
    }

    /// Replaces the draft of `quadrant`.
    ///
    /// Typing implies focus: if `quadrant` does not own focus yet, the
    /// previous owner is released first and its outcome returned.
    pub fn on_draft_change(
        &mut self,
        store: &mut TaskStore,
        quadrant: Quadrant,
        text: impl Into<String>,
    ) -> ResignOutcome {
        let released = self.on_draft_focus(store, quadrant);
        self.drafts[quadrant] = text.into();
        released
    }

    /// Commits the draft of `quadrant` (submit key).
    pub fn on_draft_submit(&mut self, store: &mut TaskStore, quadrant: Quadrant) -> DraftOutcome {
        self.commit_draft(store, quadrant)
    }

    /// Commits the draft of `quadrant` because its field lost focus.
    pub fn on_draft_blur(&mut self, store: &mut TaskStore, quadrant: Quadrant) -> DraftOutcome {
        self.commit_draft(store, quadrant)
    }

    /// Opens the edit field for `task_id`, seeding the buffer with its title.
    ///
    /// Any other focus owner is released first, so a pending draft or a
    /// different task's edit commits before this session begins.
    pub fn on_edit_start(&mut self, store: &mut TaskStore, task_id: TaskId) -> EditStart {
        if self.editing_task_id() == Some(task_id) {
            return EditStart::AlreadyEditing;
        }
        if store.get(task_id).is_none() {
            debug!(
                "event=edit_start module=controller status=skipped reason=not_found task_id={task_id}"
            );
            return EditStart::TaskMissing;
        }

        self.release_focus(store);
        let Some(task) = store.get(task_id) else {
            return EditStart::TaskMissing;
        };
        self.focus = Some(FocusTarget::Edit(EditSession {
            task_id,
            buffer: task.title.clone(),
        }));
        debug!("event=edit_start module=controller status=ok task_id={task_id}");
        EditStart::Started
    }

    /// Replaces the edit buffer. Returns `false` when no edit is active.
    pub fn on_edit_buffer_change(&mut self, text: impl Into<String>) -> bool {
        match &mut self.focus {
            Some(FocusTarget::Edit(session)) => {
                session.buffer = text.into();
                true
            }
            _ => false,
        }
    }

    /// Applies the edit buffer to the task being edited and ends the session.
    pub fn on_edit_commit(&mut self, store: &mut TaskStore) -> EditOutcome {
        let session = match self.focus.take() {
            Some(FocusTarget::Edit(session)) => session,
            other => {
                self.focus = other;
                return EditOutcome::NotEditing;
            }
        };

        let update = store.update_title(session.task_id, &session.buffer);
        if update == TitleUpdate::NotFound {
            warn!(
                "event=edit_commit module=controller status=skipped reason=task_deleted task_id={}",
                session.task_id
            );
        } else {
            debug!(
                "event=edit_commit module=controller status=ok task_id={}",
                session.task_id
            );
        }
        EditOutcome::Committed {
            task_id: session.task_id,
            update,
        }
    }

    /// Edit field of `task_id` lost focus.
    ///
    /// Commits only if `task_id` is still the task being edited.
    pub fn on_edit_blur(&mut self, store: &mut TaskStore, task_id: TaskId) -> EditOutcome {
        if self.editing_task_id() != Some(task_id) {
            debug!(
                "event=edit_blur module=controller status=skipped reason=stale task_id={task_id}"
            );
            return EditOutcome::NotEditing;
        }
        self.on_edit_commit(store)
    }

    /// Click outside every interactive field.
    pub fn on_resign_focus(&mut self, store: &mut TaskStore) -> ResignOutcome {
        self.release_focus(store)
    }

    fn release_focus(&mut self, store: &mut TaskStore) -> ResignOutcome {
        match &self.focus {
            None => ResignOutcome::Idle,
            Some(FocusTarget::Draft(quadrant)) => {
                let quadrant = *quadrant;
                let outcome = self.commit_draft(store, quadrant);
                ResignOutcome::Draft { quadrant, outcome }
            }
            Some(FocusTarget::Edit(_)) => ResignOutcome::Edit(self.on_edit_commit(store)),
        }
    }

    fn commit_draft(&mut self, store: &mut TaskStore, quadrant: Quadrant) -> DraftOutcome {
        let draft = std::mem::take(&mut self.drafts[quadrant]);
        if self.focus == Some(FocusTarget::Draft(quadrant)) {
            self.focus = None;
        }

        let Ok(title) = normalize_title(&draft) else {
            debug!(
                "event=draft_commit module=controller status=skipped reason=empty quadrant={quadrant}"
            );
            return DraftOutcome::Discarded;
        };
        match store.add(&title, quadrant) {
            Ok(task) => DraftOutcome::Created(task),
            Err(err) => {
                warn!(
                    "event=draft_commit module=controller status=error quadrant={quadrant} error={err}"
                );
                DraftOutcome::Discarded
            }
        }
    }
}
