use menudo_core::{
    DraftOutcome, EditOutcome, EditStart, FocusTarget, Quadrant, QuadrantBoard, ResignOutcome,
    TitleUpdate,
};

#[test]
fn start_edit_seeds_buffer_and_gates_only_that_task() {
    let mut board = QuadrantBoard::new();
    let target = board.add_task("target", Quadrant::UrgentImportant).unwrap();
    let other = board.add_task("other", Quadrant::Neither).unwrap();

    assert_eq!(board.on_edit_start(target.id), EditStart::Started);

    assert_eq!(board.editing_task_id(), Some(target.id));
    assert_eq!(board.edit_buffer(), Some("target"));
    assert!(!board.is_editable(target.id));
    assert!(board.is_editable(other.id));

    board.on_edit_commit();
    assert!(board.is_editable(target.id));
    assert_eq!(board.editing_task_id(), None);
}

#[test]
fn commit_applies_buffer_and_keeps_completion() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("draft title", Quadrant::ImportantNotUrgent).unwrap();
    board.toggle_task(task.id);

    board.on_edit_start(task.id);
    assert!(board.on_edit_buffer_change("  final title "));
    let outcome = board.on_edit_commit();

    assert_eq!(
        outcome,
        EditOutcome::Committed {
            task_id: task.id,
            update: TitleUpdate::Renamed,
        }
    );
    let loaded = board.task(task.id).unwrap();
    assert_eq!(loaded.title, "final title");
    assert!(loaded.is_completed);
}

#[test]
fn empty_edit_buffer_keeps_previous_title() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("keep me", Quadrant::Neither).unwrap();

    board.on_edit_start(task.id);
    board.on_edit_buffer_change("   ");
    let outcome = board.on_edit_commit();

    assert_eq!(
        outcome,
        EditOutcome::Committed {
            task_id: task.id,
            update: TitleUpdate::EmptyTitleIgnored,
        }
    );
    assert_eq!(board.task(task.id).unwrap().title, "keep me");
    assert_eq!(board.editing_task_id(), None);
}

#[test]
fn repeated_blur_after_commit_does_not_touch_store() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("before", Quadrant::UrgentImportant).unwrap();

    board.on_edit_start(task.id);
    board.on_edit_buffer_change("after");
    assert!(matches!(
        board.on_edit_blur(task.id),
        EditOutcome::Committed { .. }
    ));

    // A later rename must survive stale blur signals.
    board.rename_task(task.id, "renamed elsewhere");
    assert_eq!(board.on_edit_blur(task.id), EditOutcome::NotEditing);
    assert_eq!(board.on_edit_commit(), EditOutcome::NotEditing);
    assert_eq!(board.task(task.id).unwrap().title, "renamed elsewhere");
}

#[test]
fn switching_edit_target_commits_first_task_to_itself() {
    let mut board = QuadrantBoard::new();
    let task_a = board.add_task("alpha", Quadrant::UrgentImportant).unwrap();
    let task_b = board.add_task("beta", Quadrant::UrgentImportant).unwrap();

    board.on_edit_start(task_a.id);
    board.on_edit_buffer_change("alpha edited");
    assert_eq!(board.on_edit_start(task_b.id), EditStart::Started);

    assert_eq!(board.editing_task_id(), Some(task_b.id));
    assert_eq!(board.edit_buffer(), Some("beta"));
    assert_eq!(board.task(task_a.id).unwrap().title, "alpha edited");
    assert_eq!(board.task(task_b.id).unwrap().title, "beta");

    // Late blur for A must not commit B's session.
    assert_eq!(board.on_edit_blur(task_a.id), EditOutcome::NotEditing);
    assert_eq!(board.editing_task_id(), Some(task_b.id));

    board.on_edit_commit();
    assert_eq!(board.task(task_b.id).unwrap().title, "beta");
}

#[test]
fn starting_same_edit_twice_keeps_buffer() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("same", Quadrant::Neither).unwrap();

    board.on_edit_start(task.id);
    board.on_edit_buffer_change("typing");
    assert_eq!(board.on_edit_start(task.id), EditStart::AlreadyEditing);
    assert_eq!(board.edit_buffer(), Some("typing"));
}

#[test]
fn start_edit_on_missing_task_keeps_current_focus() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("gone", Quadrant::Neither).unwrap();
    board.delete_task(task.id);
    board.on_draft_focus(Quadrant::UrgentImportant);
    board.on_draft_change(Quadrant::UrgentImportant, "pending");

    assert_eq!(board.on_edit_start(task.id), EditStart::TaskMissing);
    assert_eq!(
        board.focus(),
        Some(&FocusTarget::Draft(Quadrant::UrgentImportant))
    );
    assert_eq!(board.draft_text(Quadrant::UrgentImportant), "pending");
}

#[test]
fn starting_edit_flushes_focused_draft() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("existing", Quadrant::Neither).unwrap();
    board.on_draft_focus(Quadrant::Neither);
    board.on_draft_change(Quadrant::Neither, "new from draft");

    board.on_edit_start(task.id);

    assert_eq!(board.tasks_for(Quadrant::Neither).count(), 2);
    assert_eq!(board.draft_text(Quadrant::Neither), "");
    assert_eq!(board.editing_task_id(), Some(task.id));
}

#[test]
fn focusing_a_draft_commits_active_edit() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("old", Quadrant::UrgentNotImportant).unwrap();
    board.on_edit_start(task.id);
    board.on_edit_buffer_change("new");

    let released = board.on_draft_focus(Quadrant::UrgentNotImportant);

    assert!(matches!(
        released,
        ResignOutcome::Edit(EditOutcome::Committed { .. })
    ));
    assert_eq!(board.task(task.id).unwrap().title, "new");
    assert_eq!(board.editing_task_id(), None);
}

#[test]
fn resign_commits_edit_of_deleted_task_as_noop() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("racy", Quadrant::UrgentImportant).unwrap();
    board.on_edit_start(task.id);
    board.on_edit_buffer_change("too late");
    board.delete_task(task.id);

    let outcome = board.on_resign_focus();

    assert_eq!(
        outcome,
        ResignOutcome::Edit(EditOutcome::Committed {
            task_id: task.id,
            update: TitleUpdate::NotFound,
        })
    );
    assert!(board.store().is_empty());
}

#[test]
fn buffer_change_without_edit_is_ignored() {
    let mut board = QuadrantBoard::new();
    assert!(!board.on_edit_buffer_change("orphan"));
    assert_eq!(board.edit_buffer(), None);
    assert_eq!(board.on_draft_submit(Quadrant::Neither), DraftOutcome::Discarded);
}
