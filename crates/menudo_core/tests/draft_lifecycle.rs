use menudo_core::{DraftOutcome, FocusTarget, Quadrant, QuadrantBoard, ResignOutcome};

#[test]
fn submit_creates_trimmed_task_and_resets_draft() {
    let mut board = QuadrantBoard::new();
    board.on_draft_focus(Quadrant::UrgentImportant);
    board.on_draft_change(Quadrant::UrgentImportant, "  pay rent  ");

    let outcome = board.on_draft_submit(Quadrant::UrgentImportant);

    let task = match outcome {
        DraftOutcome::Created(task) => task,
        other => panic!("expected a created task, got {other:?}"),
    };
    assert_eq!(task.title, "pay rent");
    assert_eq!(board.draft_text(Quadrant::UrgentImportant), "");
    assert_eq!(board.focus(), None);
}

#[test]
fn whitespace_draft_is_discarded_on_submit_and_blur() {
    let mut board = QuadrantBoard::new();

    for text in ["", " ", "  ", "\n\t"] {
        board.on_draft_change(Quadrant::Neither, text);
        assert_eq!(board.on_draft_submit(Quadrant::Neither), DraftOutcome::Discarded);
        board.on_draft_change(Quadrant::Neither, text);
        assert_eq!(board.on_draft_blur(Quadrant::Neither), DraftOutcome::Discarded);
    }

    assert!(board.store().is_empty());
    assert_eq!(board.draft_text(Quadrant::Neither), "");
}

#[test]
fn double_submit_creates_at_most_one_task() {
    let mut board = QuadrantBoard::new();
    board.on_draft_change(Quadrant::ImportantNotUrgent, "book dentist");

    board.on_draft_submit(Quadrant::ImportantNotUrgent);
    let second = board.on_draft_submit(Quadrant::ImportantNotUrgent);

    assert_eq!(second, DraftOutcome::Discarded);
    assert_eq!(board.tasks_for(Quadrant::ImportantNotUrgent).count(), 1);
}

#[test]
fn submit_then_blur_from_same_keystroke_commits_once() {
    let mut board = QuadrantBoard::new();
    board.on_draft_focus(Quadrant::UrgentNotImportant);
    board.on_draft_change(Quadrant::UrgentNotImportant, "reply to email");

    board.on_draft_submit(Quadrant::UrgentNotImportant);
    board.on_draft_blur(Quadrant::UrgentNotImportant);

    assert_eq!(board.tasks_for(Quadrant::UrgentNotImportant).count(), 1);
}

#[test]
fn submitting_one_quadrant_leaves_other_drafts_alone() {
    let mut board = QuadrantBoard::new();
    board.on_draft_change(Quadrant::Neither, "four");

    assert_eq!(
        board.on_draft_submit(Quadrant::UrgentImportant),
        DraftOutcome::Discarded
    );

    assert_eq!(board.draft_text(Quadrant::Neither), "four");
    assert_eq!(board.focus(), Some(&FocusTarget::Draft(Quadrant::Neither)));
    assert!(board.store().is_empty());
}

#[test]
fn moving_focus_to_another_quadrant_commits_previous_draft() {
    let mut board = QuadrantBoard::new();
    board.on_draft_focus(Quadrant::UrgentImportant);
    board.on_draft_change(Quadrant::UrgentImportant, "fix prod");

    board.on_draft_focus(Quadrant::ImportantNotUrgent);

    let titles: Vec<_> = board
        .tasks_for(Quadrant::UrgentImportant)
        .map(|task| task.title.clone())
        .collect();
    assert_eq!(titles, vec!["fix prod".to_string()]);
    assert_eq!(
        board.focus(),
        Some(&FocusTarget::Draft(Quadrant::ImportantNotUrgent))
    );
}

#[test]
fn typing_then_resign_creates_task() {
    let mut board = QuadrantBoard::new();
    board.on_draft_change(Quadrant::UrgentImportant, "Write report");

    let outcome = board.on_resign_focus();

    assert!(matches!(
        outcome,
        ResignOutcome::Draft {
            quadrant: Quadrant::UrgentImportant,
            outcome: DraftOutcome::Created(_),
        }
    ));
    let titles: Vec<_> = board
        .tasks_for(Quadrant::UrgentImportant)
        .map(|task| task.title.clone())
        .collect();
    assert_eq!(titles, vec!["Write report".to_string()]);
    assert_eq!(board.draft_text(Quadrant::UrgentImportant), "");
    assert_eq!(board.on_resign_focus(), ResignOutcome::Idle);
}

#[test]
fn typing_into_another_quadrant_flushes_previous_draft() {
    let mut board = QuadrantBoard::new();
    board.on_draft_change(Quadrant::Neither, "first text");

    let released = board.on_draft_change(Quadrant::UrgentImportant, "second text");

    assert!(matches!(
        released,
        ResignOutcome::Draft {
            quadrant: Quadrant::Neither,
            outcome: DraftOutcome::Created(_),
        }
    ));
    assert_eq!(board.draft_text(Quadrant::Neither), "");
    assert_eq!(board.tasks_for(Quadrant::Neither).count(), 1);
    assert_eq!(
        board.focus(),
        Some(&FocusTarget::Draft(Quadrant::UrgentImportant))
    );

    board.on_resign_focus();
    assert_eq!(board.store().len(), 2);
}

#[test]
fn typing_while_editing_commits_the_edit_first() {
    let mut board = QuadrantBoard::new();
    let task = board.add_task("old title", Quadrant::Neither).unwrap();
    board.on_edit_start(task.id);
    board.on_edit_buffer_change("new title");

    board.on_draft_change(Quadrant::Neither, "fresh draft");

    assert_eq!(board.task(task.id).unwrap().title, "new title");
    assert_eq!(board.editing_task_id(), None);
    assert_eq!(board.draft_text(Quadrant::Neither), "fresh draft");
}
