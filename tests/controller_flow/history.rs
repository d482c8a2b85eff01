use glam::Vec3;
use hair_card_editor::AppIntent;

use super::{card_names, click_model, first_id, select, send, state_with_model};

#[test]
fn test_n_placements_then_n_undos_unwind_to_init() {
    let (mut controller, mut state) = state_with_model();

    for i in 0..4 {
        click_model(&mut controller, &mut state, Vec3::new(0.1 * i as f32, 0.5, 0.0), Vec3::Y);
    }
    assert_eq!(state.cards.len(), 4);
    assert_eq!(state.history.len(), 5);

    for _ in 0..4 {
        send(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    assert!(state.cards.is_empty());
    assert!(!state.can_undo());
    assert_eq!(state.history.cursor(), 0);

    // Cursor bleibt bei 0 stehen
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.history.cursor(), 0);
    assert!(state.cards.is_empty());
}

#[test]
fn test_new_push_after_undo_truncates_redo_branch() {
    let (mut controller, mut state) = state_with_model();

    for x in [0.1, 0.2, 0.3] {
        click_model(&mut controller, &mut state, Vec3::new(x, 0.5, 0.0), Vec3::Y);
    }
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    click_model(&mut controller, &mut state, Vec3::new(-0.2, 0.5, 0.0), Vec3::Y);
    assert!(!state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.cards.len(), 3);
    let newest = state
        .cards
        .iter()
        .last()
        .map(|c| c.transform().position.x)
        .expect("Card erwartet");
    assert!((newest + 0.2).abs() < 1e-6, "alter dritter Eintrag darf nicht zurückkehren");
}

#[test]
fn test_redo_restores_undone_placement() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    let before = card_names(&state);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.cards.len(), 1);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert_eq!(card_names(&state), before);
    assert!(!state.can_redo());
}

#[test]
fn test_undo_clears_selection_and_handles() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    let second = state.cards.ids()[1];
    select(&mut controller, &mut state, second);
    assert_eq!(state.selection.len(), 1);
    assert!(!state.handles.handles().is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.selection.is_empty());
    assert!(state.handles.handles().is_empty());
    assert_eq!(state.history.len(), 3, "Wiederherstellung darf nichts aufzeichnen");
}

#[test]
fn test_live_param_drag_records_single_entry() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    let len_before = state.history.len();

    for step in 1..=10 {
        send(
            &mut controller,
            &mut state,
            AppIntent::ParamChanged {
                edit: hair_card_editor::ParamEdit::Curvature(step as f32 * 0.05),
                finished: false,
            },
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::ParamChanged {
            edit: hair_card_editor::ParamEdit::Curvature(0.5),
            finished: true,
        },
    );

    assert_eq!(state.history.len(), len_before + 1);
    assert_eq!(state.history.labels().last(), Some("curvature"));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    let curvature = state.cards.iter().next().map(|c| c.params().curvature);
    assert_eq!(curvature, Some(0.2));
}
