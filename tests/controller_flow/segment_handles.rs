use glam::{Quat, Vec3};
use hair_card_editor::app::HandlePhase;
use hair_card_editor::{AppIntent, ParamEdit, PickHit, Transform};

use super::{click_model, first_id, select, send, state_with_model, switch_to_select};

fn press_handle(
    controller: &mut hair_card_editor::AppController,
    state: &mut hair_card_editor::AppState,
    row: usize,
) {
    let point = state
        .handles
        .handle(row)
        .map(|h| h.world_position)
        .expect("Handle erwartet");
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            hit: Some(PickHit::segment_handle(row, point)),
            additive: false,
            orbit_modifier: false,
        },
    );
}

#[test]
fn test_handle_drag_moves_only_the_dragged_row() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);
    switch_to_select(&mut controller, &mut state);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });
    assert_eq!(state.handles.phase(), HandlePhase::Built);
    assert_eq!(state.handles.handles().len(), 9);

    let rows_before: Vec<[Vec3; 2]> = {
        let card = state.cards.get(id).expect("Card erwartet");
        (0..9).filter_map(|r| card.mesh().row(r)).collect()
    };

    let row = 4;
    let delta = Vec3::new(0.01, -0.02, 0.005);
    press_handle(&mut controller, &mut state, row);
    assert_eq!(state.handles.phase(), HandlePhase::Dragging);

    let start = state.handles.handle(row).map(|h| h.world_position).unwrap_or_default();
    send(
        &mut controller,
        &mut state,
        AppIntent::SegmentHandleDragged {
            world_position: start + delta * 0.5,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SegmentHandleDragged {
            world_position: start + delta,
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.handles.phase(), HandlePhase::Built);
    assert_eq!(state.history.labels().last(), Some("segment"));

    let card = state.cards.get(id).expect("Card erwartet");
    for (r, before) in rows_before.iter().enumerate() {
        let offset = card.params().segment_offsets[r];
        let after = card.mesh().row(r).expect("Zeile erwartet");
        if r == row {
            assert!(offset.abs_diff_eq(delta, 1e-5), "Offset {offset} statt {delta}");
            assert!(after[0].abs_diff_eq(before[0] + delta, 1e-5));
            assert!(after[1].abs_diff_eq(before[1] + delta, 1e-5));
        } else {
            assert_eq!(offset, Vec3::ZERO);
            assert!(after[0].abs_diff_eq(before[0], 1e-6));
            assert!(after[1].abs_diff_eq(before[1], 1e-6));
        }
    }

    let handle = state.handles.handle(row).map(|h| h.world_position).unwrap_or_default();
    assert!(handle.abs_diff_eq(start + delta, 1e-5));
}

#[test]
fn test_handles_require_single_selection() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    assert_eq!(state.handles.phase(), HandlePhase::Inactive);
    let second = state.cards.ids()[1];
    select(&mut controller, &mut state, second);
    assert_eq!(state.handles.active_card(), Some(second));

    send(&mut controller, &mut state, AppIntent::SelectAllRequested);
    assert_eq!(state.handles.phase(), HandlePhase::Inactive);

    send(&mut controller, &mut state, AppIntent::ClearSelectionRequested);
    assert!(state.handles.handles().is_empty());
}

#[test]
fn test_segment_count_change_rebuilds_handles() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    assert_eq!(state.handles.handles().len(), 9);

    send(
        &mut controller,
        &mut state,
        AppIntent::ParamChanged {
            edit: ParamEdit::Segments(3),
            finished: true,
        },
    );

    assert_eq!(state.handles.handles().len(), 4);
    let card = state.cards.get(id).expect("Card erwartet");
    assert_eq!(card.params().segment_offsets.len(), 4);
}

#[test]
fn test_gizmo_drag_reprojects_handles_and_commits_once() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    let len_before = state.history.len();
    let root_local = state.handles.handle(0).map(|h| h.local_position).unwrap_or_default();

    for x in [0.1, 0.2, 0.3] {
        send(
            &mut controller,
            &mut state,
            AppIntent::CardTransformDragged {
                id,
                transform: Transform {
                    position: Vec3::new(x, 0.0, 0.0),
                    rotation: Quat::IDENTITY,
                    scale: Vec3::ONE,
                },
            },
        );
    }
    let root_world = state.handles.handle(0).map(|h| h.world_position).unwrap_or_default();
    assert!(root_world.abs_diff_eq(root_local + Vec3::new(0.3, 0.0, 0.0), 1e-6));

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.history.len(), len_before + 1);
    assert_eq!(state.history.labels().last(), Some("transform"));
    assert!(!state.editor.transform_dragging);
}

#[test]
fn test_handle_press_without_segment_edit_is_ignored() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);
    switch_to_select(&mut controller, &mut state);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            hit: Some(PickHit::segment_handle(2, Vec3::ZERO)),
            additive: false,
            orbit_modifier: false,
        },
    );

    assert_eq!(state.handles.phase(), HandlePhase::Inactive);
    assert_eq!(state.selection.len(), 1, "Fehlklick lässt Selektion unverändert");
}

/// Zwei Cards, die erste selektiert, Segment-Bearbeitung aktiv, Zeile 4 um 0.05 in X gezogen.
fn state_with_running_drag() -> (
    hair_card_editor::AppController,
    hair_card_editor::AppState,
    Vec3,
) {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);
    click_model(&mut controller, &mut state, Vec3::new(0.3, 0.0, 0.0), Vec3::Z);
    switch_to_select(&mut controller, &mut state);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    send(&mut controller, &mut state, AppIntent::SegmentEditToggled { enabled: true });

    press_handle(&mut controller, &mut state, 4);
    let start = state.handles.handle(4).map(|h| h.world_position).unwrap_or_default();
    let delta = Vec3::new(0.05, 0.0, 0.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::SegmentHandleDragged {
            world_position: start + delta,
        },
    );
    assert_eq!(state.handles.dragging_row(), Some(4));
    (controller, state, delta)
}

#[test]
fn test_selection_change_during_drag_commits_segment() {
    let (mut controller, mut state, delta) = state_with_running_drag();
    let len_before = state.history.len();
    let ids = state.cards.ids();

    send(&mut controller, &mut state, AppIntent::CardClicked { id: ids[1], additive: true });
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.history.len(), len_before + 1);
    assert_eq!(state.history.labels().last(), Some("segment"));
    assert_eq!(state.handles.phase(), HandlePhase::Inactive);

    // Undo nimmt genau den Drag zurück (Wiederherstellung vergibt neue IDs)
    let first_offset = |state: &hair_card_editor::AppState| {
        state
            .cards
            .iter()
            .next()
            .map(|c| c.params().segment_offsets[4])
            .unwrap_or_default()
    };
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(first_offset(&state), Vec3::ZERO);
    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert!(first_offset(&state).abs_diff_eq(delta, 1e-5));
}

#[test]
fn test_param_edit_during_drag_commits_segment_first() {
    let (mut controller, mut state, delta) = state_with_running_drag();
    let len_before = state.history.len();
    let id = first_id(&state);

    send(
        &mut controller,
        &mut state,
        AppIntent::ParamChanged {
            edit: ParamEdit::Taper(0.4),
            finished: true,
        },
    );

    let labels: Vec<&str> = state.history.labels().collect();
    assert_eq!(state.history.len(), len_before + 2);
    assert_eq!(labels[labels.len() - 2..], ["segment", "taper"]);
    assert_eq!(state.handles.phase(), HandlePhase::Built);
    let offset = state
        .cards
        .get(id)
        .map(|c| c.params().segment_offsets[4])
        .unwrap_or_default();
    assert!(offset.abs_diff_eq(delta, 1e-5));
}
