use approx::assert_relative_eq;
use glam::Vec3;
use hair_card_editor::{AppController, AppIntent, AppState, Axis, ImportedModel, PickHit};

use super::{click_model, first_id, select, send, state_with_model};

#[test]
fn test_mirrored_placement_creates_reflected_twin() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::MirrorEnabledChanged { enabled: true });

    click_model(&mut controller, &mut state, Vec3::new(0.3, 0.0, 0.0), Vec3::Y);

    assert_eq!(state.cards.len(), 2);
    let positions: Vec<Vec3> = state.cards.iter().map(|c| c.transform().position).collect();
    assert_relative_eq!(positions[0].x, 0.3);
    assert_relative_eq!(positions[1].x, -0.3);
    assert_relative_eq!(positions[0].y, positions[1].y);
    assert_eq!(state.history.labels().last(), Some("place-mirrored"));

    assert!(state.selection.is_empty());
}

#[test]
fn test_placement_keeps_existing_selection() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    let first = first_id(&state);
    select(&mut controller, &mut state, first);

    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);

    assert_eq!(state.cards.len(), 2);
    assert_eq!(state.selection.len(), 1);
    assert_eq!(state.selection.primary(), Some(first));
    assert_eq!(state.history.labels().last(), Some("place"));
}

#[test]
fn test_placement_on_mirror_plane_creates_no_twin() {
    let (mut controller, mut state) = state_with_model();
    send(&mut controller, &mut state, AppIntent::MirrorEnabledChanged { enabled: true });

    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Y);

    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.history.labels().last(), Some("place"));
}

#[test]
fn test_mirror_axis_and_plane_follow_model_center() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::ModelImported {
            model: ImportedModel::new("kopf", Vec3::new(-1.0, 1.0, -1.0), Vec3::new(1.0, 3.0, 1.0)),
        },
    );
    send(&mut controller, &mut state, AppIntent::MirrorEnabledChanged { enabled: true });
    send(&mut controller, &mut state, AppIntent::MirrorAxisChanged { axis: Axis::Y });
    send(&mut controller, &mut state, AppIntent::MirrorPlaneToModelCenterRequested);
    assert_relative_eq!(state.place_params.mirror.plane, 2.0);

    click_model(&mut controller, &mut state, Vec3::new(0.0, 2.5, 0.0), Vec3::Y);

    assert_eq!(state.cards.len(), 2);
    let twin = state.cards.iter().nth(1).expect("Zwilling erwartet");
    let original = state.cards.iter().next().expect("Original erwartet");
    assert_relative_eq!(
        twin.transform().position.y,
        4.0 - original.transform().position.y,
        epsilon = 1e-5
    );
    assert!(twin.transform().normal().abs_diff_eq(-Vec3::Y, 1e-5));
}

#[test]
fn test_live_plane_drag_commits_once() {
    let (mut controller, mut state) = state_with_model();
    let len_before = state.history.len();
    for value in [0.1, 0.2, 0.3] {
        send(
            &mut controller,
            &mut state,
            AppIntent::MirrorPlaneChanged {
                value,
                finished: false,
            },
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::MirrorPlaneChanged {
            value: 0.3,
            finished: true,
        },
    );
    assert_eq!(state.history.len(), len_before + 1);
    assert_relative_eq!(state.place_params.mirror.plane, 0.3);
}

#[test]
fn test_placement_scales_params_with_model() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::ModelImported {
            model: ImportedModel::new("kopf", Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0)),
        },
    );

    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Z);

    let card = state.cards.iter().next().expect("Card erwartet");
    assert_relative_eq!(card.params().width, 0.05);
    assert_relative_eq!(card.params().length, 0.24);
    assert_relative_eq!(card.params().root_offset, 0.004);
    assert!(card.transform().position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.004), 1e-6));
    assert_eq!(card.mesh().vertex_count(), 18);
}

#[test]
fn test_placement_without_model_or_with_orbit_modifier_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Y);
    assert!(state.cards.is_empty());

    let (mut controller, mut state) = state_with_model();
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            hit: Some(PickHit::model(Vec3::ZERO, Vec3::Y)),
            additive: false,
            orbit_modifier: true,
        },
    );
    assert!(state.cards.is_empty());
    assert_eq!(state.command_log.len(), 1, "nur LoadModel darf geloggt sein");
}

#[test]
fn test_unload_model_keeps_cards_and_blocks_placement() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::ZERO, Vec3::Y);
    send(&mut controller, &mut state, AppIntent::ModelUnloaded);
    assert!(state.model.is_none());
    assert_eq!(state.cards.len(), 1);

    click_model(&mut controller, &mut state, Vec3::X, Vec3::Y);
    assert_eq!(state.cards.len(), 1);
}
