use approx::assert_relative_eq;
use glam::Vec3;
use hair_card_editor::{AppCommand, AppIntent, ParamEdit};

use super::{card_names, click_model, first_id, select, send, state_with_model, switch_to_select};

#[test]
fn test_session_round_trip_through_store() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    send(
        &mut controller,
        &mut state,
        AppIntent::ParamChanged {
            edit: ParamEdit::Taper(0.7),
            finished: true,
        },
    );
    click_model(&mut controller, &mut state, Vec3::new(-0.2, 0.1, 0.3), Vec3::new(0.0, 0.6, 0.8));
    if let Some(card) = state.cards.get_mut(first_id(&state)) {
        card.apply_segment_offset(3, Vec3::new(0.01, 0.0, -0.02));
    }
    let second = state.cards.ids()[1];
    select(&mut controller, &mut state, second);
    let before: Vec<_> = state.cards.iter().map(|c| c.to_record()).collect();

    send(&mut controller, &mut state, AppIntent::SaveSessionRequested);
    send(&mut controller, &mut state, AppIntent::ClearAllRequested);
    assert!(state.cards.is_empty());

    send(&mut controller, &mut state, AppIntent::LoadSessionRequested);

    let after: Vec<_> = state.cards.iter().map(|c| c.to_record()).collect();
    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(&before) {
        assert_eq!(a.name, b.name);
        assert!(a.pos.abs_diff_eq(b.pos, 1e-6));
        assert!(a.quat.abs_diff_eq(b.quat, 1e-6));
        assert!(a.scale.abs_diff_eq(b.scale, 1e-6));
        let (pa, pb) = (
            a.params.as_ref().expect("Parameter erwartet"),
            b.params.as_ref().expect("Parameter erwartet"),
        );
        assert_relative_eq!(pa.width, pb.width);
        assert_relative_eq!(pa.length, pb.length);
        assert_relative_eq!(pa.taper, pb.taper);
        assert_eq!(pa.segment_count, pb.segment_count);
        assert_eq!(pa.segment_offsets.len(), pb.segment_offsets.len());
        for (oa, ob) in pa.segment_offsets.iter().zip(&pb.segment_offsets) {
            assert!(oa.abs_diff_eq(*ob, 1e-6));
        }
    }
    assert_relative_eq!(state.place_params.taper, 0.7);

    // Selektion wird über den Namen wiederhergestellt
    assert_eq!(state.selection.len(), 1);
    let selected = state.selection.primary().and_then(|id| state.cards.get(id));
    assert_eq!(selected.map(|c| c.name.as_str()), Some("HairCard 2"));
}

#[test]
fn test_selection_restore_selects_every_card_with_the_name() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    let ids = state.cards.ids();
    send(
        &mut controller,
        &mut state,
        AppIntent::RenameCardRequested {
            id: ids[1],
            name: "HairCard 1".to_string(),
        },
    );
    select(&mut controller, &mut state, ids[1]);

    send(&mut controller, &mut state, AppIntent::SaveSessionRequested);
    send(&mut controller, &mut state, AppIntent::ClearAllRequested);
    send(&mut controller, &mut state, AppIntent::LoadSessionRequested);

    assert_eq!(card_names(&state), ["HairCard 1", "HairCard 1"]);
    assert_eq!(state.selection.len(), 2);
    // Primär bleibt die zuletzt gelistete Card, also die vorher selektierte
    let primary = state
        .selection
        .primary()
        .and_then(|id| state.cards.get(id))
        .expect("primäre Card erwartet");
    assert_relative_eq!(primary.transform().position.x, 0.2, epsilon = 1e-6);
}

#[test]
fn test_import_selects_all_duplicate_names() {
    let (mut controller, mut state) = state_with_model();
    let json = r#"{
        "cards": [
            {"name": "A", "pos": [0, 0, 0], "quat": [0, 0, 0, 1], "scale": [1, 1, 1]},
            {"name": "A", "pos": [1, 0, 0], "quat": [0, 0, 0, 1], "scale": [1, 1, 1]},
            {"name": "B", "pos": [2, 0, 0], "quat": [0, 0, 0, 1], "scale": [1, 1, 1]}
        ],
        "selection": ["A", "A"]
    }"#;

    send(
        &mut controller,
        &mut state,
        AppIntent::SessionImported {
            json: json.to_string(),
        },
    );

    let ids = state.cards.ids();
    assert_eq!(state.selection.len(), 2);
    assert!(state.selection.contains(ids[0]));
    assert!(state.selection.contains(ids[1]));
    assert!(!state.selection.contains(ids[2]));
}

#[test]
fn test_session_load_can_be_undone() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    send(&mut controller, &mut state, AppIntent::SaveSessionRequested);
    send(&mut controller, &mut state, AppIntent::ClearAllRequested);

    send(&mut controller, &mut state, AppIntent::LoadSessionRequested);
    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.history.labels().last(), Some("init"));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.cards.is_empty());
}

#[test]
fn test_load_with_empty_store_changes_nothing() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    let len_before = state.history.len();

    send(&mut controller, &mut state, AppIntent::LoadSessionRequested);

    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.history.len(), len_before);
}

#[test]
fn test_import_of_invalid_json_fails_without_changes() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::SessionImported {
            json: "{ kaputt".to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.cards.len(), 1);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::ImportSession { .. })
    ));
}

#[test]
fn test_import_skips_malformed_cards() {
    let (mut controller, mut state) = state_with_model();
    let json = r#"{
        "cards": [
            {"name": "Gut", "pos": [0, 0, 0], "quat": [0, 0, 0, 1], "scale": [1, 1, 1], "params": null},
            {"name": "Kaputt", "pos": [0, 0, 0], "quat": [0, 0, 0, 0], "scale": [1, 1, 1]}
        ],
        "selection": ["Gut", "Fehlt"]
    }"#;

    send(
        &mut controller,
        &mut state,
        AppIntent::SessionImported {
            json: json.to_string(),
        },
    );

    assert_eq!(card_names(&state), ["Gut"]);
    assert_eq!(state.selection.len(), 1);
    // params: null → aktuelle Platzierungsparameter × Modell-Skalierung
    let card = state.cards.iter().next().expect("Card erwartet");
    assert_relative_eq!(card.params().width, state.place_params.width);
}

#[test]
fn test_empty_selection_operations_are_noops() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    assert!(state.selection.is_empty());
    let len_before = state.history.len();

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    send(&mut controller, &mut state, AppIntent::DuplicateSelectedRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::RotationInputChanged {
            axis: hair_card_editor::Axis::Y,
            degrees: 45.0,
            finished: true,
        },
    );

    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.history.len(), len_before);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::RotateSelected { .. })
    ));
}

#[test]
fn test_additive_click_toggles_and_duplicate_selects_clones() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    click_model(&mut controller, &mut state, Vec3::new(0.2, 0.5, 0.0), Vec3::Y);
    switch_to_select(&mut controller, &mut state);
    let ids = state.cards.ids();
    select(&mut controller, &mut state, ids[1]);

    send(&mut controller, &mut state, AppIntent::CardClicked { id: ids[0], additive: true });
    assert_eq!(state.selection.len(), 2);
    assert_eq!(state.selection.primary(), Some(ids[0]));

    send(&mut controller, &mut state, AppIntent::DuplicateSelectedRequested);
    assert_eq!(state.cards.len(), 4);
    assert_eq!(state.selection.len(), 2);
    assert!(state.selection.iter().all(|id| !ids.contains(&id)));
    assert_eq!(
        card_names(&state),
        ["HairCard 1", "HairCard 2", "HairCard 3", "HairCard 4"]
    );

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    assert_eq!(state.cards.ids(), ids);
    assert!(state.selection.is_empty());
}

#[test]
fn test_deleting_selected_card_via_list_cleans_selection() {
    let (mut controller, mut state) = state_with_model();
    click_model(&mut controller, &mut state, Vec3::new(0.1, 0.5, 0.0), Vec3::Y);
    let id = first_id(&state);
    select(&mut controller, &mut state, id);
    assert!(state.selection.contains(id));

    send(&mut controller, &mut state, AppIntent::DeleteCardRequested { id });

    assert!(state.cards.is_empty());
    assert!(state.selection.is_empty());
    assert_eq!(state.history.labels().last(), Some("delete"));
}
