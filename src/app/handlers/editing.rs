//! Handler für Card-Editing (Platzieren, Löschen, Parameter, Transformation).

use crate::app::state::ParamEdit;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, CardId, Transform};
use glam::Vec3;

/// Platziert eine Card am Trefferpunkt.
pub fn place_card(state: &mut AppState, point: Vec3, normal: Vec3) {
    use_cases::placement::place_card(state, point, normal);
}

/// Löscht alle selektierten Cards.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_cards(state);
}

/// Löscht eine einzelne Card (Listen-Button).
pub fn delete_card(state: &mut AppState, id: CardId) {
    use_cases::editing::delete_card(state, id);
}

/// Dupliziert die Selektion.
pub fn duplicate_selected(state: &mut AppState) {
    use_cases::editing::duplicate_selected_cards(state);
}

/// Entfernt alle Cards.
pub fn clear_all(state: &mut AppState) {
    use_cases::editing::clear_all(state);
}

/// Benennt eine Card um.
pub fn rename_card(state: &mut AppState, id: CardId, name: &str) {
    use_cases::editing::rename_card(state, id, name);
}

/// Wendet eine Parameter-Änderung an.
pub fn apply_param_edit(state: &mut AppState, edit: ParamEdit, commit: bool) {
    use_cases::editing::apply_param_edit(state, edit, commit);
}

/// Rotations-Eingabe anwenden.
pub fn rotate_selected(state: &mut AppState, axis: Axis, degrees: f32, commit: bool) {
    use_cases::editing::rotate_selected(state, axis, degrees, commit);
}

/// Skalierungs-Eingabe anwenden.
pub fn scale_selected(state: &mut AppState, value: f32, commit: bool) {
    use_cases::editing::scale_selected(state, value, commit);
}

/// Richtet Cards an Oberflächennormalen aus.
pub fn align_to_normals(state: &mut AppState, normals: &[(CardId, Vec3)]) {
    use_cases::editing::align_selected_to_normals(state, normals);
}

/// Setzt die Transformation einer Card (Gizmo-Drag).
pub fn set_card_transform(state: &mut AppState, id: CardId, transform: Transform) {
    use_cases::editing::set_card_transform(state, id, transform);
}

/// Schließt den Gizmo-Drag ab.
pub fn commit_card_transform(state: &mut AppState) {
    use_cases::editing::commit_card_transform(state);
}
