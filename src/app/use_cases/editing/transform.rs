//! Use-Case: Rotation, Skalierung und direkte Transformation von Cards.

use crate::app::AppState;
use crate::core::{align_to_normal, Axis, CardCollection, CardId, Transform};
use glam::Vec3;

/// Rotiert jede Card inkrementell um ihre eigene lokale Achse.
///
/// Jede Card dreht sich um ihren eigenen Ursprung, nicht um einen
/// gemeinsamen Pivot der Selektion.
pub fn apply_rotation_delta(cards: &mut CardCollection, ids: &[CardId], axis: Axis, radians: f32) {
    if radians == 0.0 || !radians.is_finite() {
        return;
    }
    for &id in ids {
        if let Some(card) = cards.get_mut(id) {
            card.transform_mut().rotate_local(axis, radians);
        }
    }
}

/// Multipliziert die Skalierung jeder Card mit `factor`.
pub fn apply_uniform_scale(cards: &mut CardCollection, ids: &[CardId], factor: f32) {
    if factor == 1.0 || !factor.is_finite() || factor == 0.0 {
        return;
    }
    for &id in ids {
        if let Some(card) = cards.get_mut(id) {
            card.transform_mut().scale *= factor;
        }
    }
}

/// Rotations-Eingabe (absolute Grad) auf die Selektion anwenden.
pub fn rotate_selected(state: &mut AppState, axis: Axis, degrees: f32, commit: bool) {
    if state.selection.is_empty() || !degrees.is_finite() {
        return;
    }

    let delta = state.editor.inputs.rotation_delta(axis, degrees);
    let ids = state.selection.to_vec();
    apply_rotation_delta(&mut state.cards, &ids, axis, delta.to_radians());

    if commit {
        log::info!("{} Cards um {:?} rotiert ({}°)", ids.len(), axis, degrees);
        state.record_history("rotate");
    }
}

/// Skalierungs-Eingabe (absolut) auf die Selektion anwenden.
pub fn scale_selected(state: &mut AppState, value: f32, commit: bool) {
    if state.selection.is_empty() {
        return;
    }
    let Some(factor) = state.editor.inputs.scale_factor(value) else {
        log::debug!("Skalierung {} ignoriert", value);
        return;
    };

    let ids = state.selection.to_vec();
    apply_uniform_scale(&mut state.cards, &ids, factor);

    if commit {
        log::info!("{} Cards skaliert (×{})", ids.len(), value);
        state.record_history("scale");
    }
}

/// Richtet Cards an den übergebenen Oberflächennormalen aus.
///
/// Die Normalen ermittelt der Picking-Kollaborateur per Raycast von der
/// Card zum Modell. Ungültige Normalen werden übersprungen.
pub fn align_selected_to_normals(state: &mut AppState, normals: &[(CardId, Vec3)]) {
    let mut aligned = 0;
    for &(id, normal) in normals {
        if !normal.is_finite() || normal.length_squared() < 1e-12 {
            continue;
        }
        if let Some(card) = state.cards.get_mut(id) {
            card.transform_mut().rotation = align_to_normal(normal);
            aligned += 1;
        }
    }

    if aligned == 0 {
        log::debug!("Keine Card ausgerichtet");
        return;
    }
    log::info!("{} Cards an Normalen ausgerichtet", aligned);
    state.record_history("align");
}

/// Setzt die Transformation einer Card während eines Gizmo-Drags (ohne History).
pub fn set_card_transform(state: &mut AppState, id: CardId, transform: Transform) {
    if !transform.is_finite() {
        log::warn!("Transformation für Card {} ignoriert: ungültige Werte", id);
        return;
    }
    let Some(card) = state.cards.get_mut(id) else {
        return;
    };
    card.set_transform(Transform {
        rotation: transform.rotation.normalize(),
        ..transform
    });
    state.editor.transform_dragging = true;
}

/// Schließt einen Gizmo-Drag mit genau einem History-Eintrag ab.
pub fn commit_card_transform(state: &mut AppState) {
    if !state.editor.transform_dragging {
        log::debug!("Kein Gizmo-Drag aktiv");
        return;
    }
    state.editor.transform_dragging = false;
    state.record_history("transform");
}
