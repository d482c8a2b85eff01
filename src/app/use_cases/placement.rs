//! Use-Case: Card auf der Modelloberfläche platzieren (inkl. Spiegel-Zwilling).

use crate::app::AppState;
use crate::core::{mirror_placement, CardId, Transform};
use glam::Vec3;

/// Platziert eine Card am Trefferpunkt und legt bei aktiver Spiegelung den
/// Zwilling an. Die Selektion bleibt unverändert.
///
/// Ein Platzierungs-Event (inkl. Zwilling) erzeugt genau einen History-Eintrag.
/// Gibt die ID der platzierten Card zurück.
pub fn place_card(state: &mut AppState, point: Vec3, normal: Vec3) -> Option<CardId> {
    if state.model.is_none() {
        log::debug!("Platzierung ignoriert: kein Modell geladen");
        return None;
    }
    if !point.is_finite() || !normal.is_finite() || normal.length_squared() < 1e-12 {
        log::warn!("Platzierung ignoriert: ungültiger Treffer ({point}, {normal})");
        return None;
    }

    let params = state.place_params.card_params(state.model_scale());
    let id = state.cards.place(params.clone(), point, normal);

    let mut label = "place";
    let source = state.cards.get(id).map(|c| *c.transform());
    if let Some(source) = source {
        let twin = mirror_placement(
            &state.place_params.mirror,
            source.position,
            source.normal(),
            state.options.mirror_tolerance,
        );
        if let Some(twin) = twin {
            let transform = Transform {
                position: twin.position,
                rotation: twin.rotation,
                scale: source.scale,
            };
            let twin_id = state.cards.create(None, params, transform);
            log::info!("Spiegel-Card {} bei {} angelegt", twin_id, twin.position);
            label = "place-mirrored";
        }
    }

    log::info!("Card {} platziert bei {}", id, point);
    state.record_history(label);
    Some(id)
}
