//! Gemeinsame Selektions-Operationen.

use crate::app::AppState;
use crate::core::CardId;
use glam::Vec3;

/// Selektiert alle Cards; die zuletzt angelegte wird primär.
pub fn select_all(state: &mut AppState) {
    if state.cards.is_empty() {
        log::debug!("Alle selektieren: keine Cards vorhanden");
        return;
    }
    state.selection.replace_with(state.cards.ids());
    log::info!("{} Cards selektiert", state.selection.len());
    state.selection_changed();
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.is_empty() {
        return;
    }
    state.selection.clear();
    state.selection_changed();
}

/// Weltposition einer Card als Fokus-Ziel für die Kamera.
pub fn focus_target(state: &AppState, id: CardId) -> Option<Vec3> {
    state.cards.get(id).map(|card| card.local_to_world(Vec3::ZERO))
}
