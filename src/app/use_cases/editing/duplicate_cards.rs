//! Use-Case: Selektierte Cards duplizieren.

use crate::app::AppState;
use crate::core::CardId;

/// Dupliziert alle selektierten Cards mit leichtem Versatz.
///
/// Die Klone erhalten neue Namen und bilden die neue Selektion
/// (primär = letzter Klon). Gibt die IDs der Klone zurück.
pub fn duplicate_selected_cards(state: &mut AppState) -> Vec<CardId> {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Duplizieren selektiert");
        return Vec::new();
    }

    let offset = state.options.duplicate_offset_vec();
    let mut clones = Vec::with_capacity(state.selection.len());
    for source_id in state.selection.to_vec() {
        if !state.cards.contains(source_id) {
            continue;
        }
        let id = state.cards.allocate_id();
        let name = state.cards.next_name();
        let Some(clone) = state.cards.get(source_id).map(|c| c.duplicate(id, name, offset)) else {
            continue;
        };
        state.cards.push(clone);
        clones.push(id);
    }

    state.selection.replace_with(clones.iter().copied());
    state.selection_changed();

    log::info!("{} Cards dupliziert", clones.len());
    state.record_history("duplicate");
    clones
}
