//! Use-Case: Cards löschen.

use crate::app::AppState;
use crate::core::CardId;

/// Löscht alle selektierten Cards. Leere Selektion ist ein No-op.
pub fn delete_selected_cards(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let ids = state.selection.to_vec();
    let removed = state.cards.remove_all(&ids);
    state.selection.clear();
    state.selection_changed();

    log::info!("{} Cards gelöscht", removed);
    state.record_history("delete");
}

/// Löscht eine einzelne Card (Lösch-Button in der Kartenliste).
pub fn delete_card(state: &mut AppState, id: CardId) {
    if state.cards.remove(id).is_none() {
        log::debug!("Card {} existiert nicht", id);
        return;
    }

    state.selection.remove(id);
    state.selection_changed();

    log::info!("Card {} gelöscht", id);
    state.record_history("delete");
}

/// Entfernt alle Cards.
pub fn clear_all(state: &mut AppState) {
    if state.cards.is_empty() {
        log::debug!("Keine Cards vorhanden");
        return;
    }

    let count = state.cards.len();
    state.cards.clear();
    state.selection.clear();
    state.selection_changed();

    log::info!("Alle {} Cards entfernt", count);
    state.record_history("clear");
}
