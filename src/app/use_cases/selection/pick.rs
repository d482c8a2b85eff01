//! Use-Case: Card per Klick oder Checkbox selektieren.

use crate::app::AppState;
use crate::core::CardId;

/// Selektiert eine Card. Additiv schaltet die Mitgliedschaft um,
/// sonst wird die Selektion ersetzt.
pub fn select_card(state: &mut AppState, id: CardId, additive: bool) {
    if !state.cards.contains(id) {
        log::debug!("Selektion ignoriert: Card {} existiert nicht", id);
        return;
    }

    if additive {
        state.selection.toggle(id);
    } else {
        state.selection.select_only(id);
    }
    log::debug!(
        "Selektion: {} Cards, primär {:?}",
        state.selection.len(),
        state.selection.primary()
    );
    state.selection_changed();
}

/// Setzt die Mitgliedschaft einer Card (Checkbox in der Kartenliste).
pub fn set_card_checked(state: &mut AppState, id: CardId, checked: bool) {
    if !state.cards.contains(id) || state.selection.contains(id) == checked {
        return;
    }

    if checked {
        state.selection.insert(id);
    } else {
        state.selection.remove(id);
    }
    state.selection_changed();
}
