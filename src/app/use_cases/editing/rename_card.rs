//! Use-Case: Card umbenennen.

use crate::app::AppState;
use crate::core::CardId;

/// Benennt eine Card um. Leere Namen (nach Trim) werden ignoriert.
pub fn rename_card(state: &mut AppState, id: CardId, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        log::debug!("Leerer Name für Card {} ignoriert", id);
        return;
    }
    let Some(card) = state.cards.get_mut(id) else {
        log::debug!("Card {} existiert nicht", id);
        return;
    };
    if card.name == name {
        return;
    }

    log::info!("Card {} umbenannt: '{}' → '{}'", id, card.name, name);
    card.name = name.to_string();
    state.record_history("rename");
}
