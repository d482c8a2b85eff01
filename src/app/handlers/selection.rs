//! Handler für Selektions-Operationen.
//!
//! Selektion ist kein History-Ereignis; Wiederherstellungen leeren sie.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CardId;

/// Selektiert eine Card (additiv = umschalten).
pub fn select_card(state: &mut AppState, id: CardId, additive: bool) {
    use_cases::selection::select_card(state, id, additive);
}

/// Setzt die Checkbox einer Card in der Kartenliste.
pub fn set_card_checked(state: &mut AppState, id: CardId, checked: bool) {
    use_cases::selection::set_card_checked(state, id, checked);
}

/// Selektiert alle Cards.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
