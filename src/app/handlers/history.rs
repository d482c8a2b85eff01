//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.undo() {
        state.apply_history_entry(&prev);
        log::info!("Undo ausgeführt ({})", prev.label);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some(next) = state.history.redo() {
        state.apply_history_entry(&next);
        log::info!("Redo ausgeführt ({})", next.label);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
