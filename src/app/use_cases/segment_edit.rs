//! Use-Case: Segment-Handles einer einzeln selektierten Card ziehen.

use crate::app::AppState;
use glam::Vec3;

/// Schaltet die Segment-Bearbeitung ein oder aus.
///
/// Ein laufender Drag wird vorher regulär abgeschlossen.
pub fn set_segment_edit(state: &mut AppState, enabled: bool) {
    if state.editor.segment_edit_enabled == enabled {
        return;
    }
    state.finish_segment_drag();
    state.editor.segment_edit_enabled = enabled;
    state.rebuild_handles();
    log::debug!(
        "Segment-Bearbeitung {} ({} Handles)",
        if enabled { "aktiv" } else { "aus" },
        state.handles.handles().len()
    );
}

/// Startet den Drag eines Handles. Gibt `false` zurück, wenn keine Handles aktiv sind.
pub fn begin_segment_drag(state: &mut AppState, row: usize) -> bool {
    let Some(card) = state.handles.active_card().and_then(|id| state.cards.get(id)) else {
        return false;
    };
    let started = state.handles.begin_drag(card, row);
    if started {
        log::debug!("Segment-Drag auf Zeile {} gestartet", row);
    }
    started
}

/// Bewegt das gezogene Handle auf eine Weltposition (live, ohne History).
pub fn drag_segment_handle(state: &mut AppState, world_position: Vec3) {
    if !world_position.is_finite() {
        return;
    }
    let Some(id) = state.handles.active_card() else {
        return;
    };
    let Some(card) = state.cards.get_mut(id) else {
        return;
    };
    state.handles.drag_to_world(card, world_position);
}

/// Beendet den Drag mit genau einem History-Eintrag.
pub fn end_segment_drag(state: &mut AppState) {
    state.finish_segment_drag();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImportedModel;

    fn state_with_handles() -> (AppState, crate::core::CardId) {
        let mut state = AppState::new();
        state.model = Some(ImportedModel::new("m", Vec3::ZERO, Vec3::ONE));
        let params = state.place_params.card_params(state.model_scale());
        let id = state.cards.place(params, Vec3::ZERO, Vec3::Z);
        state.selection.select_only(id);
        set_segment_edit(&mut state, true);
        (state, id)
    }

    #[test]
    fn one_history_entry_per_drag() {
        let (mut state, id) = state_with_handles();
        assert!(begin_segment_drag(&mut state, 3));

        let start = state.handles.handle(3).map(|h| h.world_position).unwrap_or_default();
        for step in 1..=5 {
            drag_segment_handle(&mut state, start + Vec3::X * 0.01 * step as f32);
        }
        end_segment_drag(&mut state);

        assert_eq!(state.history.len(), 2);
        let offset = state
            .cards
            .get(id)
            .map(|c| c.params().segment_offsets[3])
            .unwrap_or_default();
        assert!(offset.abs_diff_eq(Vec3::X * 0.05, 1e-5));
    }

    #[test]
    fn disabling_finishes_active_drag() {
        let (mut state, _) = state_with_handles();
        assert!(begin_segment_drag(&mut state, 1));
        set_segment_edit(&mut state, false);
        assert!(state.handles.handles().is_empty());
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn drag_without_handles_is_ignored() {
        let mut state = AppState::new();
        assert!(!begin_segment_drag(&mut state, 0));
        drag_segment_handle(&mut state, Vec3::ONE);
        end_segment_drag(&mut state);
        assert_eq!(state.history.len(), 1);
    }
}
