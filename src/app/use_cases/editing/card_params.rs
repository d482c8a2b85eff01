//! Use-Case: Platzierungsparameter ändern und auf selektierte Cards anwenden.

use crate::app::state::ParamEdit;
use crate::app::AppState;

/// Übernimmt einen Parameterwert in die globalen Platzierungsparameter und
/// wendet ihn live auf alle selektierten Cards an.
///
/// Breite/Länge/Segmente/Biegung/Verjüngung bauen das Mesh neu auf; der
/// Wurzelabstand verschiebt die Card entlang ihrer lokalen Normalen.
/// Nur `commit` erzeugt einen History-Eintrag.
pub fn apply_param_edit(state: &mut AppState, edit: ParamEdit, commit: bool) {
    if !edit.is_finite() {
        log::warn!("Parameter {} ignoriert: ungültiger Wert", edit.label());
        return;
    }
    // laufenden Handle-Drag vor dem Neuaufbau festschreiben
    state.finish_segment_drag();

    edit.apply_to(&mut state.place_params);

    let scale = state.model_scale();
    let patch = edit.card_patch(scale);
    for id in state.selection.to_vec() {
        let Some(card) = state.cards.get_mut(id) else {
            continue;
        };
        match (&patch, edit) {
            (Some(patch), _) => card.rebuild_geometry(patch),
            (None, ParamEdit::Offset(offset)) => card.set_root_offset(offset * scale),
            (None, _) => {}
        }
    }

    let handles_affected = state
        .handles
        .active_card()
        .is_some_and(|id| state.selection.contains(id));
    if handles_affected {
        state.rebuild_handles();
    }

    if commit {
        log::info!("Parameter {} übernommen", edit.label());
        state.record_history(edit.label());
    }
}
