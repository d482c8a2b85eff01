//! Use-Case: Modus, View-Schalter und Material.

use crate::app::state::{EditorMode, ViewFlags};
use crate::app::AppState;
use crate::core::texture::{self, StrandTextureParams};

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    if state.editor.mode == mode {
        return;
    }
    state.finish_segment_drag();
    state.editor.mode = mode;
    log::debug!("Modus: {:?}", mode);
}

/// Übernimmt die View-Schalter (ohne History).
pub fn set_view_flags(state: &mut AppState, view: ViewFlags) {
    state.view = view;
}

/// Aktualisiert das gemeinsame Material und die zugehörigen Platzierungsparameter.
pub fn update_material(
    state: &mut AppState,
    alpha_test: Option<f32>,
    double_sided: Option<bool>,
    commit: bool,
) {
    state.material.update(alpha_test, double_sided);
    state.place_params.alpha_test = state.material.alpha_test;
    state.place_params.double_sided = state.material.double_sided;
    if commit {
        state.record_history("material");
    }
}

/// Setzt die Card-Textur (`None` = prozedurale Standardtextur).
pub fn set_texture(state: &mut AppState, name: Option<String>) {
    log::info!("Textur: {}", name.as_deref().unwrap_or("<Standard>"));
    state.material.set_texture(name);
}

/// Erzeugt die Strähnen-Textur und setzt sie unter `strands-<seed>` als
/// Material-Textur (ohne History).
pub fn generate_strand_texture(state: &mut AppState, params: &StrandTextureParams) {
    let image = texture::generate_strand_texture(params);
    let name = format!("strands-{}", params.seed);
    log::info!(
        "Textur: {} ({}x{}, {} Strähnen)",
        name,
        image.width(),
        image.height(),
        params.strands
    );
    state.material.set_generated(name, image);
}
