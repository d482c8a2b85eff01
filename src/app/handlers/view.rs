//! Handler für Modus, View-Schalter und Material.

use crate::app::state::{EditorMode, ViewFlags};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::StrandTextureParams;

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::view::set_mode(state, mode);
}

/// Übernimmt die View-Schalter.
pub fn set_view_flags(state: &mut AppState, view: ViewFlags) {
    use_cases::view::set_view_flags(state, view);
}

/// Aktualisiert Alpha-Test und Doppelseitigkeit.
pub fn update_material(
    state: &mut AppState,
    alpha_test: Option<f32>,
    double_sided: Option<bool>,
    commit: bool,
) {
    use_cases::view::update_material(state, alpha_test, double_sided, commit);
}

/// Setzt die Card-Textur.
pub fn set_texture(state: &mut AppState, name: Option<String>) {
    use_cases::view::set_texture(state, name);
}

/// Erzeugt die prozedurale Strähnen-Textur.
pub fn generate_strand_texture(state: &mut AppState, params: &StrandTextureParams) {
    use_cases::view::generate_strand_texture(state, params);
}
