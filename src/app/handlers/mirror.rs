//! Handler für die Spiegel-Konfiguration.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Axis;

pub fn set_enabled(state: &mut AppState, enabled: bool) {
    use_cases::mirror::set_mirror_enabled(state, enabled);
}

pub fn set_axis(state: &mut AppState, axis: Axis) {
    use_cases::mirror::set_mirror_axis(state, axis);
}

pub fn set_plane(state: &mut AppState, value: f32, commit: bool) {
    use_cases::mirror::set_mirror_plane(state, value, commit);
}

/// Spiegelebene durch die Modellmitte legen.
pub fn set_plane_to_model_center(state: &mut AppState) {
    use_cases::mirror::set_mirror_plane_to_model_center(state);
}
