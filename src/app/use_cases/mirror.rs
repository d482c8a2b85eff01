//! Use-Case: Spiegel-Konfiguration ändern.

use crate::app::AppState;
use crate::core::Axis;

/// Schaltet die Spiegelung ein oder aus.
pub fn set_mirror_enabled(state: &mut AppState, enabled: bool) {
    if state.place_params.mirror.enabled == enabled {
        return;
    }
    state.place_params.mirror.enabled = enabled;
    state.record_history("mirror-toggle");
}

/// Setzt die Spiegelachse.
pub fn set_mirror_axis(state: &mut AppState, axis: Axis) {
    if state.place_params.mirror.axis == axis {
        return;
    }
    state.place_params.mirror.axis = axis;
    state.record_history("mirror-axis");
}

/// Setzt die Koordinate der Spiegelebene entlang der Achse.
pub fn set_mirror_plane(state: &mut AppState, value: f32, commit: bool) {
    if !value.is_finite() {
        log::warn!("Spiegelebene ignoriert: ungültiger Wert");
        return;
    }
    state.place_params.mirror.plane = value;
    if commit {
        state.record_history("mirror-plane");
    }
}

/// Legt die Spiegelebene durch die Modellmitte (0 ohne Modell).
pub fn set_mirror_plane_to_model_center(state: &mut AppState) {
    let axis = state.place_params.mirror.axis;
    let center = state.model.as_ref().map_or(0.0, |m| m.center()[axis.index()]);
    log::info!("Spiegelebene auf Modellmitte {} gesetzt", center);
    set_mirror_plane(state, center, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImportedModel;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn unchanged_toggle_records_nothing() {
        let mut state = AppState::new();
        set_mirror_enabled(&mut state, false);
        set_mirror_axis(&mut state, Axis::X);
        assert_eq!(state.history.len(), 1);

        set_mirror_enabled(&mut state, true);
        set_mirror_axis(&mut state, Axis::Z);
        assert_eq!(state.history.labels().collect::<Vec<_>>(), ["init", "mirror-toggle", "mirror-axis"]);
    }

    #[test]
    fn plane_follows_model_center_on_axis() {
        let mut state = AppState::new();
        state.model = Some(ImportedModel::new("m", Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 4.0, 1.0)));
        set_mirror_axis(&mut state, Axis::Y);
        set_mirror_plane_to_model_center(&mut state);
        assert_relative_eq!(state.place_params.mirror.plane, 3.0);
    }
}
