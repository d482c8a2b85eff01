//! Handler für die Segment-Handles.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec3;

pub fn set_enabled(state: &mut AppState, enabled: bool) {
    use_cases::segment_edit::set_segment_edit(state, enabled);
}

pub fn begin_drag(state: &mut AppState, row: usize) {
    if !use_cases::segment_edit::begin_segment_drag(state, row) {
        log::debug!("Segment-Drag auf Zeile {} nicht möglich", row);
    }
}

pub fn drag(state: &mut AppState, world_position: Vec3) {
    use_cases::segment_edit::drag_segment_handle(state, world_position);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::segment_edit::end_segment_drag(state);
}
