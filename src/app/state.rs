//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{EditorMode, EditorState, HairMaterial, ParamEdit, PlaceParams, RotationInputs};
pub use selection::SelectionState;
pub use view::{OverlayMode, ViewFlags};
