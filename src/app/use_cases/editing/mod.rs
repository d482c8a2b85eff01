//! Use-Case-Funktionen für Card-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `delete_cards`: Cards löschen, alles leeren
//! - `duplicate_cards`: Selektion duplizieren
//! - `card_params`: Platzierungsparameter live/commit anwenden
//! - `transform`: Rotation, Skalierung, Normalen-Ausrichtung, Gizmo
//! - `rename_card`: Card umbenennen

mod card_params;
mod delete_cards;
mod duplicate_cards;
mod rename_card;
mod transform;

pub use card_params::apply_param_edit;
pub use delete_cards::{clear_all, delete_card, delete_selected_cards};
pub use duplicate_cards::duplicate_selected_cards;
pub use rename_card::rename_card;
pub use transform::{
    align_selected_to_normals, apply_rotation_delta, apply_uniform_scale, commit_card_transform,
    rotate_selected, scale_selected, set_card_transform,
};
