//! Use-Case-Funktionen für die Card-Selektion.
//!
//! Aufgeteilt nach Operation:
//! - `pick`: Einzelklick in Viewport oder Liste, Checkbox
//! - `helpers`: Alle/keine selektieren, Fokus-Ziel

mod helpers;
mod pick;

pub use helpers::{clear_selection, focus_target, select_all};
pub use pick::{select_card, set_card_checked};
