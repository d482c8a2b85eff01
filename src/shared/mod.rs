//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `app` als auch der Host lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{HISTORY_LIMIT, STORAGE_KEY};
