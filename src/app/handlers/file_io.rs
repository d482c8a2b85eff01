//! Handler für Modell-Import und Sitzungs-Persistenz.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ImportedModel;

/// Übernimmt ein importiertes Modell.
pub fn load_model(state: &mut AppState, model: ImportedModel) {
    use_cases::file_io::load_model(state, model);
}

/// Entfernt das Basismodell.
pub fn unload_model(state: &mut AppState) {
    use_cases::file_io::unload_model(state);
}

/// Speichert die Sitzung in der Ablage.
pub fn save_session(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_session(state)
}

/// Lädt die Sitzung aus der Ablage.
pub fn load_session(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::load_session(state).map(|_| ())
}

/// Lädt eine Sitzung aus einem JSON-Dokument.
pub fn import_session(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    use_cases::file_io::import_session(state, json).map(|_| ())
}
