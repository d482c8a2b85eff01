//! Use-Case-Funktionen für Modell-Import und Sitzungs-Persistenz.

use crate::app::session::{self, RestoreReport};
use crate::app::AppState;
use crate::core::ImportedModel;

/// Übernimmt ein importiertes Modell (bestimmt Skalierung und Handle-Radius).
pub fn load_model(state: &mut AppState, model: ImportedModel) {
    if model.is_empty() {
        log::warn!("Modell '{}' hat keine gültige Bounding-Box", model.name);
    }
    log::info!("Modell '{}' geladen (Skalierung {:.4})", model.name, model.scale());
    state.model = Some(model);
    state.rebuild_handles();
}

/// Entfernt das Basismodell. Platzierte Cards bleiben erhalten.
pub fn unload_model(state: &mut AppState) {
    if let Some(model) = state.model.take() {
        log::info!("Modell '{}' entfernt", model.name);
        state.rebuild_handles();
    }
}

/// Speichert die Sitzung in der Ablage.
pub fn save_session(state: &mut AppState) -> anyhow::Result<()> {
    session::save_to_store(state)
}

/// Lädt die Sitzung aus der Ablage. Fehlt ein Eintrag, bleibt der Zustand unverändert.
pub fn load_session(state: &mut AppState) -> anyhow::Result<Option<RestoreReport>> {
    let report = session::load_from_store(state)?;
    if let Some(report) = &report {
        log_report(report);
    }
    Ok(report)
}

/// Lädt eine Sitzung aus einem JSON-Dokument (z.B. Projekt-Import).
pub fn import_session(state: &mut AppState, json: &str) -> anyhow::Result<RestoreReport> {
    let report = session::load_from_json(state, json)?;
    log_report(&report);
    Ok(report)
}

fn log_report(report: &RestoreReport) {
    if report.is_complete() {
        log::info!("Sitzung geladen: {} Cards", report.restored);
    } else {
        log::warn!(
            "Sitzung unvollständig geladen: {} Cards, {} übersprungen, {} Selektionsnamen fehlen",
            report.restored,
            report.skipped,
            report.missing_selection
        );
    }
}
