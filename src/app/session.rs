//! Sitzungs-Persistenz: serialisierbarer Record, tolerantes Parsen,
//! Wiederherstellung und austauschbare Ablage.
//!
//! Format (JSON, camelCase):
//! `{ placeParams, view, cards: [{ name, pos, quat, scale, params }], selection: [names] }`

use super::history::HistoryEntry;
use super::state::{PlaceParams, ViewFlags};
use super::AppState;
use crate::core::CardRecord;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Vollständige Sitzung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub place_params: PlaceParams,
    #[serde(default)]
    pub view: ViewFlags,
    #[serde(default)]
    pub cards: Vec<CardRecord>,
    /// Namen der selektierten Cards
    #[serde(default)]
    pub selection: Vec<String>,
}

/// Ergebnis von [`parse_session`]: Record plus Anzahl verworfener Card-Einträge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSession {
    pub record: SessionRecord,
    pub malformed_cards: usize,
}

/// Bilanz einer Wiederherstellung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Wiederhergestellte Cards
    pub restored: usize,
    /// Übersprungene, fehlerhafte Card-Einträge
    pub skipped: usize,
    /// Selektions-Namen ohne passende Card
    pub missing_selection: usize,
}

impl RestoreReport {
    /// Gibt `true` zurück, wenn nichts übersprungen wurde.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0 && self.missing_selection == 0
    }
}

/// Schlüssel/Wert-Ablage für Sitzungen (z.B. Browser-Storage, Dateien).
pub trait SessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Flüchtige Ablage im Speicher.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ablage als eine JSON-Datei pro Schlüssel in einem Verzeichnis.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Dateipfad zu einem Schlüssel.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Sitzung nicht lesbar: {}", path.display()))?;
        Ok(Some(content))
    }

    fn put(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Verzeichnis nicht anlegbar: {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Sitzung nicht schreibbar: {}", path.display()))?;
        log::info!("Sitzung gespeichert nach: {}", path.display());
        Ok(())
    }
}

/// Erfasst die aktuelle Sitzung.
pub fn serialize_session(state: &AppState) -> SessionRecord {
    SessionRecord {
        place_params: state.place_params.clone(),
        view: state.view.clone(),
        cards: state.cards.iter().map(|c| c.to_record()).collect(),
        selection: state
            .selection
            .iter()
            .filter_map(|id| state.cards.get(id))
            .map(|c| c.name.clone())
            .collect(),
    }
}

/// Serialisiert die aktuelle Sitzung als JSON.
pub fn to_json(state: &AppState) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(&serialize_session(state))?;
    Ok(json)
}

/// Parst eine Sitzung tolerant.
///
/// Nur ungültiges JSON bzw. ein Nicht-Objekt auf oberster Ebene ist ein
/// Fehler. Fehlerhafte Card-Einträge werden verworfen und gezählt, fehlerhafte
/// `placeParams`/`view` fallen auf Standardwerte zurück.
pub fn parse_session(json: &str) -> anyhow::Result<ParsedSession> {
    let value: serde_json::Value = serde_json::from_str(json).context("Sitzung ist kein gültiges JSON")?;
    let Some(root) = value.as_object() else {
        anyhow::bail!("Sitzung muss ein JSON-Objekt sein");
    };

    let place_params = field_or_default::<PlaceParams>(root, "placeParams");
    let view = field_or_default::<ViewFlags>(root, "view");

    let mut cards = Vec::new();
    let mut malformed_cards = 0;
    if let Some(raw_cards) = root.get("cards").and_then(|c| c.as_array()) {
        for (index, raw) in raw_cards.iter().enumerate() {
            match serde_json::from_value::<CardRecord>(raw.clone()) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    log::warn!("Card-Eintrag {} verworfen: {}", index, e);
                    malformed_cards += 1;
                }
            }
        }
    }

    let selection = root
        .get("selection")
        .and_then(|s| s.as_array())
        .map(|names| {
            names
                .iter()
                .filter_map(|n| n.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ParsedSession {
        record: SessionRecord {
            place_params,
            view,
            cards,
            selection,
        },
        malformed_cards,
    })
}

fn field_or_default<T>(root: &serde_json::Map<String, serde_json::Value>, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match root.get(key) {
        None | Some(serde_json::Value::Null) => T::default(),
        Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
            log::warn!("Sitzungsfeld '{}' fehlerhaft, verwende Standardwerte: {}", key, e);
            T::default()
        }),
    }
}

/// Stellt eine Sitzung wieder her (replace-all).
///
/// Fehlerhafte Cards und unbekannte Selektions-Namen werden übersprungen;
/// die Wiederherstellung bricht nie ab. Jede Card, deren Name in der
/// Selektion steht, wird selektiert; die letzte in Listenreihenfolge wird primär.
pub fn restore_session(state: &mut AppState, record: &SessionRecord) -> RestoreReport {
    state.history.begin_restore();

    state.place_params = record.place_params.clone();
    state.view = record.view.clone();
    state.material.update(
        Some(state.place_params.alpha_test),
        Some(state.place_params.double_sided),
    );
    let (restored, skipped) = state.replace_cards(&record.cards);

    // Namen sind nicht eindeutig: jede Card mit passendem Namen wird selektiert.
    let wanted: HashSet<&str> = record.selection.iter().map(String::as_str).collect();
    let mut found: HashSet<&str> = HashSet::new();
    let matching: Vec<_> = state
        .cards
        .iter()
        .filter(|c| wanted.contains(c.name.as_str()))
        .map(|c| {
            found.insert(c.name.as_str());
            c.id()
        })
        .collect();
    let missing: Vec<&str> = wanted.difference(&found).copied().collect();
    for name in &missing {
        log::warn!("Selektierte Card '{}' nicht gefunden", name);
    }
    let missing_selection = missing.len();
    for id in matching {
        state.selection.insert(id);
    }

    state.history.end_restore();
    state.selection_changed();

    let report = RestoreReport {
        restored,
        skipped,
        missing_selection,
    };
    log::info!(
        "Sitzung wiederhergestellt: {} Cards, {} übersprungen, {} Selektionen fehlen",
        report.restored,
        report.skipped,
        report.missing_selection
    );
    report
}

/// Lädt eine Sitzung aus JSON und zeichnet den neuen Zustand als `init` auf.
pub fn load_from_json(state: &mut AppState, json: &str) -> anyhow::Result<RestoreReport> {
    let parsed = parse_session(json)?;
    let mut report = restore_session(state, &parsed.record);
    report.skipped += parsed.malformed_cards;
    let entry = HistoryEntry::capture("init", state);
    state.history.push(entry);
    Ok(report)
}

/// Speichert die Sitzung unter `options.storage_key` in der Ablage.
pub fn save_to_store(state: &mut AppState) -> anyhow::Result<()> {
    let json = to_json(state)?;
    let key = state.options.storage_key.clone();
    state.session_store.put(&key, &json)?;
    log::info!("Sitzung gespeichert: {} Cards unter '{}'", state.cards.len(), key);
    Ok(())
}

/// Lädt die Sitzung aus der Ablage. `Ok(None)`, wenn nichts gespeichert ist.
pub fn load_from_store(state: &mut AppState) -> anyhow::Result<Option<RestoreReport>> {
    let key = state.options.storage_key.clone();
    let Some(json) = state.session_store.get(&key)? else {
        log::debug!("Keine gespeicherte Sitzung unter '{}'", key);
        return Ok(None);
    };
    load_from_json(state, &json).map(Some)
}
