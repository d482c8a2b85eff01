use crate::app::history::{EditHistory, HistoryEntry};
use crate::app::segment_handles::SegmentHandleController;
use crate::app::session::{MemorySessionStore, SessionStore};
use crate::app::CommandLog;
use crate::core::{Card, CardCollection, CardRecord, ImportedModel};
use crate::shared::EditorOptions;

use super::{EditorState, HairMaterial, PlaceParams, SelectionState, ViewFlags};

/// Hauptzustand der Editor-Sitzung
pub struct AppState {
    /// Alle platzierten Cards
    pub cards: CardCollection,
    /// Selection-State
    pub selection: SelectionState,
    /// Globale Platzierungsparameter inkl. Spiegel-Konfiguration
    pub place_params: PlaceParams,
    /// View-Schalter
    pub view: ViewFlags,
    /// Modus, Segment-Bearbeitung, Eingabe-Baselines
    pub editor: EditorState,
    /// Gemeinsames Card-Material
    pub material: HairMaterial,
    /// Importiertes Basismodell (None = kein Modell geladen)
    pub model: Option<ImportedModel>,
    /// Segment-Handles der aktiven Card
    pub handles: SegmentHandleController,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ablage für gespeicherte Sitzungen
    pub session_store: Box<dyn SessionStore>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; der Ausgangszustand wird als `init` aufgezeichnet.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            cards: CardCollection::new(),
            selection: SelectionState::new(),
            place_params: PlaceParams::default(),
            view: ViewFlags::default(),
            editor: EditorState::default(),
            material: HairMaterial::default(),
            model: None,
            handles: SegmentHandleController::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_capacity()),
            options,
            session_store: Box::new(MemorySessionStore::new()),
        };
        state.record_history("init");
        state
    }

    /// Ersetzt die Sitzungsablage.
    pub fn with_session_store(mut self, store: Box<dyn SessionStore>) -> Self {
        self.session_store = store;
        self
    }

    /// Anzahl der Cards (für UI-Anzeige)
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Modell-Skalierung (größte Bounding-Box-Ausdehnung, sonst 1.0).
    pub fn model_scale(&self) -> f32 {
        self.model.as_ref().map_or(1.0, ImportedModel::scale)
    }

    /// Darstellungsradius der Segment-Handles.
    pub fn handle_radius(&self) -> f32 {
        self.options.handle_radius_factor * self.model_scale()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Zeichnet den aktuellen Zustand als History-Eintrag auf.
    /// Während einer Wiederherstellung passiert nichts.
    pub fn record_history(&mut self, label: &str) {
        if self.history.is_restoring() {
            log::trace!("History '{}' während Wiederherstellung übersprungen", label);
            return;
        }
        let entry = HistoryEntry::capture(label, self);
        self.history.push(entry);
    }

    /// Nach einer Selektionsänderung: laufenden Segment-Drag abschließen,
    /// Eingabe-Baselines zurücksetzen, Handles neu aufbauen.
    pub fn selection_changed(&mut self) {
        self.finish_segment_drag();
        self.editor.inputs.reset();
        self.rebuild_handles();
    }

    /// Schließt einen laufenden Segment-Drag mit genau einem `segment`-Eintrag ab.
    ///
    /// Gibt `false` zurück, wenn kein Drag lief.
    pub fn finish_segment_drag(&mut self) -> bool {
        let Some(row) = self.handles.end_drag() else {
            return false;
        };
        log::info!("Segment {} verschoben", row);
        self.record_history("segment");
        true
    }

    /// Baut die Handles für die Einzel-Selektion neu auf oder entfernt sie.
    pub fn rebuild_handles(&mut self) {
        let radius = self.handle_radius();
        let target = self
            .selection
            .single()
            .filter(|_| self.editor.segment_edit_enabled)
            .and_then(|id| self.cards.get(id));
        match target {
            Some(card) => self.handles.build(card, radius),
            None => self.handles.clear(),
        }
    }

    /// Gleicht abgeleiteten Zustand nach einer Mutation ab.
    ///
    /// Entfernt verwaiste Selektions-Einträge, verwirft Handles gelöschter
    /// Cards und projiziert Handle-Positionen neu in den Weltraum.
    pub fn sync_derived_state(&mut self) {
        let cards = &self.cards;
        if self.selection.retain_existing(|id| cards.contains(id)) {
            log::debug!("Selektion um gelöschte Cards bereinigt");
            self.selection_changed();
        }

        match self.handles.active_card() {
            Some(id) => match self.cards.get(id) {
                Some(card) if Some(id) == self.selection.single() => {
                    if card.params().row_count() != self.handles.handles().len() {
                        self.rebuild_handles();
                    } else {
                        self.handles.sync_world_positions(card);
                    }
                }
                _ => self.handles.clear(),
            },
            None => {
                if self.editor.segment_edit_enabled && self.selection.single().is_some() {
                    self.rebuild_handles();
                }
            }
        }
    }

    /// Ersetzt alle Cards durch neu aufgebaute Cards aus `records`.
    ///
    /// Fehlerhafte Einträge werden übersprungen. Liefert (übernommen, übersprungen).
    pub fn replace_cards(&mut self, records: &[CardRecord]) -> (usize, usize) {
        let fallback = self.place_params.card_params(self.model_scale());
        self.cards.clear();
        let mut skipped = 0;
        for record in records {
            let id = self.cards.allocate_id();
            match Card::from_record(id, record, &fallback) {
                Ok(card) => self.cards.push(card),
                Err(e) => {
                    log::warn!("Card-Eintrag übersprungen: {:#}", e);
                    skipped += 1;
                }
            }
        }
        self.cards.sync_name_counter();
        self.selection.clear();
        self.handles.clear();
        self.editor.inputs.reset();
        (self.cards.len(), skipped)
    }

    /// Stellt einen History-Eintrag vollständig wieder her (replace-all).
    pub fn apply_history_entry(&mut self, entry: &HistoryEntry) {
        self.history.begin_restore();
        self.place_params = entry.place_params.clone();
        self.view = entry.view.clone();
        self.material.update(
            Some(self.place_params.alpha_test),
            Some(self.place_params.double_sided),
        );
        self.replace_cards(&entry.cards);
        self.history.end_restore();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
