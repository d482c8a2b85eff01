use super::state::{PlaceParams, ViewFlags};
use crate::core::CardRecord;

/// Vollständiger, in sich geschlossener Snapshot des editierbaren Zustands.
///
/// Enthält alle Cards als (Name, Transformation, Parameter), die globalen
/// Platzierungsparameter und die View-Schalter. Die Wiederherstellung hängt
/// nicht vom aktuellen Live-Zustand ab.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Bezeichnung der Aktion, die zu diesem Zustand geführt hat
    pub label: String,
    pub place_params: PlaceParams,
    pub view: ViewFlags,
    pub cards: Vec<CardRecord>,
}

impl HistoryEntry {
    /// Erfasst den aktuellen Zustand.
    pub fn capture(label: impl Into<String>, state: &crate::app::AppState) -> Self {
        Self {
            label: label.into(),
            place_params: state.place_params.clone(),
            view: state.view.clone(),
            cards: state.cards.iter().map(|c| c.to_record()).collect(),
        }
    }
}

/// Linearer, begrenzter Undo-Stack mit Cursor.
///
/// `entries[cursor]` beschreibt immer den aktuellen Zustand. Einträge hinter
/// dem Cursor existieren nur nach einem Undo und werden beim nächsten `push`
/// verworfen.
#[derive(Debug, Default)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    max_depth: usize,
    restoring: bool,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth: max_depth.max(1),
            restoring: false,
        }
    }

    /// Hängt einen Eintrag an. Einträge hinter dem Cursor werden vorher verworfen,
    /// bei Überlauf fällt der älteste Eintrag heraus.
    ///
    /// Während einer Wiederherstellung wird nichts aufgezeichnet; Rückgabe `false`.
    pub fn push(&mut self, entry: HistoryEntry) -> bool {
        if self.restoring {
            log::trace!("History-Eintrag '{}' während Wiederherstellung unterdrückt", entry.label);
            return false;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
        }
        self.cursor = self.entries.len() - 1;
        true
    }

    /// Setzt die History zurück und legt `entry` als einzigen Eintrag ab.
    pub fn reset(&mut self, entry: HistoryEntry) {
        self.entries.clear();
        self.cursor = 0;
        self.entries.push(entry);
    }

    /// Ändert die maximale Tiefe.
    ///
    /// Der Eintrag unter dem Cursor bleibt immer erhalten: zuerst fallen
    /// Redo-Einträge hinter dem Cursor weg, danach die ältesten davor.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.entries.len() <= self.max_depth {
            return;
        }
        let overflow = self.entries.len() - self.max_depth;
        let redo_tail = self.entries.len() - 1 - self.cursor;
        let drop_tail = overflow.min(redo_tail);
        self.entries.truncate(self.entries.len() - drop_tail);

        let drop_front = (overflow - drop_tail).min(self.cursor);
        self.entries.drain(..drop_front);
        self.cursor -= drop_front;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Bewegt den Cursor einen Schritt zurück und liefert den wiederherzustellenden Eintrag.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Bewegt den Cursor einen Schritt vor und liefert den wiederherzustellenden Eintrag.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Markiert den Beginn einer Wiederherstellung (unterdrückt `push`).
    pub fn begin_restore(&mut self) {
        self.restoring = true;
    }

    pub fn end_restore(&mut self) {
        self.restoring = false;
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Eintrag unter dem Cursor (aktueller Zustand).
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Labels aller Einträge (ältester zuerst).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }
}
