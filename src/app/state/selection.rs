use crate::core::CardId;
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
///
/// Invariante: `primary` ist, falls gesetzt, immer Mitglied von `ids`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Cards in Einfügereihenfolge
    ids: IndexSet<CardId>,
    /// Primäre Card für Einzel-Operationen (Gizmo, Handles, Rotation)
    primary: Option<CardId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<CardId> {
        self.primary
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// IDs in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.ids.iter().copied()
    }

    /// Kopie der IDs (für Mutationen der Card-Sammlung während der Iteration).
    pub fn to_vec(&self) -> Vec<CardId> {
        self.ids.iter().copied().collect()
    }

    /// Genau eine selektierte Card, sonst `None`.
    pub fn single(&self) -> Option<CardId> {
        if self.ids.len() == 1 {
            self.primary
        } else {
            None
        }
    }

    /// Ersetzt die Selektion durch genau eine Card.
    pub fn select_only(&mut self, id: CardId) {
        self.ids.clear();
        self.ids.insert(id);
        self.primary = Some(id);
    }

    /// Fügt eine Card hinzu und macht sie zur primären.
    pub fn insert(&mut self, id: CardId) {
        // neu einsortieren, damit "zuletzt hinzugefügt" am Ende steht
        self.ids.shift_remove(&id);
        self.ids.insert(id);
        self.primary = Some(id);
    }

    /// Entfernt eine Card. War sie primär, rückt die zuletzt eingefügte nach.
    pub fn remove(&mut self, id: CardId) -> bool {
        if !self.ids.shift_remove(&id) {
            return false;
        }
        if self.primary == Some(id) {
            self.primary = self.ids.last().copied();
        }
        true
    }

    /// Additive Auswahl: schaltet die Mitgliedschaft einer Card um.
    pub fn toggle(&mut self, id: CardId) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.insert(id);
        }
    }

    /// Ersetzt die Selektion durch die gegebenen IDs; die letzte wird primär.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = CardId>) {
        self.ids = ids.into_iter().collect();
        self.primary = self.ids.last().copied();
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.primary = None;
    }

    /// Entfernt alle IDs, für die `exists` `false` liefert. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn retain_existing(&mut self, mut exists: impl FnMut(CardId) -> bool) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| exists(*id));
        if self.primary.is_some_and(|p| !self.ids.contains(&p)) {
            self.primary = self.ids.last().copied();
        }
        before != self.ids.len()
    }
}
