//! Geordnete Sammlung aller Cards einer Sitzung.

use super::{Card, CardId, CardParams, Transform};
use glam::Vec3;

/// Präfix für automatisch vergebene Card-Namen.
pub const CARD_NAME_PREFIX: &str = "HairCard";

/// Geordnete Card-Sammlung. Die Einfügereihenfolge bestimmt nur die Listenanzeige.
#[derive(Debug, Clone)]
pub struct CardCollection {
    cards: Vec<Card>,
    next_id: u64,
    name_counter: u64,
}

impl CardCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
            name_counter: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    /// IDs in Listenreihenfolge.
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Vergibt die nächste freie ID.
    pub fn allocate_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Vergibt den nächsten Standardnamen (`HairCard N`).
    pub fn next_name(&mut self) -> String {
        let name = format!("{} {}", CARD_NAME_PREFIX, self.name_counter);
        self.name_counter += 1;
        name
    }

    /// Platziert eine neue Card auf einer Oberfläche und hängt sie an.
    pub fn place(&mut self, params: CardParams, point: Vec3, normal: Vec3) -> CardId {
        let id = self.allocate_id();
        let name = self.next_name();
        self.cards.push(Card::place(id, name, params, point, normal));
        id
    }

    /// Erstellt eine Card mit expliziter Transformation und hängt sie an.
    pub fn create(&mut self, name: Option<String>, params: CardParams, transform: Transform) -> CardId {
        let id = self.allocate_id();
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => self.next_name(),
        };
        self.cards.push(Card::new(id, name, params, transform));
        id
    }

    /// Hängt eine bereits erzeugte Card an (ID muss aus [`Self::allocate_id`] stammen).
    pub fn push(&mut self, card: Card) {
        self.next_id = self.next_id.max(card.id().0 + 1);
        self.cards.push(card);
    }

    /// Entfernt eine Card; gibt sie zurück, falls vorhanden.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    /// Entfernt alle Cards, deren ID in `ids` enthalten ist. Gibt die Anzahl zurück.
    pub fn remove_all(&mut self, ids: &[CardId]) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !ids.contains(&c.id()));
        before - self.cards.len()
    }

    /// Entfernt alle Cards (IDs werden nicht wiederverwendet).
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Setzt den Namenszähler hinter den höchsten vorhandenen `HairCard N`-Namen.
    pub fn sync_name_counter(&mut self) {
        let highest = self
            .cards
            .iter()
            .filter_map(|c| c.name.strip_prefix(CARD_NAME_PREFIX))
            .filter_map(|rest| rest.trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.name_counter = self.name_counter.max(highest + 1);
    }
}

impl Default for CardCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
