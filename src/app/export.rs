//! Read-only Sicht auf die Cards für externe Exporter (GLTF/OBJ/FBX).

use super::AppState;
use crate::core::{CardId, VertexBuffer};
use glam::Affine3A;

/// Eine Card, wie sie ein Exporter sieht.
#[derive(Debug, Clone, Copy)]
pub struct ExportItem<'a> {
    pub id: CardId,
    pub name: &'a str,
    /// Lokal→Welt-Matrix
    pub world_matrix: Affine3A,
    pub mesh: &'a VertexBuffer,
}

/// Sammelt die zu exportierenden Cards in Listenreihenfolge.
///
/// `only_selected` mit leerer Selektion exportiert alle Cards.
pub fn export_items(state: &AppState, only_selected: bool) -> Vec<ExportItem<'_>> {
    let filter_selection = only_selected && !state.selection.is_empty();
    state
        .cards
        .iter()
        .filter(|c| !filter_selection || state.selection.contains(c.id()))
        .map(|c| ExportItem {
            id: c.id(),
            name: &c.name,
            world_matrix: c.world_matrix(),
            mesh: c.mesh(),
        })
        .collect()
}
