//! Prozedurale Hair-Card-Geometrie (Biegung, Verjüngung, Segment-Offsets).
//!
//! Eine Card ist ein Band aus `segment_count` Quads. Jede Zeile besitzt genau
//! zwei Vertices (links, rechts), Zeile 0 ist die Wurzel im lokalen Ursprung,
//! die letzte Zeile die Spitze bei `-length` entlang Y.

use super::CardParams;
use glam::Vec3;

/// Vertex-Daten einer Card im lokalen Card-Raum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBuffer {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl VertexBuffer {
    /// Anzahl der Vertices (`2 * Zeilen`).
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Anzahl der Geometriezeilen.
    pub fn row_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Linker und rechter Vertex einer Zeile.
    pub fn row(&self, row: usize) -> Option<[Vec3; 2]> {
        let i = row * 2;
        Some([*self.positions.get(i)?, *self.positions.get(i + 1)?])
    }

    /// Schreibt eine einzelne Zeile neu (gleiche Formel wie [`synthesize`])
    /// und berechnet anschließend die Normalen.
    ///
    /// Gibt `false` zurück, wenn Zeile oder Zeilenanzahl nicht zu `params` passen.
    pub fn patch_row(&mut self, params: &CardParams, row: usize) -> bool {
        if row >= self.row_count() || self.row_count() != params.row_count() {
            return false;
        }
        let [left, right] = row_positions(params, row, params.segment_offset(row));
        self.positions[row * 2] = left;
        self.positions[row * 2 + 1] = right;
        self.recompute_normals();
        true
    }

    /// Flächengewichtete Vertex-Normalen aus den aktuellen Positionen.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            let face = (pc - pb).cross(pa - pb);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}

/// Erzeugt die vollständige Card-Geometrie aus den Parametern.
///
/// `segment_count` wird auf ≥ 1 geklemmt. Passt die Länge der Segment-Offsets
/// nicht zur Zeilenanzahl, wird mit genullten Offsets synthetisiert (Warnung).
pub fn synthesize(params: &CardParams) -> VertexBuffer {
    let rows = params.row_count();
    let offsets_valid = params.segment_offsets.len() == rows;
    if !offsets_valid {
        log::warn!(
            "Synthese mit {} Segment-Offsets für {} Zeilen, Offsets werden ignoriert",
            params.segment_offsets.len(),
            rows
        );
    }

    let mut positions = Vec::with_capacity(rows * 2);
    for row in 0..rows {
        let offset = if offsets_valid {
            params.segment_offsets[row]
        } else {
            Vec3::ZERO
        };
        let [left, right] = geometry_row(params, row);
        positions.push(left + offset);
        positions.push(right + offset);
    }

    // Wurzel in den lokalen Ursprung verschieben
    let shift = Vec3::new(0.0, -params.length * 0.5, 0.0);
    for p in &mut positions {
        *p += shift;
    }

    let segments = params.segments();
    let mut indices = Vec::with_capacity(segments as usize * 6);
    for r in 0..segments {
        let a = 2 * r;
        let b = 2 * r + 2;
        let c = 2 * r + 3;
        let d = 2 * r + 1;
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    let mut buffer = VertexBuffer {
        positions,
        normals: Vec::new(),
        indices,
    };
    buffer.recompute_normals();
    buffer
}

/// Zeile im zentrierten Geometrieraum (Wurzel bei `+length/2`), ohne Offset.
fn geometry_row(params: &CardParams, row: usize) -> [Vec3; 2] {
    let t = params.row_t(row);
    let y = params.length * 0.5 - t * params.length;
    let bend = params.curvature * t * t * params.length;
    let half_width = params.width * 0.5 * lerp(1.0, params.taper, t);
    [
        Vec3::new(-half_width, y, bend),
        Vec3::new(half_width, y, bend),
    ]
}

/// Zeile im lokalen Card-Raum inklusive Offset.
fn row_positions(params: &CardParams, row: usize, offset: Vec3) -> [Vec3; 2] {
    let shift = Vec3::new(0.0, -params.length * 0.5, 0.0);
    let [left, right] = geometry_row(params, row);
    [left + offset + shift, right + offset + shift]
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
