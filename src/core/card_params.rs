//! Deformations-Parameter einer Hair-Card.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Parameter einer einzelnen Hair-Card (Modell-Einheiten).
///
/// Invariante: `segment_offsets.len() == segment_count + 1`. Jede Änderung
/// von `segment_count` läuft über [`CardParams::set_segment_count`], das die
/// Offsets indexerhaltend neu dimensioniert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParams {
    /// Breite an der Wurzel
    pub width: f32,
    /// Länge von Wurzel bis Spitze
    pub length: f32,
    /// Anzahl der Quads entlang der Länge (≥ 1)
    #[serde(rename = "segments")]
    pub segment_count: u32,
    /// Biegung entlang der Card-Normalen (typisch -1..1)
    pub curvature: f32,
    /// Breitenfaktor an der Spitze (typisch 0..1)
    pub taper: f32,
    /// Abstand der Wurzel von der Oberfläche
    #[serde(rename = "offset", default)]
    pub root_offset: f32,
    /// Manuelle Verschiebung je Geometriezeile (Index 0 = Wurzel)
    #[serde(default)]
    pub segment_offsets: Vec<Vec3>,
}

impl CardParams {
    /// Erstellt Parameter mit genullten Segment-Offsets.
    pub fn new(
        width: f32,
        length: f32,
        segment_count: u32,
        curvature: f32,
        taper: f32,
        root_offset: f32,
    ) -> Self {
        let segment_count = segment_count.max(1);
        Self {
            width,
            length,
            segment_count,
            curvature,
            taper,
            root_offset,
            segment_offsets: vec![Vec3::ZERO; segment_count as usize + 1],
        }
    }

    /// Segmentanzahl nach Klemmung auf ≥ 1.
    pub fn segments(&self) -> u32 {
        self.segment_count.max(1)
    }

    /// Anzahl der Geometriezeilen (Wurzel bis Spitze).
    pub fn row_count(&self) -> usize {
        self.segments() as usize + 1
    }

    /// Normierter Zeilenparameter: 0 an der Wurzel, 1 an der Spitze.
    pub fn row_t(&self, row: usize) -> f32 {
        row as f32 / self.segments() as f32
    }

    /// Setzt die Segmentanzahl und passt die Offsets an.
    ///
    /// Bestehende Einträge bleiben per Index erhalten, neue Zeilen starten bei null.
    pub fn set_segment_count(&mut self, segment_count: u32) {
        self.segment_count = segment_count.max(1);
        self.segment_offsets.resize(self.row_count(), Vec3::ZERO);
    }

    /// Prüft die Offset-Invariante.
    pub fn offsets_consistent(&self) -> bool {
        self.segment_count >= 1 && self.segment_offsets.len() == self.row_count()
    }

    /// Repariert eine verletzte Offset-Invariante (Offsets werden genullt).
    ///
    /// Gibt `true` zurück, wenn repariert werden musste.
    pub fn repair_segment_offsets(&mut self) -> bool {
        if self.offsets_consistent() {
            return false;
        }
        log::warn!(
            "Segment-Offsets inkonsistent ({} Einträge für {} Zeilen), werden genullt",
            self.segment_offsets.len(),
            self.row_count()
        );
        self.segment_count = self.segments();
        self.segment_offsets = vec![Vec3::ZERO; self.row_count()];
        true
    }

    /// Offset einer Zeile (null für ungültige Zeilen).
    pub fn segment_offset(&self, row: usize) -> Vec3 {
        self.segment_offsets.get(row).copied().unwrap_or(Vec3::ZERO)
    }

    /// Mittelpunkt einer Zeile ohne Segment-Offset, im lokalen Card-Raum
    /// (Wurzel im Ursprung, Spitze bei `-length` entlang Y, Biegung entlang +Z).
    pub fn base_row_center(&self, row: usize) -> Vec3 {
        let t = self.row_t(row);
        Vec3::new(0.0, -t * self.length, self.curvature * t * t * self.length)
    }

    /// Mittelpunkt einer Zeile inklusive Segment-Offset (lokaler Card-Raum).
    pub fn row_center(&self, row: usize) -> Vec3 {
        self.base_row_center(row) + self.segment_offset(row)
    }

    /// Übernimmt alle gesetzten Felder eines Patches.
    pub fn apply_patch(&mut self, patch: &CardParamsPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(length) = patch.length {
            self.length = length;
        }
        if let Some(curvature) = patch.curvature {
            self.curvature = curvature;
        }
        if let Some(taper) = patch.taper {
            self.taper = taper;
        }
        if let Some(root_offset) = patch.root_offset {
            self.root_offset = root_offset;
        }
        if let Some(offsets) = &patch.segment_offsets {
            self.segment_offsets = offsets.clone();
        }
        match patch.segment_count {
            Some(count) => self.set_segment_count(count),
            None => {
                self.repair_segment_offsets();
            }
        }
    }

    /// Gibt `true` zurück, wenn alle Zahlenwerte endlich sind.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite()
            && self.length.is_finite()
            && self.curvature.is_finite()
            && self.taper.is_finite()
            && self.root_offset.is_finite()
            && self.segment_offsets.iter().all(|o| o.is_finite())
    }
}

/// Teiländerung von [`CardParams`]; `None` lässt ein Feld unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardParamsPatch {
    pub width: Option<f32>,
    pub length: Option<f32>,
    pub segment_count: Option<u32>,
    pub curvature: Option<f32>,
    pub taper: Option<f32>,
    pub root_offset: Option<f32>,
    pub segment_offsets: Option<Vec<Vec3>>,
}

impl CardParamsPatch {
    /// Gibt `true` zurück, wenn der Patch nichts ändert.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
