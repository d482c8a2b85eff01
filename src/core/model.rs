//! Importiertes Basismodell (nur die für den Kern relevanten Eckdaten).

use glam::Vec3;

/// Vom Import-Kollaborateur geliefertes, fertig dekodiertes Modell.
///
/// Der Kern benötigt nur die Bounding-Box (Skalierung, Spiegelebenen-Zentrum);
/// Raycasts auf die Oberfläche übernimmt der Picking-Kollaborateur.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedModel {
    /// Dateiname oder Anzeigename
    pub name: String,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
}

impl ImportedModel {
    pub fn new(name: impl Into<String>, bounds_min: Vec3, bounds_max: Vec3) -> Self {
        Self {
            name: name.into(),
            bounds_min,
            bounds_max,
        }
    }

    /// Gibt `true` zurück, wenn die Bounding-Box leer oder ungültig ist.
    pub fn is_empty(&self) -> bool {
        !(self.bounds_min.is_finite() && self.bounds_max.is_finite())
            || self.bounds_max.cmplt(self.bounds_min).any()
    }

    /// Mittelpunkt der Bounding-Box.
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        (self.bounds_min + self.bounds_max) * 0.5
    }

    /// Modell-Skalierung: größte Ausdehnung der Bounding-Box (1.0 bei leerer/entarteter Box).
    pub fn scale(&self) -> f32 {
        if self.is_empty() {
            return 1.0;
        }
        let max_dim = (self.bounds_max - self.bounds_min).max_element();
        if max_dim > 0.0 {
            max_dim
        } else {
            1.0
        }
    }
}
