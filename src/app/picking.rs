//! Ergebnis eines Picks durch den Render-/Picking-Kollaborateur.
//!
//! Der Kern führt selbst keine Strahl-Szenen-Schnitte aus; er konsumiert nur
//! Trefferpunkt, Oberflächennormale und getroffenes Objekt.

use crate::core::CardId;
use glam::Vec3;

/// Getroffenes Objekt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Oberfläche des importierten Modells
    Model,
    /// Eine Hair-Card
    Card(CardId),
    /// Segment-Handle der aktiven Card
    SegmentHandle { row: usize },
}

/// Treffer eines Zeigerstrahls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub point: Vec3,
    /// Oberflächennormale in Weltkoordinaten
    pub normal: Vec3,
    pub target: PickTarget,
}

impl PickHit {
    /// Treffer auf der Modelloberfläche.
    pub fn model(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal,
            target: PickTarget::Model,
        }
    }

    pub fn card(id: CardId, point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal,
            target: PickTarget::Card(id),
        }
    }

    pub fn segment_handle(row: usize, point: Vec3) -> Self {
        Self {
            point,
            normal: Vec3::ZERO,
            target: PickTarget::SegmentHandle { row },
        }
    }
}
