//! Lokale Transformation (Position, Rotation, nicht-uniforme Skalierung).

use super::Axis;
use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Referenzachse, die bei der Platzierung auf die Oberflächennormale gedreht wird.
pub const CARD_NORMAL_AXIS: Vec3 = Vec3::Z;

/// Position, Rotation (Einheitsquaternion) und Skalierung einer Card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Transformation für eine Platzierung auf einer Oberfläche.
    ///
    /// Die lokale +Z-Achse zeigt entlang der Normalen, die Wurzel liegt
    /// `root_offset` über dem Trefferpunkt.
    pub fn on_surface(point: Vec3, normal: Vec3, root_offset: f32) -> Self {
        let normal = normal.normalize_or(CARD_NORMAL_AXIS);
        Self {
            position: point + normal * root_offset,
            rotation: align_to_normal(normal),
            scale: Vec3::ONE,
        }
    }

    /// Affine Lokal→Welt-Matrix.
    pub fn matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Lokale Normalenrichtung (+Z) in Weltkoordinaten.
    pub fn normal(&self) -> Vec3 {
        self.rotation * CARD_NORMAL_AXIS
    }

    /// Inkrementelle Rotation um eine lokale Hauptachse.
    pub fn rotate_local(&mut self, axis: Axis, radians: f32) {
        self.rotation = (self.rotation * Quat::from_axis_angle(axis.unit(), radians)).normalize();
    }

    /// Gibt `true` zurück, wenn alle Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Kürzeste Rotation von [`CARD_NORMAL_AXIS`] auf die Zielnormale.
pub fn align_to_normal(normal: Vec3) -> Quat {
    Quat::from_rotation_arc(CARD_NORMAL_AXIS, normal.normalize_or(CARD_NORMAL_AXIS))
}
