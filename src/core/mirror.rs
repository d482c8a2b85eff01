//! Spiegel-Platzierung: leitet aus einer Platzierung die symmetrische Zwillings-Card ab.

use super::transform::align_to_normal;
use super::Axis;
use glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Standard-Toleranz, unterhalb derer Original und Spiegelung als identisch gelten.
pub const DEFAULT_MIRROR_TOLERANCE: f32 = 1e-7;

/// Spiegelebene: Achse, Koordinate und Aktiv-Flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    #[serde(rename = "mirrorEnabled")]
    pub enabled: bool,
    #[serde(rename = "mirrorAxis")]
    pub axis: Axis,
    #[serde(rename = "mirrorPlane")]
    pub plane: f32,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: Axis::X,
            plane: 0.0,
        }
    }
}

impl MirrorConfig {
    /// Spiegelt einen Punkt an der Ebene.
    pub fn reflect_point(&self, p: Vec3) -> Vec3 {
        let mut out = p;
        let i = self.axis.index();
        out[i] = 2.0 * self.plane - p[i];
        out
    }

    /// Spiegelt eine Richtung (Komponente entlang der Achse negiert, normalisiert).
    pub fn reflect_normal(&self, n: Vec3) -> Vec3 {
        let mut out = n;
        let i = self.axis.index();
        out[i] = -n[i];
        out.normalize_or_zero()
    }
}

/// Ergebnis einer Spiegelung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredPlacement {
    pub position: Vec3,
    pub normal: Vec3,
    pub rotation: Quat,
}

/// Berechnet die gespiegelte Platzierung zu Weltposition und -normale einer Card.
///
/// Die Rotation wird aus der gespiegelten Normalen neu berechnet (keine
/// gespiegelte Quaternion, damit sich die Händigkeit nicht umkehrt).
/// Gibt `None` zurück, wenn die Spiegelung deaktiviert ist oder der Zwilling
/// innerhalb von `tolerance` mit dem Original zusammenfällt.
pub fn mirror_placement(
    config: &MirrorConfig,
    position: Vec3,
    normal: Vec3,
    tolerance: f32,
) -> Option<MirroredPlacement> {
    if !config.enabled {
        return None;
    }
    let normal = normal.normalize_or(Vec3::Z);
    let source_rotation = align_to_normal(normal);

    let mirrored_position = config.reflect_point(position);
    let mirrored_normal = config.reflect_normal(normal);
    let mirrored_rotation = align_to_normal(mirrored_normal);

    let same_position = mirrored_position.distance(position) < tolerance;
    let same_rotation = rotation_angle(mirrored_rotation, source_rotation) < tolerance;
    if same_position && same_rotation {
        log::debug!(
            "Spiegelung übersprungen: Card liegt auf der Spiegelebene ({:?} = {})",
            config.axis,
            config.plane
        );
        return None;
    }

    Some(MirroredPlacement {
        position: mirrored_position,
        normal: mirrored_normal,
        rotation: mirrored_rotation,
    })
}

/// Drehwinkel in Radiant zwischen zwei Orientierungen, wie `Quat::angle_between`.
///
/// Über `atan2` statt `acos`, damit fast gleiche Orientierungen nahe 0 bleiben.
fn rotation_angle(a: Quat, b: Quat) -> f32 {
    let (a, b) = (Vec4::from(a), Vec4::from(b));
    let b = if a.dot(b) < 0.0 { -b } else { b };
    4.0 * (a - b).length().atan2((a + b).length())
}
