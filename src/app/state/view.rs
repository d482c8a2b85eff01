use serde::{Deserialize, Serialize};

/// Overlay-Darstellung auf dem Basismodell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayMode {
    #[default]
    Off,
    Edges,
    Verts,
    Normals,
}

/// View-Schalter, die in Snapshots und Sitzungen mitgespeichert werden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewFlags {
    /// Achsenkreuz im Ursprung
    pub show_axes: bool,
    /// Bodenraster
    pub show_grid: bool,
    /// Schachbrett-Boden
    pub show_floor: bool,
    /// Modell-Overlay
    pub overlay: OverlayMode,
    /// Jede n-te Normale im Normalen-Overlay
    pub overlay_normals_density: u32,
    /// Länge der Overlay-Normalen
    pub overlay_normals_length: f32,
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self {
            show_axes: true,
            show_grid: true,
            show_floor: true,
            overlay: OverlayMode::Off,
            overlay_normals_density: 4,
            overlay_normals_length: 0.03,
        }
    }
}
