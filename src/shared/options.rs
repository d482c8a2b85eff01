//! Zentrale Konfiguration für den Hair-Card-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl an Undo-Einträgen.
pub const HISTORY_LIMIT: usize = 500;

// ── Spiegelung ──────────────────────────────────────────────────────

/// Toleranz, unterhalb derer ein Spiegel-Zwilling als Duplikat gilt.
pub const MIRROR_TOLERANCE: f32 = crate::core::DEFAULT_MIRROR_TOLERANCE;

// ── Cards ───────────────────────────────────────────────────────────

/// Versatz duplizierter Cards (Welteinheiten).
pub const DUPLICATE_OFFSET: [f32; 3] = [0.005, 0.0, 0.0];
/// Handle-Radius relativ zur Modell-Skalierung.
pub const HANDLE_RADIUS_FACTOR: f32 = 0.005;

// ── Persistenz ──────────────────────────────────────────────────────

/// Schlüssel, unter dem die Sitzung im Session-Store abgelegt wird.
pub const STORAGE_KEY: &str = "hair_card_project_v1";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `hair_card_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl gespeicherter Undo-Schritte
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    // ── Spiegelung ──────────────────────────────────────────────
    /// Abstand, unterhalb dessen Original und Spiegelung als identisch gelten
    #[serde(default = "default_mirror_tolerance")]
    pub mirror_tolerance: f32,

    // ── Cards ───────────────────────────────────────────────────
    /// Versatz beim Duplizieren (verhindert exakte Überlappung)
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: [f32; 3],
    /// Handle-Radius als Anteil der Modell-Skalierung
    #[serde(default = "default_handle_radius_factor")]
    pub handle_radius_factor: f32,

    // ── Persistenz ──────────────────────────────────────────────
    /// Schlüssel im Session-Store
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_history_limit() -> usize {
    HISTORY_LIMIT
}

fn default_mirror_tolerance() -> f32 {
    MIRROR_TOLERANCE
}

fn default_duplicate_offset() -> [f32; 3] {
    DUPLICATE_OFFSET
}

fn default_handle_radius_factor() -> f32 {
    HANDLE_RADIUS_FACTOR
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: HISTORY_LIMIT,
            mirror_tolerance: MIRROR_TOLERANCE,
            duplicate_offset: DUPLICATE_OFFSET,
            handle_radius_factor: HANDLE_RADIUS_FACTOR,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fallback auf Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hair_card_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hair_card_editor.toml")
    }

    /// Versatz beim Duplizieren als Vektor.
    pub fn duplicate_offset_vec(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.duplicate_offset)
    }

    /// Effektive History-Kapazität (mindestens 1).
    pub fn history_capacity(&self) -> usize {
        self.history_limit.max(1)
    }
}
