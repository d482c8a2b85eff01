use super::super::state::{EditorMode, ParamEdit, ViewFlags};
use crate::core::{Axis, CardId, ImportedModel, StrandTextureParams, Transform};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Modell übernehmen (Skalierung, Spiegelebene)
    LoadModel { model: ImportedModel },
    /// Modell entfernen
    UnloadModel,
    /// Textur setzen
    SetTexture { name: Option<String> },
    /// Strähnen-Textur erzeugen und als Material-Textur setzen
    GenerateStrandTexture { params: StrandTextureParams },

    /// Editor-Modus setzen
    SetMode { mode: EditorMode },
    /// Segment-Bearbeitung ein-/ausschalten
    SetSegmentEdit { enabled: bool },

    /// Card auf der Modelloberfläche platzieren (inkl. Spiegel-Zwilling)
    PlaceCard { point: Vec3, normal: Vec3 },

    /// Card selektieren (additiv = umschalten)
    SelectCard { id: CardId, additive: bool },
    /// Mitgliedschaft einer Card in der Selektion setzen
    SetCardChecked { id: CardId, checked: bool },
    /// Alle Cards selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,

    /// Segment-Drag starten
    BeginSegmentDrag { row: usize },
    /// Gezogenes Handle auf Weltposition setzen
    DragSegmentHandle { world_position: Vec3 },
    /// Segment-Drag beenden (ein History-Eintrag)
    EndSegmentDrag,

    /// Selektierte Cards löschen
    DeleteSelected,
    /// Einzelne Card löschen
    DeleteCard { id: CardId },
    /// Selektierte Cards duplizieren
    DuplicateSelected,
    /// Alle Cards entfernen
    ClearAll,
    /// Card umbenennen
    RenameCard { id: CardId, name: String },

    /// Parameter setzen und auf selektierte Cards anwenden
    ApplyParamEdit { edit: ParamEdit, commit: bool },
    /// Rotations-Eingabe anwenden (Delta zur Baseline)
    RotateSelected {
        axis: Axis,
        degrees: f32,
        commit: bool,
    },
    /// Skalierungs-Eingabe anwenden (Faktor zur Baseline)
    ScaleSelected { value: f32, commit: bool },
    /// Cards auf Normalen ausrichten
    AlignToNormals { normals: Vec<(CardId, Vec3)> },
    /// Transformation einer Card setzen (Gizmo, ohne History)
    SetCardTransform { id: CardId, transform: Transform },
    /// Gizmo-Drag abschließen (ein History-Eintrag)
    CommitCardTransform,

    /// Spiegelung an/aus
    SetMirrorEnabled { enabled: bool },
    /// Spiegelachse setzen
    SetMirrorAxis { axis: Axis },
    /// Spiegelebene setzen
    SetMirrorPlane { value: f32, commit: bool },
    /// Spiegelebene auf Modellmitte
    SetMirrorPlaneToModelCenter,

    /// Material aktualisieren
    UpdateMaterial {
        alpha_test: Option<f32>,
        double_sided: Option<bool>,
        commit: bool,
    },
    /// View-Schalter setzen
    SetViewFlags { view: ViewFlags },

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Sitzung in der Ablage speichern
    SaveSession,
    /// Sitzung aus der Ablage laden
    LoadSession,
    /// Sitzung aus JSON laden
    ImportSession { json: String },

    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

impl AppCommand {
    /// Commands, die einen laufenden Segment-Drag fortsetzen statt ihn abzuschließen.
    pub fn continues_segment_drag(&self) -> bool {
        matches!(self, Self::DragSegmentHandle { .. } | Self::EndSegmentDrag)
    }
}
