use super::super::picking::PickHit;
use super::super::state::{EditorMode, ParamEdit, ViewFlags};
use crate::core::{Axis, CardId, ImportedModel, StrandTextureParams, Transform};
use crate::shared::EditorOptions;
use glam::Vec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Import-Kollaborateur hat ein Modell fertig dekodiert
    ModelImported { model: ImportedModel },
    /// Modell entfernen
    ModelUnloaded,
    /// Textur geladen (`None` = Standardtextur)
    TextureLoaded { name: Option<String> },
    /// Strähnen-Textur mit diesen Parametern erzeugen
    StrandTextureRequested { params: StrandTextureParams },

    /// Zeiger gedrückt; `hit` ist das Ergebnis des Picking-Kollaborateurs
    PointerPressed {
        hit: Option<PickHit>,
        additive: bool,
        /// Orbit-Modifier gehalten (Kamera statt Platzierung)
        orbit_modifier: bool,
    },
    /// Gezogenes Segment-Handle hat eine neue Weltposition
    SegmentHandleDragged { world_position: Vec3 },
    /// Zeiger losgelassen
    PointerReleased,

    /// Editor-Modus wechseln
    SetModeRequested { mode: EditorMode },
    /// Segment-Bearbeitung umschalten
    SegmentEditToggled { enabled: bool },

    /// Card in der Liste angeklickt
    CardClicked { id: CardId, additive: bool },
    /// Checkbox einer Card in der Liste umgeschaltet
    CardCheckboxChanged { id: CardId, checked: bool },
    /// Alle Cards selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Selektierte Cards löschen
    DeleteSelectedRequested,
    /// Einzelne Card löschen (Listen-Button)
    DeleteCardRequested { id: CardId },
    /// Selektierte Cards duplizieren
    DuplicateSelectedRequested,
    /// Alle Cards entfernen
    ClearAllRequested,
    /// Card umbenennen
    RenameCardRequested { id: CardId, name: String },

    /// Platzierungsparameter geändert (`finished` = Regler losgelassen)
    ParamChanged { edit: ParamEdit, finished: bool },
    /// Rotations-Eingabe (absolute Grad) geändert
    RotationInputChanged {
        axis: Axis,
        degrees: f32,
        finished: bool,
    },
    /// Skalierungs-Eingabe (absolut) geändert
    ScaleInputChanged { value: f32, finished: bool },
    /// Selektierte Cards auf Oberflächennormalen ausrichten
    /// (Normalen liefert der Picking-Kollaborateur)
    AlignToNormalsRequested { normals: Vec<(CardId, Vec3)> },

    /// Gizmo-Drag einer Card
    CardTransformDragged { id: CardId, transform: Transform },
    /// Gizmo-Drag beendet
    CardTransformDragEnded,

    /// Spiegelung an/aus
    MirrorEnabledChanged { enabled: bool },
    /// Spiegelachse wechseln
    MirrorAxisChanged { axis: Axis },
    /// Spiegelebene verschieben (`finished` = Regler losgelassen)
    MirrorPlaneChanged { value: f32, finished: bool },
    /// Spiegelebene auf die Modellmitte setzen
    MirrorPlaneToModelCenterRequested,

    /// Material-Werte geändert
    MaterialChanged {
        alpha_test: Option<f32>,
        double_sided: Option<bool>,
        finished: bool,
    },
    /// View-Schalter geändert
    ViewFlagsChanged { view: ViewFlags },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Sitzung in der Ablage speichern
    SaveSessionRequested,
    /// Sitzung aus der Ablage laden
    LoadSessionRequested,
    /// Sitzung aus JSON-Text (z.B. Projektdatei) laden
    SessionImported { json: String },

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
