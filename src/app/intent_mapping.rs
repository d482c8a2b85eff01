//! Mapping von UI-Intents auf mutierende App-Commands.

use super::picking::{PickHit, PickTarget};
use super::segment_handles::HandlePhase;
use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ModelImported { model } => vec![AppCommand::LoadModel { model }],
        AppIntent::ModelUnloaded => vec![AppCommand::UnloadModel],
        AppIntent::TextureLoaded { name } => vec![AppCommand::SetTexture { name }],
        AppIntent::StrandTextureRequested { params } => {
            vec![AppCommand::GenerateStrandTexture { params }]
        }

        AppIntent::PointerPressed {
            hit,
            additive,
            orbit_modifier,
        } => map_pointer_pressed(state, hit, additive, orbit_modifier),
        AppIntent::SegmentHandleDragged { world_position } => {
            if state.handles.phase() == HandlePhase::Dragging {
                vec![AppCommand::DragSegmentHandle { world_position }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => {
            if state.handles.phase() == HandlePhase::Dragging {
                vec![AppCommand::EndSegmentDrag]
            } else if state.editor.transform_dragging {
                vec![AppCommand::CommitCardTransform]
            } else {
                vec![]
            }
        }

        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::SegmentEditToggled { enabled } => vec![AppCommand::SetSegmentEdit { enabled }],

        AppIntent::CardClicked { id, additive } => vec![AppCommand::SelectCard { id, additive }],
        AppIntent::CardCheckboxChanged { id, checked } => {
            vec![AppCommand::SetCardChecked { id, checked }]
        }
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::DeleteCardRequested { id } => vec![AppCommand::DeleteCard { id }],
        AppIntent::DuplicateSelectedRequested => vec![AppCommand::DuplicateSelected],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::RenameCardRequested { id, name } => vec![AppCommand::RenameCard { id, name }],

        AppIntent::ParamChanged { edit, finished } => vec![AppCommand::ApplyParamEdit {
            edit,
            commit: finished,
        }],
        AppIntent::RotationInputChanged {
            axis,
            degrees,
            finished,
        } => vec![AppCommand::RotateSelected {
            axis,
            degrees,
            commit: finished,
        }],
        AppIntent::ScaleInputChanged { value, finished } => vec![AppCommand::ScaleSelected {
            value,
            commit: finished,
        }],
        AppIntent::AlignToNormalsRequested { normals } => {
            vec![AppCommand::AlignToNormals { normals }]
        }

        AppIntent::CardTransformDragged { id, transform } => {
            vec![AppCommand::SetCardTransform { id, transform }]
        }
        AppIntent::CardTransformDragEnded => {
            if state.editor.transform_dragging {
                vec![AppCommand::CommitCardTransform]
            } else {
                vec![]
            }
        }

        AppIntent::MirrorEnabledChanged { enabled } => {
            vec![AppCommand::SetMirrorEnabled { enabled }]
        }
        AppIntent::MirrorAxisChanged { axis } => vec![AppCommand::SetMirrorAxis { axis }],
        AppIntent::MirrorPlaneChanged { value, finished } => vec![AppCommand::SetMirrorPlane {
            value,
            commit: finished,
        }],
        AppIntent::MirrorPlaneToModelCenterRequested => {
            vec![AppCommand::SetMirrorPlaneToModelCenter]
        }

        AppIntent::MaterialChanged {
            alpha_test,
            double_sided,
            finished,
        } => vec![AppCommand::UpdateMaterial {
            alpha_test,
            double_sided,
            commit: finished,
        }],
        AppIntent::ViewFlagsChanged { view } => vec![AppCommand::SetViewFlags { view }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::SaveSessionRequested => vec![AppCommand::SaveSession],
        AppIntent::LoadSessionRequested => vec![AppCommand::LoadSession],
        AppIntent::SessionImported { json } => vec![AppCommand::ImportSession { json }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Zeiger-Druck je nach Modus: Platzieren, Handle-Drag oder Card-Selektion.
fn map_pointer_pressed(
    state: &AppState,
    hit: Option<PickHit>,
    additive: bool,
    orbit_modifier: bool,
) -> Vec<AppCommand> {
    let Some(hit) = hit else {
        // Fehlklick lässt die Selektion unverändert
        return vec![];
    };

    match state.editor.mode {
        EditorMode::Place => {
            if orbit_modifier || state.model.is_none() {
                return vec![];
            }
            match hit.target {
                PickTarget::Model => vec![AppCommand::PlaceCard {
                    point: hit.point,
                    normal: hit.normal,
                }],
                _ => vec![],
            }
        }
        EditorMode::Select => match hit.target {
            PickTarget::SegmentHandle { row }
                if state.editor.segment_edit_enabled
                    && state.handles.phase() == HandlePhase::Built =>
            {
                vec![AppCommand::BeginSegmentDrag { row }]
            }
            PickTarget::Card(id) => vec![AppCommand::SelectCard { id, additive }],
            _ => vec![],
        },
    }
}
