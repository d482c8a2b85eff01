//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; danach wird der
    /// abgeleitete Zustand (Selektion, Handles) abgeglichen.
    ///
    /// Ein laufender Segment-Drag wird vor jedem fremden Command abgeschlossen.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        if !command.continues_segment_drag() {
            state.finish_segment_drag();
        }
        let result = Self::dispatch(state, command);
        state.sync_derived_state();
        result
    }

    fn dispatch(state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Datei-I/O & Modell ===
            AppCommand::LoadModel { model } => handlers::file_io::load_model(state, model),
            AppCommand::UnloadModel => handlers::file_io::unload_model(state),
            AppCommand::SaveSession => handlers::file_io::save_session(state)?,
            AppCommand::LoadSession => handlers::file_io::load_session(state)?,
            AppCommand::ImportSession { json } => handlers::file_io::import_session(state, &json)?,

            // === Selektion ===
            AppCommand::SelectCard { id, additive } => {
                handlers::selection::select_card(state, id, additive)
            }
            AppCommand::SetCardChecked { id, checked } => {
                handlers::selection::set_card_checked(state, id, checked)
            }
            AppCommand::SelectAll => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::PlaceCard { point, normal } => {
                handlers::editing::place_card(state, point, normal)
            }
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::DeleteCard { id } => handlers::editing::delete_card(state, id),
            AppCommand::DuplicateSelected => handlers::editing::duplicate_selected(state),
            AppCommand::ClearAll => handlers::editing::clear_all(state),
            AppCommand::RenameCard { id, name } => handlers::editing::rename_card(state, id, &name),
            AppCommand::ApplyParamEdit { edit, commit } => {
                handlers::editing::apply_param_edit(state, edit, commit)
            }
            AppCommand::RotateSelected {
                axis,
                degrees,
                commit,
            } => handlers::editing::rotate_selected(state, axis, degrees, commit),
            AppCommand::ScaleSelected { value, commit } => {
                handlers::editing::scale_selected(state, value, commit)
            }
            AppCommand::AlignToNormals { normals } => {
                handlers::editing::align_to_normals(state, &normals)
            }
            AppCommand::SetCardTransform { id, transform } => {
                handlers::editing::set_card_transform(state, id, transform)
            }
            AppCommand::CommitCardTransform => handlers::editing::commit_card_transform(state),

            // === Segment-Handles ===
            AppCommand::SetSegmentEdit { enabled } => {
                handlers::segment_edit::set_enabled(state, enabled)
            }
            AppCommand::BeginSegmentDrag { row } => handlers::segment_edit::begin_drag(state, row),
            AppCommand::DragSegmentHandle { world_position } => {
                handlers::segment_edit::drag(state, world_position)
            }
            AppCommand::EndSegmentDrag => handlers::segment_edit::end_drag(state),

            // === Spiegelung ===
            AppCommand::SetMirrorEnabled { enabled } => {
                handlers::mirror::set_enabled(state, enabled)
            }
            AppCommand::SetMirrorAxis { axis } => handlers::mirror::set_axis(state, axis),
            AppCommand::SetMirrorPlane { value, commit } => {
                handlers::mirror::set_plane(state, value, commit)
            }
            AppCommand::SetMirrorPlaneToModelCenter => {
                handlers::mirror::set_plane_to_model_center(state)
            }

            // === View & Material ===
            AppCommand::SetMode { mode } => handlers::view::set_mode(state, mode),
            AppCommand::SetViewFlags { view } => handlers::view::set_view_flags(state, view),
            AppCommand::UpdateMaterial {
                alpha_test,
                double_sided,
                commit,
            } => handlers::view::update_material(state, alpha_test, double_sided, commit),
            AppCommand::SetTexture { name } => handlers::view::set_texture(state, name),
            AppCommand::GenerateStrandTexture { params } => {
                handlers::view::generate_strand_texture(state, &params)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }
}
