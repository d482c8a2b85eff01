//! Hair-Card-Editor Library.
//! Kern (Geometrie, Cards, Spiegelung) und Application-Layer (Controller,
//! Selektion, Segment-Handles, History, Sitzungen) ohne Render-/UI-Abhängigkeiten.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, ParamEdit, PickHit, PickTarget,
    PlaceParams,
};
pub use core::{
    align_to_normal, mirror_placement, synthesize, Axis, Card, CardCollection, CardId, CardParams,
    CardParamsPatch, CardRecord, ImportedModel, MirrorConfig, StrandTextureParams, Transform,
    VertexBuffer,
};
pub use shared::EditorOptions;
