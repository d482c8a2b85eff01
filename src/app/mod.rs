//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod export;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod picking;
pub mod segment_handles;
pub mod session;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Cards, Selektion, Parameter, History).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use export::{export_items, ExportItem};
pub use history::{EditHistory, HistoryEntry};
pub use picking::{PickHit, PickTarget};
pub use segment_handles::{HandlePhase, SegmentHandle, SegmentHandleController};
pub use session::{
    FileSessionStore, MemorySessionStore, RestoreReport, SessionRecord, SessionStore,
};
pub use state::{AppState, EditorMode, HairMaterial, ParamEdit, PlaceParams, SelectionState, ViewFlags};
