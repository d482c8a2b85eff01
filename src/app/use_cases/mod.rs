//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod file_io;
pub mod mirror;
pub mod placement;
pub mod segment_edit;
pub mod selection;
pub mod view;
