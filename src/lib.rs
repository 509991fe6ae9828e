//! MoveEffect-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, SelectionMachine, SelectionNotification,
    SelectionState, UiState, ViewState,
};
pub use core::{CroppedRegion, IntRect, PathShape, Point, Region, ReplicationVector};
pub use shared::{EditorOptions, RenderScene};
