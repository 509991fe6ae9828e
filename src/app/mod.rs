//! Application-Layer: Controller, State, Events, Selektions-Engine und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod selection;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Bild, View, UI-Flags).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use selection::{SelectionMachine, SelectionNotification, SelectionState};
pub use state::{AppState, UiState, ViewState};
