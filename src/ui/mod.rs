//! UI-Komponenten: Menü, Einstellungs-Panel, Status-Bar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten erzeugen ausschließlich `AppIntent`s und mutieren
/// den AppState nicht direkt (Ausnahme: Dialog-Flags in `UiState`).
pub mod menu;
pub mod options_dialog;
pub mod settings_panel;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use settings_panel::render_selection_settings;
pub use status::render_status_bar;
