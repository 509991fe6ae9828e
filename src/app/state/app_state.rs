use crate::app::selection::SelectionMachine;
use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Selektions-Engine (Quellbild, Pfad, Ausschnitt, Replikation)
    pub selection: SelectionMachine,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Standardwerte, Export)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    ///
    /// Kopien und Deckkraft der Engine starten mit den Standardwerten der Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            selection: SelectionMachine::with_settings(
                options.default_repeat_count,
                options.default_alpha,
            ),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt zurück, ob ein Bild geladen ist (für UI-Anzeige)
    pub fn has_image(&self) -> bool {
        self.selection.has_source_image()
    }

    /// Bildgröße in Pixeln, falls geladen.
    pub fn image_size(&self) -> Option<[u32; 2]> {
        self.selection
            .source_image()
            .map(|img| [img.width(), img.height()])
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
