/// UI-bezogener Anwendungszustand (Dialoge, Panels, Meldungen)
#[derive(Debug, Default)]
pub struct UiState {
    /// Öffnen-Dialog im nächsten Frame anzeigen
    pub show_file_dialog: bool,
    /// Speichern-Dialog im nächsten Frame anzeigen
    pub show_save_file_dialog: bool,
    /// Vorgeschlagener Dateiname für den Speichern-Dialog
    pub suggested_save_name: String,
    /// Einstellungs-Panel (Kopien/Deckkraft) sichtbar
    pub show_selection_settings: bool,
    /// Pfad des aktuell geladenen Bildes
    pub current_image_path: Option<String>,
    /// Statusmeldung für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
