use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Bild öffnen (zeigt Dateidialog)
    OpenImageRequested,
    /// Bilddatei im Dialog gewählt
    ImageFileSelected { path: String },
    /// Zusammengesetztes Bild speichern (zeigt Dateidialog)
    SaveRequested,
    /// Zielpfad im Speichern-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
    /// Aktuelle Selektion verwerfen
    ResetSelectionRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zeiger gedrückt (bildlokale Pixel)
    PointerPressed {
        pos: glam::Vec2,
        inside_image: bool,
    },
    /// Zeiger bewegt (bildlokale Pixel)
    PointerMoved {
        pos: glam::Vec2,
        inside_image: bool,
    },
    /// Zeiger losgelassen (bildlokale Pixel)
    PointerReleased {
        pos: glam::Vec2,
        inside_image: bool,
    },
    /// Schieberegler "Kopien" geändert
    RepeatCountChanged { value: i32 },
    /// Schieberegler "Deckkraft" geändert
    OverlayAlphaChanged { value: i32 },
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusmeldung ausblenden
    StatusMessageDismissed,
}
