use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Öffnen-Dialog anzeigen
    RequestOpenFileDialog,
    /// Bild laden, an den Viewport anpassen und als Quelle setzen
    LoadImage { path: String },
    /// Speichern vorbereiten (Dialog oder Hinweis "nichts zu speichern")
    RequestSaveDialog,
    /// Zusammengesetztes Bild als JPEG schreiben
    SaveImage { path: String },
    /// Anwendung beenden
    RequestExit,
    /// Selektion verwerfen
    ResetSelection,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Zeigerereignisse an die Selektions-Engine
    PointerDown { pos: glam::Vec2 },
    PointerMove { pos: glam::Vec2 },
    PointerUp { pos: glam::Vec2 },
    /// Anzahl Kopien setzen (wird geklemmt)
    SetRepeatCount { value: i32 },
    /// Deckkraft der Kopien setzen (wird geklemmt)
    SetOverlayAlpha { value: i32 },
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen und speichern
    ResetOptions,
    /// Statusmeldung entfernen
    ClearStatusMessage,
}
