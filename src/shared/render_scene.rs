//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Pixeldaten (Quellbild, Overlay) sind nicht enthalten; der Renderer
//! lädt sie nur bei geänderter Overlay-Revision der Engine als Textur hoch.

use super::options::EditorOptions;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Größe des Quellbildes (None = kein Bild geladen)
    pub image_size: Option<[u32; 2]>,
    /// Linke obere Bildecke relativ zum Viewport
    pub image_offset: Vec2,
    /// Startpunkt-Marker in Bildkoordinaten
    pub marker: Option<Vec2>,
    /// Radius des Markers in Pixeln
    pub marker_radius: f32,
    /// Abgeflachter Selektionspfad in Bildkoordinaten
    pub outline: Vec<Vec2>,
    /// Ob der Pfad geschlossen ist
    pub outline_closed: bool,
    /// Ob die Selektion gerade gezogen wird
    pub dragging: bool,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Bild für Rendering vorhanden ist.
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }
}
