//! Handler für Datei-Operationen (Bild öffnen, Bild speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Bild-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::image_io::request_open_file(state);
}

/// Lädt ein Bild aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::image_io::load_image(state, path)
}

/// Öffnet den Speichern-Dialog oder meldet, dass nichts zu speichern ist.
pub fn request_save(state: &mut AppState) {
    use_cases::image_io::request_save(state);
}

/// Speichert das zusammengesetzte Bild unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::image_io::save_composed_image(state, path)
}
