//! Use-Case-Funktionen für Bildaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::resize_to_fit;
use anyhow::{Context, Result};
use image::ImageEncoder;
use std::time::{SystemTime, UNIX_EPOCH};

/// Statusmeldung, wenn noch kein Overlay existiert.
pub const NOTHING_TO_SAVE_MESSAGE: &str = "Save after modification";

/// Öffnet den Öffnen-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt ein Bild, passt es an den Viewport an und setzt es als Quelle.
///
/// Die bisherige Selektion wird dabei verworfen.
pub fn load_image(state: &mut AppState, path: String) -> Result<()> {
    let decoded = image::open(&path)
        .with_context(|| format!("Bild konnte nicht geladen werden: {}", path))?
        .to_rgba8();
    let original_size = decoded.dimensions();

    let [max_w, max_h] = state.view.fit_box(state.options.viewport_padding);
    let fitted = resize_to_fit(decoded, max_w, max_h);

    log::info!(
        "Bild geladen: {} ({}x{} -> {}x{})",
        path,
        original_size.0,
        original_size.1,
        fitted.width(),
        fitted.height()
    );

    state.selection.set_source_image(fitted);
    state.view.image_dirty = true;
    state.ui.current_image_path = Some(path);
    state.ui.status_message = None;
    super::selection::sync_notifications(state);
    Ok(())
}

/// Bereitet das Speichern vor: Dialog anzeigen oder auf fehlendes Overlay hinweisen.
pub fn request_save(state: &mut AppState) {
    if state.selection.composed_image().is_none() {
        log::warn!("Speichern abgelehnt: kein Overlay vorhanden");
        state.ui.status_message = Some(NOTHING_TO_SAVE_MESSAGE.to_string());
        return;
    }
    state.ui.suggested_save_name = suggested_file_name();
    state.ui.show_save_file_dialog = true;
}

/// Schreibt das zusammengesetzte Bild als JPEG.
pub fn save_composed_image(state: &mut AppState, path: String) -> Result<()> {
    let Some(composed) = state.selection.composed_image() else {
        log::warn!("Speichern abgelehnt: kein Overlay vorhanden");
        state.ui.status_message = Some(NOTHING_TO_SAVE_MESSAGE.to_string());
        return Ok(());
    };

    let rgb_image = image::DynamicImage::ImageRgba8(composed).to_rgb8();
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Datei konnte nicht angelegt werden: {}", path))?;
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(file, state.options.jpeg_quality);
    encoder
        .write_image(
            rgb_image.as_raw(),
            rgb_image.width(),
            rgb_image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .context("Problem saving image")?;

    log::info!(
        "Bild gespeichert: {} (JPEG-Qualität {})",
        path,
        state.options.jpeg_quality
    );
    state.ui.status_message = Some(format!("Image saved: {}", path));
    Ok(())
}

/// Dateiname `m_<unix-millis>.jpg`.
pub fn suggested_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("m_{}.jpg", millis)
}
