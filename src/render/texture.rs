//! Texture-Utilities für egui.

use image::RgbaImage;

/// Konvertiert ein RGBA-Bild (straight alpha) in ein egui-`ColorImage`.
pub fn color_image_from_rgba(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Lädt ein RGBA-Bild als egui-Textur hoch.
///
/// Nearest-Filter bei Vergrößerung.
pub fn upload_texture(ctx: &egui::Context, name: &str, image: &RgbaImage) -> egui::TextureHandle {
    log::debug!(
        "Erstelle Textur '{}': {}x{} Pixel, {} Bytes",
        name,
        image.width(),
        image.height(),
        image.as_raw().len()
    );
    ctx.load_texture(
        name,
        color_image_from_rgba(image),
        egui::TextureOptions {
            magnification: egui::TextureFilter::Nearest,
            ..Default::default()
        },
    )
}
