//! Rendering mit dem egui-Painter.
//!
//! Quellbild und Echo-Overlay werden als Texturen gehalten und nur neu
//! hochgeladen, wenn sich Bild bzw. Overlay-Revision ändern.

mod outline;
mod texture;

pub use crate::shared::RenderScene;
pub(crate) use outline::color32;
pub use outline::paint_outline;
pub use texture::{color_image_from_rgba, upload_texture};

use image::RgbaImage;

/// Haupt-Renderer für Bild, Pfad und Overlay.
#[derive(Default)]
pub struct Renderer {
    image_texture: Option<egui::TextureHandle>,
    overlay_texture: Option<egui::TextureHandle>,
    overlay_revision: Option<u64>,
}

impl Renderer {
    /// Erstellt einen Renderer ohne Texturen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt oder entfernt die Textur des Quellbildes.
    pub fn set_image(&mut self, ctx: &egui::Context, image: Option<&RgbaImage>) {
        self.image_texture = image.map(|img| upload_texture(ctx, "source_image", img));
        self.overlay_texture = None;
        self.overlay_revision = None;
        log::info!(
            "Quellbild im Renderer {}",
            if self.image_texture.is_some() {
                "hochgeladen"
            } else {
                "entfernt"
            }
        );
    }

    /// Aktualisiert die Overlay-Textur, falls sich die Revision geändert hat.
    ///
    /// `render_overlay` wird nur bei geänderter Revision aufgerufen.
    pub fn sync_overlay<F>(&mut self, ctx: &egui::Context, revision: u64, render_overlay: F)
    where
        F: FnOnce() -> Option<RgbaImage>,
    {
        if self.overlay_revision == Some(revision) {
            return;
        }
        self.overlay_revision = Some(revision);
        let previous = self.overlay_texture.take();
        self.overlay_texture = match (render_overlay(), previous) {
            (Some(img), Some(mut handle)) => {
                handle.set(color_image_from_rgba(&img), egui::TextureOptions::NEAREST);
                Some(handle)
            }
            (Some(img), None) => Some(upload_texture(ctx, "echo_overlay", &img)),
            (None, _) => None,
        };
    }

    /// Zeichnet die komplette Szene in `viewport`.
    pub fn paint(&self, painter: &egui::Painter, viewport: egui::Rect, scene: &RenderScene) {
        let Some([width, height]) = scene.image_size else {
            return;
        };
        let origin = viewport.min + egui::vec2(scene.image_offset.x, scene.image_offset.y);
        let image_rect =
            egui::Rect::from_min_size(origin, egui::vec2(width as f32, height as f32));
        let uv = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));

        if let Some(texture) = &self.image_texture {
            painter.image(texture.id(), image_rect, uv, egui::Color32::WHITE);
        }

        paint_outline(painter, origin, scene);

        if let Some(texture) = &self.overlay_texture {
            painter.image(texture.id(), image_rect, uv, egui::Color32::WHITE);
        }
    }
}
