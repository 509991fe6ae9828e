//! Zeichnet Selektionspfad und Startpunkt-Marker.

use crate::shared::RenderScene;
use egui::{Color32, Painter, Pos2, Shape, Stroke};

/// Wandelt eine RGBA-Option (0.0–1.0) in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Zeichnet den Marker und danach den Pfad (Pfad liegt über dem Marker).
pub fn paint_outline(painter: &Painter, origin: Pos2, scene: &RenderScene) {
    let options = &scene.options;

    if let Some(marker) = scene.marker {
        painter.circle_filled(
            origin + egui::vec2(marker.x, marker.y),
            scene.marker_radius,
            color32(options.marker_color),
        );
    }

    if scene.outline.len() < 2 {
        return;
    }
    let points: Vec<Pos2> = scene
        .outline
        .iter()
        .map(|p| origin + egui::vec2(p.x, p.y))
        .collect();
    let stroke = Stroke::new(options.path_line_width, color32(options.path_line_color));
    let shape = if scene.outline_closed {
        Shape::closed_line(points, stroke)
    } else {
        Shape::line(points, stroke)
    };
    painter.add(shape);
}
