//! Kachel-Compositor für den Bewegungs-Echo-Effekt.
//!
//! Zeichnet `repeat_count` verschobene, halbtransparente Kopien eines
//! Ausschnitts und darüber einmal das Original in voller Deckkraft.
//! Kacheln vollständig außerhalb der Leinwand werden übersprungen,
//! ihr Versatz zählt trotzdem für die folgenden Kacheln.

use super::geometry::{IntRect, Point, RectF};
use super::raster::CroppedRegion;
use glam::Vec2;
use image::{Rgba, RgbaImage};

/// Versatz pro Kopie und Anzahl der Kopien.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReplicationVector {
    pub step_x: f32,
    pub step_y: f32,
    pub repeat_count: u32,
}

impl ReplicationVector {
    /// Leitet den Schrittvektor aus Greif- und Ziehpunkt ab.
    ///
    /// `repeat_count` ist durch die Konfiguration nie 0; ein 0-Wert liefert
    /// den Nullvektor statt einer Division durch 0.
    pub fn from_drag(grab: Point, drag: Point, repeat_count: u32) -> Self {
        if repeat_count == 0 {
            return Self::default();
        }
        let step = (drag - grab) / repeat_count as f32;
        Self {
            step_x: step.x,
            step_y: step.y,
            repeat_count,
        }
    }

    pub fn step(&self) -> Vec2 {
        Vec2::new(self.step_x, self.step_y)
    }

    /// Nullvektor: es wird kein Overlay gezeichnet.
    pub fn is_zero(&self) -> bool {
        self.step_x == 0.0 && self.step_y == 0.0
    }
}

/// Platzierung einer einzelnen Kachel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Laufindex, beginnend bei 1
    pub index: u32,
    /// Verschobenes Zielrechteck
    pub rect: RectF,
    /// `false`, wenn die Kachel vollständig außerhalb der Leinwand liegt
    pub visible: bool,
}

/// Deckkraft einer Kopie aus dem 8-Bit-Alpha-Wert.
pub fn overlay_opacity(alpha: u8) -> f32 {
    alpha as f32 / 255.0
}

/// Plant alle Kacheln `base + i × step` für `i = 1..=repeat_count`.
///
/// Der Versatz wird vor jeder Kachel erhöht: die erste Kopie liegt bei
/// `base + step`, nicht auf dem Original. Beispiel: Ausschnitt links bei 100,
/// gegriffen bei x = 150, Schritt 20, 5 Kopien → linke Kanten 120, 140, …, 200.
/// Gemessen wird an der Ausschnittkante, nicht am Griffpunkt (also nicht
/// 150, 170, …, 230).
pub fn plan_tiles(
    base: IntRect,
    vector: &ReplicationVector,
    canvas_width: u32,
    canvas_height: u32,
) -> Vec<TilePlacement> {
    let base = base.to_rect_f();
    let step = vector.step();
    let mut offset = Vec2::ZERO;
    (1..=vector.repeat_count)
        .map(|index| {
            offset += step;
            let rect = base.offset(offset);
            TilePlacement {
                index,
                rect,
                visible: rect.intersects_canvas(canvas_width as f32, canvas_height as f32),
            }
        })
        .collect()
}

/// Zeichnet das Echo-Overlay auf `canvas`.
///
/// Gibt `false` zurück, wenn nichts gezeichnet wurde (leerer Ausschnitt
/// oder Nullvektor).
pub fn render(
    canvas: &mut RgbaImage,
    region: &CroppedRegion,
    base: IntRect,
    vector: &ReplicationVector,
    opacity: f32,
) -> bool {
    if region.is_empty() || base.is_empty() || vector.is_zero() {
        return false;
    }

    let tiles = plan_tiles(base, vector, canvas.width(), canvas.height());
    let culled = tiles.iter().filter(|t| !t.visible).count();
    for tile in tiles.iter().filter(|t| t.visible) {
        draw_stretched(canvas, &region.raster, tile.rect, opacity);
    }
    draw_stretched(canvas, &region.raster, base.to_rect_f(), 1.0);

    log::trace!(
        "Overlay gezeichnet: {} Kacheln, {} verworfen",
        tiles.len() - culled,
        culled
    );
    true
}

/// Zeichnet `src` gestreckt in `dest` (Nearest-Neighbour, Source-Over).
fn draw_stretched(canvas: &mut RgbaImage, src: &RgbaImage, dest: RectF, opacity: f32) {
    let left = dest.left.round() as i64;
    let top = dest.top.round() as i64;
    let width = dest.width().round() as i64;
    let height = dest.height().round() as i64;
    if width <= 0 || height <= 0 || src.width() == 0 || src.height() == 0 {
        return;
    }

    let x0 = left.max(0);
    let y0 = top.max(0);
    let x1 = (left + width).min(canvas.width() as i64);
    let y1 = (top + height).min(canvas.height() as i64);

    for y in y0..y1 {
        let sy = ((y - top) * src.height() as i64 / height) as u32;
        for x in x0..x1 {
            let sx = ((x - left) * src.width() as i64 / width) as u32;
            let source = src.get_pixel(sx, sy);
            if source.0[3] == 0 {
                continue;
            }
            let target = canvas.get_pixel_mut(x as u32, y as u32);
            *target = blend_over(*target, *source, opacity);
        }
    }
}

/// Straight-Alpha Source-Over.
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let sa = src.0[3] as f32 / 255.0 * opacity;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (src.0[c] as f32 * sa + dst.0[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}
