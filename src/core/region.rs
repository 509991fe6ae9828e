//! Rasterisierte Flächenabdeckung eines Pfads.
//!
//! Die Füllung nutzt die Nonzero-Winding-Regel: Pro Pixelzeile wird in der
//! Zeilenmitte (`y + 0.5`) mit allen Kanten des abgeflachten Polygons geschnitten.
//! Ein Pixel gilt als gefüllt, wenn seine Mitte in einem Intervall mit
//! Windungszahl ≠ 0 liegt. Zeilen mit identischen Spans werden zu Bändern
//! zusammengefasst.

use super::geometry::{IntRect, Point};
use super::path::{bounding_rect, PathShape};

/// Menge nicht überlappender Rechtecke, die das Innere eines Pfads abdecken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    rects: Vec<IntRect>,
}

/// Kantenschnitt mit einer Scanline: x-Position und Windungsrichtung.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    x: f32,
    winding: i32,
}

/// Offenes Band gleicher Zeilen-Spans.
struct Band {
    spans: Vec<(i32, i32)>,
    top: i32,
    bottom: i32,
}

impl Band {
    fn flush_into(self, rects: &mut Vec<IntRect>) {
        rects.extend(
            self.spans
                .iter()
                .map(|&(left, right)| IntRect::new(left, self.top, right, self.bottom)),
        );
    }
}

impl Region {
    /// Rasterisiert einen Pfad, beschnitten auf `bounding_rect(path)`.
    pub fn from_path(path: &PathShape) -> Self {
        let clip = bounding_rect(path);
        let polygon = path.flatten();
        if clip.is_empty() || polygon.len() < 3 {
            return Self::default();
        }

        let mut rects = Vec::new();
        let mut band: Option<Band> = None;

        for y in clip.top..clip.bottom {
            let spans = scanline_spans(&polygon, y as f32 + 0.5, &clip);

            match band.as_mut() {
                Some(open) if open.spans == spans && open.bottom == y => {
                    open.bottom += 1;
                    continue;
                }
                _ => {}
            }

            if let Some(done) = band.take() {
                done.flush_into(&mut rects);
            }
            if !spans.is_empty() {
                band = Some(Band {
                    spans,
                    top: y,
                    bottom: y + 1,
                });
            }
        }

        if let Some(done) = band {
            done.flush_into(&mut rects);
        }

        Self { rects }
    }

    /// Abdeckende Rechtecke (nicht überlappend).
    pub fn rects(&self) -> &[IntRect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Prüft, ob ein ganzzahliges Pixel abgedeckt ist.
    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Prüft, ob ein Punkt abgedeckt ist (Koordinaten Richtung Null abgeschnitten).
    pub fn contains(&self, point: Point) -> bool {
        self.contains_pixel(point.x as i32, point.y as i32)
    }

    /// Summe aller Rechteckflächen in Pixeln.
    pub fn total_area(&self) -> i64 {
        self.rects.iter().map(IntRect::area).sum()
    }

    /// Durchschnittliche Rechteckfläche (Gesamtfläche ÷ Rechteckanzahl).
    ///
    /// Nicht die eingeschlossene Fläche. Leere Region → 0.0.
    pub fn mean_rect_area(&self) -> f32 {
        if self.rects.is_empty() {
            return 0.0;
        }
        self.total_area() as f32 / self.rects.len() as f32
    }
}

/// Gefüllte Pixel-Spans `[left, right)` einer Scanline, sortiert und verschmolzen.
fn scanline_spans(polygon: &[Point], sample_y: f32, clip: &IntRect) -> Vec<(i32, i32)> {
    let mut crossings: Vec<Crossing> = Vec::new();
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y == b.y {
            continue;
        }
        let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
        if sample_y < lo || sample_y >= hi {
            continue;
        }
        let t = (sample_y - a.y) / (b.y - a.y);
        crossings.push(Crossing {
            x: a.x + t * (b.x - a.x),
            winding: if b.y > a.y { 1 } else { -1 },
        });
    }
    crossings.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut spans: Vec<(i32, i32)> = Vec::new();
    let mut winding = 0;
    let mut span_start = 0.0_f32;
    for crossing in crossings {
        let was_inside = winding != 0;
        winding += crossing.winding;
        let is_inside = winding != 0;

        if !was_inside && is_inside {
            span_start = crossing.x;
        } else if was_inside && !is_inside {
            // Pixel x ist gefüllt, wenn x + 0.5 im Intervall [start, end) liegt
            let left = ((span_start - 0.5).ceil() as i32).max(clip.left);
            let right = ((crossing.x - 0.5).ceil() as i32).min(clip.right);
            if left < right {
                match spans.last_mut() {
                    Some(last) if last.1 >= left => last.1 = last.1.max(right),
                    _ => spans.push((left, right)),
                }
            }
        }
    }
    spans
}

/// Rasterisiert einen Pfad zu seiner Flächenabdeckung.
pub fn rasterize_to_region(path: &PathShape) -> Region {
    Region::from_path(path)
}

/// Prüft, ob die Rasterabdeckung des Pfads den Punkt enthält.
pub fn contains_point(path: &PathShape, point: Point) -> bool {
    Region::from_path(path).contains(point)
}

/// Durchschnittliche Rechteckfläche der Rasterabdeckung des Pfads.
pub fn area(path: &PathShape) -> f32 {
    Region::from_path(path).mean_rect_area()
}
