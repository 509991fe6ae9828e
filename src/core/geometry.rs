//! Geometrie-Grundtypen: Punkte, Rechtecke, Abstandsfunktionen.

use crate::shared::options::INTERSECT_DEVIATION;
use glam::Vec2;

/// Punkt im lokalen Pixelraum des Views.
pub type Point = Vec2;

/// Prüft, ob `candidate` in der achsenparallelen Box mit halber Kantenlänge
/// `INTERSECT_DEVIATION` um `target` liegt (kein Kreis-Test).
pub fn lazy_match(target: Point, candidate: Point) -> bool {
    (candidate.x - target.x).abs() < INTERSECT_DEVIATION
        && (candidate.y - target.y).abs() < INTERSECT_DEVIATION
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Point, b: Point) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Ganzzahliges Rechteck, `right`/`bottom` exklusiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    /// Erstellt ein Rechteck aus seinen Kanten.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rechteck ab Ursprung mit gegebener Größe.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Fläche in Pixeln (0 bei degenerierten Rechtecken).
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width() as i64 * self.height() as i64
        }
    }

    /// `true`, wenn Breite oder Höhe nicht positiv ist.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Halboffener Enthaltensein-Test für ganzzahlige Koordinaten.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Schnittmenge zweier Rechtecke, `None` wenn leer.
    pub fn intersect(&self, other: &IntRect) -> Option<IntRect> {
        let rect = IntRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        (!rect.is_empty()).then_some(rect)
    }

    /// Verschiebt das Rechteck um ganzzahlige Deltas.
    pub fn translate(&self, dx: i32, dy: i32) -> IntRect {
        IntRect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Float-Variante für Kachel-Platzierung.
    pub fn to_rect_f(&self) -> RectF {
        RectF::new(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

/// Float-Rechteck für verschobene Kacheln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Verschiebt das Rechteck um einen Vektor.
    pub fn offset(&self, delta: Vec2) -> RectF {
        RectF::new(
            self.left + delta.x,
            self.top + delta.y,
            self.right + delta.x,
            self.bottom + delta.y,
        )
    }

    /// `true`, wenn sich das Rechteck mit `[0, width) × [0, height)` überschneidet.
    pub fn intersects_canvas(&self, width: f32, height: f32) -> bool {
        self.right > 0.0 && self.bottom > 0.0 && self.left < width && self.top < height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lazy_match_accepts_identical_points() {
        let p = Vec2::new(123.5, -7.25);
        assert!(lazy_match(p, p));
    }

    #[test]
    fn lazy_match_is_a_box_not_a_circle() {
        let target = Vec2::new(100.0, 100.0);
        // Diagonal ~21 px entfernt, aber innerhalb der Box
        assert!(lazy_match(target, Vec2::new(115.0, 115.0)));
        assert!(!lazy_match(target, Vec2::new(116.0, 100.0)));
        assert!(!lazy_match(target, Vec2::new(100.0, 84.0)));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_relative_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(distance(Vec2::new(0.0, 10.0), Vec2::ZERO), 10.0);
    }

    #[test]
    fn int_rect_intersect_and_translate() {
        let a = IntRect::new(0, 0, 10, 10);
        let b = IntRect::new(5, -5, 20, 5);
        assert_eq!(a.intersect(&b), Some(IntRect::new(5, 0, 10, 5)));
        assert_eq!(a.intersect(&IntRect::new(10, 0, 12, 4)), None);
        assert_eq!(a.translate(3, -2), IntRect::new(3, -2, 13, 8));
        assert_eq!(a.area(), 100);
        assert_eq!(IntRect::new(4, 4, 4, 9).area(), 0);
    }

    #[test]
    fn rect_f_canvas_intersection() {
        let r = RectF::new(-10.0, 0.0, 0.0, 5.0);
        assert!(!r.intersects_canvas(100.0, 100.0));
        assert!(r.offset(Vec2::new(1.0, 0.0)).intersects_canvas(100.0, 100.0));
        assert!(!RectF::new(100.0, 0.0, 120.0, 5.0).intersects_canvas(100.0, 100.0));
    }
}
