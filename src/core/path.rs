//! Pfad-Konstruktion für die Freihand-Selektion.
//!
//! Ein `PathShape` ist eine geordnete Liste von Zeichenbefehlen und beginnt
//! immer mit genau einem `MoveTo`. Quadratische Kurven werden für Flächen-
//! und Trefferabfragen über `flatten` in Liniensegmente zerlegt.

use super::geometry::{IntRect, Point};

/// Unterteilungsschritte pro quadratischer Kurve beim Abflachen.
const QUAD_FLATTEN_STEPS: usize = 16;

/// Einzelner Zeichenbefehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratische Bézier-Kurve mit Kontrollpunkt
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    Close,
}

/// Geordnete Folge von Zeichenbefehlen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathShape {
    commands: Vec<PathCommand>,
}

impl PathShape {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert den Pfad für eine neue Geste.
    pub fn rewind(&mut self) {
        self.commands.clear();
    }

    /// Setzt den Startpunkt. Ein bereits begonnener Pfad wird zuvor verworfen.
    pub fn move_to(&mut self, point: Point) {
        self.commands.clear();
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Hängt ein Liniensegment an. Ohne Startpunkt wird `point` zum Startpunkt.
    pub fn line_to(&mut self, point: Point) {
        if self.commands.is_empty() {
            self.move_to(point);
            return;
        }
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Hängt eine quadratische Kurve an.
    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        if self.commands.is_empty() {
            self.move_to(ctrl);
        }
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    /// Schließt den Pfad. Mehrfaches Schließen bleibt ohne Wirkung.
    pub fn close(&mut self) {
        if !self.commands.is_empty() && !self.is_closed() {
            self.commands.push(PathCommand::Close);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Startpunkt des Pfads.
    pub fn start(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Achsenparallele Float-Grenzen aller Kontrollpunkte (inklusive).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.commands.iter().flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None],
            PathCommand::QuadTo { ctrl, to } => [Some(ctrl), Some(to)],
            PathCommand::Close => [None, None],
        });
        let first = points.find_map(|p| p)?;
        let (min, max) = points
            .flatten()
            .fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some((min, max))
    }

    /// Zerlegt den Pfad in ein Polygon (Kurven werden unterteilt).
    ///
    /// Das Polygon gilt als implizit geschlossen, der Startpunkt wird nicht wiederholt.
    pub fn flatten(&self) -> Vec<Point> {
        let mut polygon: Vec<Point> = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => polygon.push(p),
                PathCommand::QuadTo { ctrl, to } => {
                    let from = polygon.last().copied().unwrap_or(ctrl);
                    for step in 1..=QUAD_FLATTEN_STEPS {
                        let t = step as f32 / QUAD_FLATTEN_STEPS as f32;
                        polygon.push(quad_point(from, ctrl, to, t));
                    }
                }
                PathCommand::Close => {}
            }
        }
        if polygon.len() > 1 && polygon.first() == polygon.last() {
            polygon.pop();
        }
        polygon
    }
}

/// Punkt auf einer quadratischen Bézier-Kurve.
fn quad_point(from: Point, ctrl: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t)
}

/// Ganzzahlige Grenzen des Pfads, Koordinaten Richtung Null abgeschnitten.
pub fn bounding_rect(path: &PathShape) -> IntRect {
    match path.bounds() {
        Some((min, max)) => IntRect::new(min.x as i32, min.y as i32, max.x as i32, max.y as i32),
        None => IntRect::default(),
    }
}
