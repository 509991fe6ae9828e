//! Zeigerereignisse, Gesten-Lifecycle und Einstellungen der Selektions-Engine.

use super::state::{SelectionMachine, SelectionNotification, SelectionState};
use crate::core::{self, lazy_match, CroppedRegion, Point, Region, ReplicationVector};
use crate::shared::options::{clamp_alpha, clamp_repeat_count};
use glam::Vec2;
use image::RgbaImage;

impl SelectionMachine {
    // ── Zeigerereignisse ────────────────────────────────────────────

    /// Zeiger gedrückt.
    pub fn pointer_down(&mut self, point: Point) {
        if self.source.is_none() {
            return;
        }
        match self.state {
            SelectionState::AreaSelected
            | SelectionState::SelectionGrabbed
            | SelectionState::SelectionDragging => self.hit_test(point),
            SelectionState::Released if lazy_match(self.last_point, point) => {
                // Geste fortsetzen: Verbindungskurve zum neuen Punkt, dann als Bewegung behandeln
                self.path.quad_to(self.last_point, point);
                self.pointer_move(point);
            }
            SelectionState::Initial | SelectionState::MarkerMove | SelectionState::Released => {
                self.begin_gesture(point)
            }
        }
    }

    /// Zeiger bewegt.
    pub fn pointer_move(&mut self, point: Point) {
        if self.source.is_none() {
            return;
        }
        match self.state {
            SelectionState::AreaSelected => {}
            SelectionState::SelectionGrabbed | SelectionState::SelectionDragging => {
                self.state = SelectionState::SelectionDragging;
                self.drag_point = point;
                self.recompute_vector();
            }
            SelectionState::Initial if self.path.is_empty() => {
                // Pointer-Down ging verloren: Geste an diesem Punkt beginnen
                self.begin_gesture(point);
            }
            SelectionState::Initial | SelectionState::MarkerMove | SelectionState::Released => {
                if self.state != SelectionState::MarkerMove {
                    log::debug!("Selektion: {:?} -> MarkerMove", self.state);
                }
                self.state = SelectionState::MarkerMove;
                self.mark_count += 1;
                if !self.try_close(point) {
                    self.last_point = point;
                    self.path.line_to(point);
                }
            }
        }
    }

    /// Zeiger losgelassen. Nur während des Zeichnens relevant.
    pub fn pointer_up(&mut self, point: Point) {
        if self.source.is_none() || self.state != SelectionState::MarkerMove {
            return;
        }
        self.last_point = point;
        self.state = SelectionState::Released;
        log::debug!("Selektion: MarkerMove -> Released");
    }

    // ── Quellbild & Lifecycle ───────────────────────────────────────

    /// Setzt ein neues Quellbild und verwirft die gesamte Selektion.
    pub fn set_source_image(&mut self, image: RgbaImage) {
        self.clear_drawings();
        self.initial_point = None;
        self.source = Some(image);
        self.bump_overlay();
    }

    /// Entfernt das Quellbild samt Selektion.
    pub fn clear_source_image(&mut self) {
        self.clear_drawings();
        self.initial_point = None;
        self.source = None;
        self.bump_overlay();
    }

    /// Verwirft die Selektion ohne neuen Startpunkt.
    pub fn reset(&mut self) {
        self.clear_drawings();
        self.initial_point = None;
    }

    /// Beginnt eine neue Freihand-Geste am Punkt.
    pub(crate) fn begin_gesture(&mut self, point: Point) {
        self.clear_drawings();
        self.initial_point = Some(point);
        self.last_point = point;
        self.mark_count = 0;
        self.path.move_to(point);
    }

    /// Gibt Ausschnitt und Akkumulatoren frei, Zustand zurück auf `Initial`.
    fn clear_drawings(&mut self) {
        let had_area = self.cropped.take().is_some();
        self.hit_region = Region::default();
        self.grab_point = Vec2::ZERO;
        self.drag_point = Vec2::ZERO;
        self.vector = ReplicationVector::default();
        self.mark_count = 0;
        self.path.rewind();
        self.state = SelectionState::Initial;

        if had_area {
            log::debug!("Selektion freigegeben");
            self.notifications.push(SelectionNotification::AreaReleased);
            self.bump_overlay();
        }
    }

    /// Übernimmt den geschlossenen Pfad: Ausschnitt erzeugen, `AreaSelected`.
    pub(crate) fn finish_area(&mut self) {
        let cropped = match self.source.as_ref() {
            Some(source) => core::crop(source, &self.path),
            None => CroppedRegion::empty(core::bounding_rect(&self.path)),
        };
        log::debug!(
            "Selektion geschlossen: Grenzen {:?}, {} Bewegungen",
            cropped.bounds,
            self.mark_count
        );
        self.hit_region = Region::from_path(&self.path);
        self.cropped = Some(cropped);
        self.state = SelectionState::AreaSelected;
        self.notifications.push(SelectionNotification::AreaSelected);
        self.bump_overlay();
    }

    /// Treffertest gegen den geschlossenen Pfad: greifen oder neu beginnen.
    fn hit_test(&mut self, point: Point) {
        if self.hit_region.contains(point) {
            self.state = SelectionState::SelectionGrabbed;
            // Bisheriger Zieh-Versatz bleibt bis zur nächsten Bewegung erhalten
            self.drag_point = point + (self.drag_point - self.grab_point);
            self.grab_point = point;
            self.last_point = point;
            log::debug!("Selektion gegriffen bei ({:.1}, {:.1})", point.x, point.y);
        } else {
            self.begin_gesture(point);
        }
    }

    // ── Einstellungen ───────────────────────────────────────────────

    /// Setzt die Anzahl Kopien (geklemmt) und berechnet den Vektor neu.
    pub fn set_repeat_count(&mut self, value: i32) {
        let clamped = clamp_repeat_count(value);
        if clamped == self.repeat_count {
            return;
        }
        self.repeat_count = clamped;
        self.recompute_vector();
    }

    /// Setzt den Alpha-Wert der Kopien (geklemmt).
    pub fn set_overlay_alpha(&mut self, value: i32) {
        let clamped = clamp_alpha(value);
        if clamped == self.overlay_alpha {
            return;
        }
        self.overlay_alpha = clamped;
        if self.cropped.is_some() {
            self.bump_overlay();
        }
    }

    fn recompute_vector(&mut self) {
        let vector = ReplicationVector::from_drag(self.grab_point, self.drag_point, self.repeat_count);
        if vector != self.vector {
            self.vector = vector;
            self.bump_overlay();
        }
    }

    // ── Ausgabe ─────────────────────────────────────────────────────

    /// Zeichnet das Echo-Overlay auf eine beliebige Leinwand.
    pub fn render_into(&self, canvas: &mut RgbaImage) -> bool {
        let Some(region) = self.cropped.as_ref() else {
            return false;
        };
        core::render(
            canvas,
            region,
            region.bounds,
            &self.vector,
            core::overlay_opacity(self.overlay_alpha),
        )
    }

    /// Overlay auf transparenter Leinwand in Größe des Quellbildes.
    pub fn render_overlay(&self) -> Option<RgbaImage> {
        let source = self.source.as_ref()?;
        let mut canvas = RgbaImage::new(source.width(), source.height());
        self.render_into(&mut canvas).then_some(canvas)
    }

    /// Quellbild mit eingebranntem Overlay, `None` ohne Selektion oder Versatz.
    pub fn composed_image(&self) -> Option<RgbaImage> {
        let mut canvas = self.source.as_ref()?.clone();
        self.render_into(&mut canvas).then_some(canvas)
    }
}
