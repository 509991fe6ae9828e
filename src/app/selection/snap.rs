//! Auto-Schließen ("Snap") des Freihand-Pfads.
//!
//! Zwei unabhängige Kriterien pro Bewegung:
//! 1. Annäherung: Der neue Punkt ist näher am Start als der letzte und liegt
//!    innerhalb von `SNAP_DISTANCE`. Der versuchsweise geschlossene Pfad wird nur
//!    übernommen, wenn seine Fläche `MIN_ALLOWED_SNAP_AREA` übersteigt.
//! 2. Erzwungen: Nach mehr als `INTERSECT_DEVIATION` Bewegungen genügt ein
//!    Lazy-Match mit dem Startpunkt, unabhängig von der Fläche.

use super::state::SelectionMachine;
use crate::core::{self, distance, lazy_match, Point};
use crate::shared::options::{INTERSECT_DEVIATION, MIN_ALLOWED_SNAP_AREA, SNAP_DISTANCE};

impl SelectionMachine {
    /// Prüft das Schließen beim Punkt `next`. Bei Erfolg ist der Pfad
    /// geschlossen und die Fläche selektiert.
    pub(crate) fn try_close(&mut self, next: Point) -> bool {
        let Some(initial) = self.initial_point else {
            return false;
        };

        if approaches_start(initial, self.last_point, next) {
            let mut tentative = self.path.clone();
            tentative.quad_to(next, initial);
            tentative.close();
            let area = core::area(&tentative);
            if area > MIN_ALLOWED_SNAP_AREA {
                log::debug!("Snap: Fläche {:.1} bei Abstand {:.1}", area, distance(initial, next));
                self.close_at(next, initial);
                return true;
            }
        }

        if self.mark_count as f32 > INTERSECT_DEVIATION && lazy_match(initial, next) {
            log::debug!("Snap erzwungen nach {} Bewegungen", self.mark_count);
            self.close_at(next, initial);
            return true;
        }

        false
    }

    fn close_at(&mut self, next: Point, initial: Point) {
        self.path.quad_to(next, initial);
        self.path.close();
        self.finish_area();
    }
}

/// `true`, wenn `next` näher am Start liegt als `last` und im Snap-Radius.
fn approaches_start(initial: Point, last: Point, next: Point) -> bool {
    let d_last = distance(initial, last);
    let d_next = distance(initial, next);
    d_next < d_last && d_next <= SNAP_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::approaches_start;
    use glam::Vec2;

    #[test]
    fn moving_away_never_approaches() {
        let start = Vec2::new(100.0, 100.0);
        assert!(!approaches_start(start, Vec2::new(110.0, 100.0), Vec2::new(120.0, 100.0)));
    }

    #[test]
    fn approach_outside_snap_distance_is_ignored() {
        let start = Vec2::ZERO;
        assert!(!approaches_start(start, Vec2::new(100.0, 0.0), Vec2::new(41.0, 0.0)));
        assert!(approaches_start(start, Vec2::new(100.0, 0.0), Vec2::new(40.0, 0.0)));
    }
}
