//! Viewport-Input-Handling: Zeiger-Events in Bildkoordinaten → AppIntent.

use super::keyboard;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für das Viewport (laufende Zeiger-Geste)
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde über dem Viewport gedrückt und ist noch unten
    primary_active: bool,
    /// Letzte gemeldete Zeigerposition (Bildkoordinaten)
    last_pos: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_active: false,
            last_pos: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `image_rect` ist das Bildrechteck in Bildschirmkoordinaten
    /// (None, solange kein Bild geladen ist).
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        image_rect: Option<egui::Rect>,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui, image_rect.is_some()));

        let Some(image_rect) = image_rect else {
            self.primary_active = false;
            self.last_pos = None;
            return events;
        };

        let (pressed, released, press_origin, interact_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.interact_pos(),
            )
        });

        // ── Drücken ─────────────────────────────────────────────────
        if pressed && response.hovered() {
            if let Some(screen_pos) = press_origin.or(interact_pos) {
                let (pos, inside_image) = screen_to_image(screen_pos, image_rect);
                self.primary_active = true;
                self.last_pos = Some(pos);
                events.push(AppIntent::PointerPressed { pos, inside_image });
            }
        }

        if !self.primary_active {
            return events;
        }

        // ── Bewegen ─────────────────────────────────────────────────
        if let Some(screen_pos) = interact_pos {
            let (pos, inside_image) = screen_to_image(screen_pos, image_rect);
            if self.last_pos != Some(pos) {
                self.last_pos = Some(pos);
                events.push(AppIntent::PointerMoved { pos, inside_image });
            }
        }

        // ── Loslassen ───────────────────────────────────────────────
        if released {
            let screen_pos = interact_pos.or_else(|| ui.input(|i| i.pointer.latest_pos()));
            if let Some(screen_pos) = screen_pos {
                let (pos, inside_image) = screen_to_image(screen_pos, image_rect);
                events.push(AppIntent::PointerReleased { pos, inside_image });
            }
            self.primary_active = false;
            self.last_pos = None;
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in bildlokale Pixel um.
///
/// Liefert zusätzlich, ob die Position innerhalb des Bildes liegt.
pub fn screen_to_image(screen_pos: egui::Pos2, image_rect: egui::Rect) -> (glam::Vec2, bool) {
    let local = screen_pos - image_rect.min;
    let inside = image_rect.contains(screen_pos);
    (glam::Vec2::new(local.x, local.y), inside)
}

#[cfg(test)]
mod tests {
    use super::screen_to_image;

    #[test]
    fn screen_to_image_subtracts_image_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 100.0));

        let (pos, inside) = screen_to_image(egui::pos2(150.0, 70.0), rect);
        assert_eq!(pos, glam::Vec2::new(50.0, 20.0));
        assert!(inside);

        let (pos, inside) = screen_to_image(egui::pos2(90.0, 70.0), rect);
        assert_eq!(pos, glam::Vec2::new(-10.0, 20.0));
        assert!(!inside);
    }
}
