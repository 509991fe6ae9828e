use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Signalisiert, dass das Quellbild neu als Textur hochgeladen werden muss
    pub image_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            image_dirty: false,
        }
    }

    /// Maximale Bildgröße im Viewport (abzüglich Rand auf jeder Seite).
    pub fn fit_box(&self, padding: f32) -> [i32; 2] {
        [
            (self.viewport_size[0] - 2.0 * padding) as i32,
            (self.viewport_size[1] - 2.0 * padding) as i32,
        ]
    }

    /// Linke obere Ecke eines im Viewport zentrierten Bildes (ganzzahlig, ≥ 0).
    pub fn centered_offset(viewport_size: [f32; 2], image_size: [u32; 2]) -> Vec2 {
        let viewport = Vec2::from(viewport_size);
        let image = Vec2::new(image_size[0] as f32, image_size[1] as f32);
        ((viewport - image) * 0.5).max(Vec2::ZERO).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_box_subtracts_padding_on_both_sides() {
        let view = ViewState {
            viewport_size: [800.0, 600.0],
            image_dirty: false,
        };
        assert_eq!(view.fit_box(8.0), [784, 584]);
    }

    #[test]
    fn image_is_centered_in_viewport() {
        let viewport = [800.0, 600.0];
        assert_eq!(
            ViewState::centered_offset(viewport, [400, 600]),
            Vec2::new(200.0, 0.0)
        );
        // Größer als Viewport: an der Ecke ausrichten
        assert_eq!(ViewState::centered_offset(viewport, [1000, 700]), Vec2::ZERO);
    }
}
