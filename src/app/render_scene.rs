//! Builder für Render-Szenen aus dem AppState.

use crate::app::selection::SelectionState;
use crate::app::{AppState, ViewState};
use crate::shared::{RenderScene, INITIAL_CIRCLE_RADIUS};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Das Bild wird im übergebenen Viewport des aktuellen Frames zentriert.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let image_size = state.image_size();
    let image_offset = image_size
        .map(|size| ViewState::centered_offset(viewport_size, size))
        .unwrap_or(Vec2::ZERO);
    let path = state.selection.path();

    RenderScene {
        image_size,
        image_offset,
        marker: state.selection.marker(),
        marker_radius: INITIAL_CIRCLE_RADIUS,
        outline: path.flatten(),
        outline_closed: path.is_closed(),
        dragging: state.selection.state() == SelectionState::SelectionDragging,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{AppState, ViewState};
    use glam::Vec2;
    use image::{Rgba, RgbaImage};

    #[test]
    fn build_without_image_has_no_marker() {
        let state = AppState::new();
        let scene = build(&state, [800.0, 600.0]);
        assert!(!scene.has_image());
        assert!(scene.marker.is_none());
        assert!(scene.outline.is_empty());
    }

    #[test]
    fn build_exposes_marker_outline_and_offset() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        state
            .selection
            .set_source_image(RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 255])));
        state.selection.pointer_down(Vec2::new(10.0, 10.0));
        state.selection.pointer_move(Vec2::new(60.0, 10.0));

        let scene = build(&state, [800.0, 600.0]);
        assert_eq!(scene.image_size, Some([400, 300]));
        assert_eq!(scene.image_offset, Vec2::new(200.0, 150.0));
        assert_eq!(scene.marker, Some(Vec2::new(10.0, 10.0)));
        assert_eq!(scene.outline.len(), 2);
        assert!(!scene.outline_closed);
        assert!(!scene.dragging);
    }

    #[test]
    fn build_centers_image_in_frame_viewport() {
        let mut state = AppState::new();
        state
            .selection
            .set_source_image(RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 255])));

        // Gespeicherte Viewport-Größe ist noch die alte (0×0)
        let scene = build(&state, [1000.0, 500.0]);
        assert_eq!(scene.image_offset, Vec2::new(300.0, 100.0));
    }
}
