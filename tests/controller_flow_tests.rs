use image::{Rgba, RgbaImage};
use move_effect_editor::{AppCommand, AppController, AppIntent, AppState, SelectionState};
use std::path::PathBuf;

/// Schreibt ein einfarbiges Test-PNG in das Temp-Verzeichnis.
fn write_test_png(name: &str, width: u32, height: u32) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "move_effect_editor_{}_{}.png",
        std::process::id(),
        name
    ));
    RgbaImage::from_pixel(width, height, Rgba([40, 80, 120, 255]))
        .save(&path)
        .expect("Test-PNG sollte geschrieben werden");
    path
}

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

fn press(pos: (f32, f32)) -> AppIntent {
    AppIntent::PointerPressed {
        pos: glam::Vec2::new(pos.0, pos.1),
        inside_image: true,
    }
}

fn move_to(pos: (f32, f32), inside_image: bool) -> AppIntent {
    AppIntent::PointerMoved {
        pos: glam::Vec2::new(pos.0, pos.1),
        inside_image,
    }
}

fn release(pos: (f32, f32)) -> AppIntent {
    AppIntent::PointerReleased {
        pos: glam::Vec2::new(pos.0, pos.1),
        inside_image: true,
    }
}

/// Lädt ein 400×300-Bild (Viewport 0×0: keine Skalierung).
fn load_state(name: &str) -> (AppController, AppState, PathBuf) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let png = write_test_png(name, 400, 300);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageFileSelected {
                path: path_string(&png),
            },
        )
        .expect("Bild sollte geladen werden");

    (controller, state, png)
}

/// Zeichnet eine Schleife, die sich am Startpunkt automatisch schließt.
fn draw_loop(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, press((100.0, 100.0)))
        .expect("PointerPressed sollte durchlaufen");
    for pos in [(150.0, 80.0), (200.0, 100.0), (150.0, 130.0), (102.0, 101.0)] {
        controller
            .handle_intent(state, move_to(pos, true))
            .expect("PointerMoved sollte durchlaufen");
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_open_requested_shows_file_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenImageRequested)
        .expect("OpenImageRequested sollte durchlaufen");

    assert!(state.ui.show_file_dialog);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestOpenFileDialog)
    ));
}

#[test]
fn test_load_image_sets_source_and_marks_texture_dirty() {
    let (_controller, state, png) = load_state("load");

    assert!(state.has_image());
    assert_eq!(state.image_size(), Some([400, 300]));
    assert!(state.view.image_dirty);
    assert_eq!(state.ui.current_image_path, Some(path_string(&png)));
    assert_eq!(state.selection.state(), SelectionState::Initial);
}

#[test]
fn test_load_image_fits_into_viewport() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let png = write_test_png("fit", 200, 100);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageFileSelected {
                path: path_string(&png),
            },
        )
        .expect("Bild sollte geladen werden");

    // Box 784×584 (8 px Rand), Seitenverhältnis 2:1
    assert_eq!(state.image_size(), Some([784, 392]));
}

#[test]
fn test_load_missing_file_returns_error_and_keeps_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImageFileSelected {
            path: "/nicht/vorhanden/bild.png".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(!state.has_image());
    assert!(state.ui.current_image_path.is_none());
}

#[test]
fn test_loop_selection_shows_settings_panel() {
    let (mut controller, mut state, _png) = load_state("loop");

    draw_loop(&mut controller, &mut state);

    assert_eq!(state.selection.state(), SelectionState::AreaSelected);
    assert!(state.ui.show_selection_settings);
    let region = state
        .selection
        .cropped_region()
        .expect("Ausschnitt sollte existieren");
    assert_eq!(region.raster.dimensions(), (100, 50));
}

#[test]
fn test_pointer_moves_are_collapsed_in_command_log() {
    let (mut controller, mut state, _png) = load_state("log");

    draw_loop(&mut controller, &mut state);

    let entries = state.command_log.entries();
    let n = entries.len();
    assert!(matches!(entries[n - 2], AppCommand::PointerDown { .. }));
    match &entries[n - 1] {
        AppCommand::PointerMove { pos } => assert_eq!(*pos, glam::Vec2::new(102.0, 101.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_pointer_outside_image_is_suppressed() {
    let (mut controller, mut state, _png) = load_state("outside");
    let logged_before = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: glam::Vec2::new(-20.0, 10.0),
                inside_image: false,
            },
        )
        .expect("PointerPressed sollte durchlaufen");

    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.selection.marker(), None);
}

#[test]
fn test_drag_outside_image_still_updates_vector() {
    let (mut controller, mut state, _png) = load_state("drag_outside");
    draw_loop(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::RepeatCountChanged { value: 5 })
        .expect("RepeatCountChanged sollte durchlaufen");
    controller
        .handle_intent(&mut state, press((150.0, 100.0)))
        .expect("Greifen sollte durchlaufen");
    controller
        .handle_intent(&mut state, move_to((250.0, 100.0), true))
        .expect("Ziehen sollte durchlaufen");
    assert_eq!(state.selection.state(), SelectionState::SelectionDragging);

    controller
        .handle_intent(&mut state, move_to((450.0, 100.0), false))
        .expect("Ziehen außerhalb sollte durchlaufen");

    let vector = state.selection.replication_vector();
    assert_eq!(vector.step_x, 60.0);
    assert_eq!(vector.step_y, 0.0);

    controller
        .handle_intent(&mut state, release((450.0, 100.0)))
        .expect("Loslassen sollte durchlaufen");
    assert_eq!(state.selection.state(), SelectionState::SelectionDragging);
}

#[test]
fn test_repeat_count_is_clamped() {
    let (mut controller, mut state, _png) = load_state("clamp");

    controller
        .handle_intent(&mut state, AppIntent::RepeatCountChanged { value: 500 })
        .expect("RepeatCountChanged sollte durchlaufen");
    assert_eq!(state.selection.repeat_count(), 50);

    controller
        .handle_intent(&mut state, AppIntent::OverlayAlphaChanged { value: 0 })
        .expect("OverlayAlphaChanged sollte durchlaufen");
    assert_eq!(state.selection.overlay_alpha(), 1);
}

#[test]
fn test_reset_selection_hides_settings_panel() {
    let (mut controller, mut state, _png) = load_state("reset");
    draw_loop(&mut controller, &mut state);
    assert!(state.ui.show_selection_settings);

    controller
        .handle_intent(&mut state, AppIntent::ResetSelectionRequested)
        .expect("ResetSelectionRequested sollte durchlaufen");

    assert!(!state.ui.show_selection_settings);
    assert_eq!(state.selection.state(), SelectionState::Initial);
    assert!(state.selection.path().is_empty());
}

#[test]
fn test_save_without_overlay_shows_hint() {
    let (mut controller, mut state, _png) = load_state("save_hint");
    draw_loop(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte durchlaufen");

    assert!(!state.ui.show_save_file_dialog);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Save after modification")
    );
}

#[test]
fn test_full_flow_saves_composed_jpeg() {
    let (mut controller, mut state, _png) = load_state("save");
    draw_loop(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, press((150.0, 100.0)))
        .expect("Greifen sollte durchlaufen");
    controller
        .handle_intent(&mut state, move_to((250.0, 100.0), true))
        .expect("Ziehen sollte durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte durchlaufen");
    assert!(state.ui.show_save_file_dialog);
    assert!(state.ui.suggested_save_name.starts_with("m_"));
    assert!(state.ui.suggested_save_name.ends_with(".jpg"));

    let target = std::env::temp_dir().join(format!(
        "move_effect_editor_{}_composed.jpg",
        std::process::id()
    ));
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_string(&target),
            },
        )
        .expect("Speichern sollte durchlaufen");

    let saved = image::open(&target).expect("JPEG sollte lesbar sein");
    assert_eq!((saved.width(), saved.height()), (400, 300));
    assert_eq!(
        state.ui.status_message,
        Some(format!("Image saved: {}", path_string(&target)))
    );
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SaveImage { .. })
    ));

    let _ = std::fs::remove_file(&target);
}
