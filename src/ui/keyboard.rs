//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_image: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Escape (Selektion verwerfen)
    let (modifiers, key_o_pressed, key_s_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenImageRequested);
    }

    if modifiers.command && key_s_pressed && has_image {
        events.push(AppIntent::SaveRequested);
    }

    if key_escape_pressed && has_image {
        events.push(AppIntent::ResetSelectionRequested);
    }

    events
}
