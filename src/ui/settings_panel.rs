//! Einstellungs-Panel (rechte Seitenleiste) für Kopien und Deckkraft.
//!
//! Nur sichtbar, solange ein Ausschnitt existiert.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{MAX_ALPHA, MAX_REP_COUNT, MIN_ALPHA, MIN_REP_COUNT};

/// Rendert das Einstellungs-Panel und gibt erzeugte Events zurück.
pub fn render_selection_settings(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_selection_settings {
        return events;
    }

    egui::SidePanel::right("selection_settings")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Echo");
            ui.separator();

            let mut repeat_count = state.selection.repeat_count() as i32;
            ui.label("Kopien:");
            if ui
                .add(egui::Slider::new(
                    &mut repeat_count,
                    MIN_REP_COUNT as i32..=MAX_REP_COUNT as i32,
                ))
                .changed()
            {
                events.push(AppIntent::RepeatCountChanged {
                    value: repeat_count,
                });
            }

            ui.add_space(6.0);

            let mut alpha = state.selection.overlay_alpha() as i32;
            ui.label("Deckkraft:");
            if ui
                .add(egui::Slider::new(
                    &mut alpha,
                    MIN_ALPHA as i32..=MAX_ALPHA as i32,
                ))
                .changed()
            {
                events.push(AppIntent::OverlayAlphaChanged { value: alpha });
            }

            ui.separator();

            if ui.button("Selektion verwerfen").clicked() {
                events.push(AppIntent::ResetSelectionRequested);
            }
        });

    events
}
