//! Optionen-Dialog für Standardwerte, Farben, Breiten und Export.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{MAX_ALPHA, MAX_REP_COUNT, MIN_ALPHA, MIN_REP_COUNT};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Echo ────────────────────────────────────────────────
            ui.collapsing("Echo (ab nächstem Start)", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Kopien:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.default_repeat_count)
                                .range(MIN_REP_COUNT..=MAX_REP_COUNT),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Deckkraft:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.default_alpha)
                                .range(MIN_ALPHA..=MAX_ALPHA),
                        )
                        .changed();
                });
            });

            // ── Darstellung ─────────────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienbreite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.path_line_width)
                                .range(1.0..=30.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Pfad-Farbe:", &mut opts.path_line_color);
                changed |= color_edit(ui, "Marker-Farbe:", &mut opts.marker_color);
                ui.horizontal(|ui| {
                    ui.label("Rand (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.viewport_padding)
                                .range(0.0..=100.0)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            // ── Export ──────────────────────────────────────────────
            ui.collapsing("Export", |ui| {
                ui.horizontal(|ui| {
                    ui.label("JPEG-Qualität:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.jpeg_quality).range(1..=100))
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [r, g, b, a].map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
