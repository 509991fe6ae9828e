//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, SelectionState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match (state.ui.current_image_path.as_deref(), state.image_size()) {
                (Some(path), Some([width, height])) => {
                    let filename = std::path::Path::new(path)
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown");
                    ui.label(format!("Bild: {} ({}x{})", filename, width, height));
                }
                _ => {
                    ui.label("Kein Bild geladen");
                }
            }

            ui.separator();

            let state_name = match state.selection.state() {
                SelectionState::Initial => "Bereit",
                SelectionState::MarkerMove => "Markieren",
                SelectionState::Released => "Losgelassen",
                SelectionState::AreaSelected => "Bereich gewählt",
                SelectionState::SelectionGrabbed => "Gegriffen",
                SelectionState::SelectionDragging => "Ziehen",
            };
            ui.label(format!("Selektion: {}", state_name));

            ui.separator();

            let vector = state.selection.replication_vector();
            ui.label(format!(
                "Kopien: {} | Deckkraft: {} | Schritt: ({:.1}, {:.1})",
                state.selection.repeat_count(),
                state.selection.overlay_alpha(),
                vector.step_x,
                vector.step_y
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });

    events
}
