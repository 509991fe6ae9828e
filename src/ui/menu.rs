//! Top-Menü (Datei, Selektion, Bearbeiten, Hilfe).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Image...").clicked() {
                    events.push(AppIntent::OpenImageRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(state.has_image(), egui::Button::new("Save..."))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Selektion", |ui| {
                let has_selection = !state.selection.path().is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Zurücksetzen (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ResetSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("MoveEffect-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
