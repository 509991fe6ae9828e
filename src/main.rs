//! MoveEffect-Editor.
//!
//! Freihand-Selektion auf Fotos mit automatischem Schließen der Kontur
//! und Bewegungs-Echo-Effekt beim Ziehen des Ausschnitts.

use eframe::egui;
use move_effect_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("MoveEffect-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("MoveEffect-Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "MoveEffect-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_image_upload(ctx);
        self.sync_overlay_upload(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_selection_settings(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                let image_rect = scene.image_size.map(|[width, height]| {
                    egui::Rect::from_min_size(
                        rect.min + egui::vec2(scene.image_offset.x, scene.image_offset.y),
                        egui::vec2(width as f32, height as f32),
                    )
                });

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    image_rect,
                ));

                if scene.dragging {
                    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
                }

                let painter = ui.painter_at(rect);
                self.renderer.paint(&painter, rect, &scene);

                if !scene.has_image() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No image loaded. Use File → Open Image",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn sync_image_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.image_dirty {
            return;
        }
        self.state.view.image_dirty = false;
        self.renderer
            .set_image(ctx, self.state.selection.source_image());
    }

    fn sync_overlay_upload(&mut self, ctx: &egui::Context) {
        let selection = &self.state.selection;
        self.renderer
            .sync_overlay(ctx, selection.overlay_revision(), || {
                selection.render_overlay()
            });
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
