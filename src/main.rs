//! ODM Shot Coverage Viewer.
//!
//! Interaktive 2D-Karte einer photogrammetrischen Rekonstruktion:
//! Kamerapositionen, Punktwolke, Coverage-Footprints und Orthophoto,
//! mit Pan/Zoom und Punkt-/Shot-Selektion.

use eframe::egui;
use odm_shot_coverage::{render, ui, ViewerController, ViewerIntent, ViewerOptions, ViewerSession};

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

        log::info!(
            "ODM Shot Coverage Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("ODM Shot Coverage Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "ODM Shot Coverage Viewer",
            options,
            Box::new(|cc| {
                // Bild-Loader für die Thumbnails im Detail-Panel
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(ViewerApp::new()))
            }),
        )
    }
}

/// Linker und unterer Rand der Kartenfläche, reserviert für die Achsen.
const AXIS_MARGIN: f32 = 30.0;

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: ViewerSession,
    controller: ViewerController,
    renderer: render::Renderer,
    input: ui::InputState,
    window_title: String,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let mut state = ViewerSession::new();
        state.options = viewer_options;

        Self {
            state,
            controller: ViewerController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
            window_title: String::new(),
        }
    }

    /// Hält den Fenstertitel auf dem Verzeichnis der geladenen Szene.
    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = match &self.state.ui.scene_dir {
            Some(dir) => format!("ODM Shot Coverage Viewer - {}", dir.display()),
            None => "ODM Shot Coverage Viewer".to_string(),
        };
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, ViewerIntent::ViewportResized { .. }));

        self.process_events(events);
        self.sync_window_title(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<ViewerIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                // Achsenränder links und unten bleiben außerhalb der Karte.
                let panel = ui.max_rect();
                let map_rect = egui::Rect::from_min_max(
                    egui::pos2(panel.left() + AXIS_MARGIN, panel.top()),
                    egui::pos2(panel.right(), panel.bottom() - AXIS_MARGIN),
                );
                if !map_rect.is_positive() {
                    return;
                }

                let response = ui.allocate_rect(map_rect, egui::Sense::click_and_drag());
                let map_size = [map_rect.width(), map_rect.height()];

                events.extend(self.input.collect_map_events(
                    ui,
                    &response,
                    map_size,
                    &self.state.options,
                ));

                let scene = self.controller.build_render_scene(&self.state);

                let map_painter = ui.painter().with_clip_rect(map_rect);
                self.renderer.paint(&map_painter, map_rect, &scene);

                // Achsen sind statisch und liegen außerhalb des Clips.
                if let Some(mapper) = &scene.mapper {
                    render::paint_axes(ui.painter(), mapper, map_rect);
                }

                if !scene.has_scene() {
                    ui.painter().text(
                        map_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Keine Szene geladen. Datei → Report öffnen...",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<ViewerIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
