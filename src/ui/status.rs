//! Status-Bar am unteren Bildschirmrand.

use crate::app::{SceneSource, ViewerSession};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &ViewerSession) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(reconstruction) = state.reconstruction.as_deref() {
                ui.label(format!(
                    "Shots: {} | Punkte: {} | Kameras: {}",
                    reconstruction.shot_count(),
                    reconstruction.point_count(),
                    reconstruction.camera_count()
                ));

                ui.separator();

                if let Some(dir) = &state.ui.scene_dir {
                    let source = match state.ui.scene_source {
                        Some(SceneSource::Report) => "Report",
                        Some(SceneSource::Project) => "Projekt",
                        None => "Szene",
                    };
                    ui.label(format!("{}: {}", source, dir.display()));
                    ui.separator();
                }
            } else {
                ui.label("Keine Szene geladen");
                ui.separator();
            }

            ui.label(format!("Zoom: {:.2}x", state.view.transform.scale));

            ui.separator();

            ui.label(format!("Selektiert: {}", state.selection.selected().len()));

            // Fehler schlägt Statusnachricht
            if let Some(err) = &state.ui.load_error {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("⚠ {}", err)).color(egui::Color32::LIGHT_RED),
                );
            } else if let Some(msg) = &state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
