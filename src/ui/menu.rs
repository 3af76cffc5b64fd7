//! Top-Menü (Datei, Ansicht, Hilfe).

use crate::app::{SceneSource, ViewerIntent, ViewerSession};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &ViewerSession) -> Vec<ViewerIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Report öffnen...").clicked() {
                    events.push(ViewerIntent::OpenReportDirRequested);
                    ui.close();
                }

                if ui.button("ODM-Projekt öffnen...").clicked() {
                    events.push(ViewerIntent::OpenProjectDirRequested);
                    ui.close();
                }

                ui.separator();

                let has_scene = state.has_scene();

                if ui
                    .add_enabled(has_scene, egui::Button::new("Neu laden"))
                    .clicked()
                {
                    events.push(ViewerIntent::ReloadRequested);
                    ui.close();
                }

                ui.separator();

                let is_project = state.ui.scene_source == Some(SceneSource::Project);
                if ui
                    .add_enabled(is_project, egui::Button::new("Report exportieren"))
                    .clicked()
                {
                    events.push(ViewerIntent::ExportReportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(ViewerIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Ansicht zurücksetzen").clicked() {
                    events.push(ViewerIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(ViewerIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(ViewerIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                // Ebenen-Sichtbarkeit; der Klick togglet über den Intent,
                // die Checkbox zeigt nur den aktuellen Zustand.
                let mut show_orthophoto = state.options.show_orthophoto;
                if ui.checkbox(&mut show_orthophoto, "Orthophoto").clicked() {
                    events.push(ViewerIntent::OrthophotoToggled);
                    ui.close();
                }

                let mut show_points = state.options.show_points;
                if ui.checkbox(&mut show_points, "Punktwolke").clicked() {
                    events.push(ViewerIntent::PointsToggled);
                    ui.close();
                }

                let mut show_footprints = state.options.show_footprints;
                if ui.checkbox(&mut show_footprints, "Footprints").clicked() {
                    events.push(ViewerIntent::FootprintsToggled);
                    ui.close();
                }

                ui.separator();

                // Kippt die Y-Orientierung über den normalen Optionen-Pfad,
                // damit Refit und Speichern mitlaufen.
                let mut y_axis_up = state.options.y_axis_up;
                if ui.checkbox(&mut y_axis_up, "Y-Achse nach oben").clicked() {
                    let mut options = state.options.clone();
                    options.y_axis_up = !options.y_axis_up;
                    events.push(ViewerIntent::OptionsChanged {
                        options: Box::new(options),
                    });
                    ui.close();
                }

                ui.separator();

                let has_selection = !state.selection.selected().is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Auswahl aufheben"))
                    .clicked()
                {
                    events.push(ViewerIntent::ClearSelectionRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(ViewerIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("ODM Shot Coverage Viewer v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
