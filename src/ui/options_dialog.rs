//! Optionen-Dialog für Farben, Radien und Karten-Verhalten.

use crate::app::{ViewerIntent, ViewerSession};
use crate::shared::InteractionMode;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &ViewerSession) -> Vec<ViewerIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Punktwolke ──────────────────────────────────
                    ui.collapsing("Punktwolke", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius_px)
                                        .range(0.1..=10.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.point_color);
                    });

                    // ── Shots ───────────────────────────────────────
                    ui.collapsing("Shots", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.shot_radius_px)
                                        .range(0.5..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Standardfarbe:", &mut opts.shot_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.shot_color_selected);
                        changed |= color_edit(ui, "Arbeitsset:", &mut opts.shot_color_highlight);
                    });

                    // ── Footprints ──────────────────────────────────
                    ui.collapsing("Footprints", |ui| {
                        changed |= color_edit(ui, "Füllfarbe:", &mut opts.footprint_color);
                        ui.horizontal(|ui| {
                            ui.label("Konturbreite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.footprint_stroke_width_px)
                                        .range(0.1..=5.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                    });

                    // ── Selektion ───────────────────────────────────
                    ui.collapsing("Selektion", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.selection_pick_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hover-Modus:");
                            egui::ComboBox::from_id_salt("interaction_mode")
                                .selected_text(mode_label(opts.interaction_mode))
                                .show_ui(ui, |ui| {
                                    changed |= ui
                                        .selectable_value(
                                            &mut opts.interaction_mode,
                                            InteractionMode::PointsAndShots,
                                            mode_label(InteractionMode::PointsAndShots),
                                        )
                                        .changed();
                                    changed |= ui
                                        .selectable_value(
                                            &mut opts.interaction_mode,
                                            InteractionMode::ShotsOnly,
                                            mode_label(InteractionMode::ShotsOnly),
                                        )
                                        .changed();
                                });
                        });
                    });

                    // ── Orthophoto ──────────────────────────────────
                    ui.collapsing("Orthophoto", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Deckkraft:");
                            changed |= ui
                                .add(egui::Slider::new(&mut opts.orthophoto_opacity, 0.0..=1.0))
                                .changed();
                        });
                    });

                    // ── Karte ───────────────────────────────────────
                    ui.collapsing("Karte", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Fit-Innenabstand (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.domain_fit_inset_px)
                                        .range(0.0..=100.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.y_axis_up, "Y-Achse nach oben (Welt-Konvention)")
                            .changed();
                    });

                    // ── Zoom ────────────────────────────────────────
                    ui.collapsing("Zoom", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Export ──────────────────────────────────────
                    ui.collapsing("Export", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Thumbnail-Kante (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.thumbnail_max_dimension)
                                        .range(100..=2000)
                                        .speed(10),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(ViewerIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(ViewerIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(ViewerIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

fn mode_label(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::PointsAndShots => "Punkte und Shots",
        InteractionMode::ShotsOnly => "Nur Shots",
    }
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
