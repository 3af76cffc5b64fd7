//! Detail-Panel (rechte Seitenleiste): Shot-, Punkt- und Auswahl-Infos.

use crate::app::{ViewerIntent, ViewerSession};
use crate::core::Reconstruction;

/// Rendert das Detail-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &ViewerSession) -> Vec<ViewerIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("detail_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Details");
            ui.separator();

            let Some(reconstruction) = state.reconstruction.as_deref() else {
                ui.label("Keine Szene geladen");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                render_shot_details(ui, state, reconstruction);
                render_point_details(ui, state, reconstruction, &mut events);
                render_selection_list(ui, state, &mut events);
            });
        });

    events
}

/// Zuletzt gehoverter Shot: Name, Translation, Rotation in Grad und
/// das Vorschaubild aus `<szene>/images/`.
fn render_shot_details(ui: &mut egui::Ui, state: &ViewerSession, reconstruction: &Reconstruction) {
    ui.label(egui::RichText::new("Shot").strong());

    let shot = state
        .selection
        .detail_shot
        .as_deref()
        .and_then(|name| reconstruction.shot(name));
    let Some(shot) = shot else {
        ui.weak("Kein Shot gehovert");
        return;
    };

    ui.label(egui::RichText::new(&shot.image_name).monospace());
    ui.label(format!(
        "Translation: ({:.2}, {:.2}, {:.2})",
        shot.translation.x, shot.translation.y, shot.translation.z
    ));
    let degrees = shot.rotation_euler_degrees();
    ui.label(format!(
        "Rotation: {:.2}° / {:.2}° / {:.2}°",
        degrees.x, degrees.y, degrees.z
    ));
    if let Some((width, height)) = shot.original_dimensions {
        ui.label(format!("Bild: {}×{} px", width, height));
    }

    // Fehlendes Vorschaubild ist kein Fehler, das Panel lässt es aus.
    if let Some(dir) = &state.ui.scene_dir {
        let thumbnail = dir.join("images").join(&shot.image_name);
        if thumbnail.is_file() {
            ui.add_space(4.0);
            ui.add(
                egui::Image::new(format!("file://{}", thumbnail.display()))
                    .max_width(ui.available_width()),
            );
        }
    }
}

/// Zuletzt gehoverter Punkt: Id, Koordinaten und die beobachtenden
/// Shots als klickbare Liste (Klick togglet die Selektion).
fn render_point_details(
    ui: &mut egui::Ui,
    state: &ViewerSession,
    reconstruction: &Reconstruction,
    events: &mut Vec<ViewerIntent>,
) {
    ui.separator();
    ui.label(egui::RichText::new("Punkt").strong());

    let Some(id) = state.selection.detail_point else {
        ui.weak("Kein Punkt gehovert");
        return;
    };
    let Some(point) = reconstruction.point(id) else {
        return;
    };

    ui.label(format!("Id: {}", id));
    ui.label(format!(
        "Position: ({:.4}, {:.4}, {:.4})",
        point.coordinates.x, point.coordinates.y, point.coordinates.z
    ));

    let observers = reconstruction.shots_for_point(id);
    ui.label(format!("Beobachtet von {} Shots:", observers.len()));
    for name in observers {
        shot_row(ui, state, name, events);
    }
}

/// Dauerhafte Auswahl mit Abwahl per Klick.
fn render_selection_list(ui: &mut egui::Ui, state: &ViewerSession, events: &mut Vec<ViewerIntent>) {
    ui.separator();
    ui.label(egui::RichText::new("Auswahl").strong());

    let selected = state.selection.selected();
    if selected.is_empty() {
        ui.weak("Keine Shots selektiert");
        return;
    }

    ui.label(format!("{} Shots selektiert", selected.len()));
    for name in selected.iter() {
        shot_row(ui, state, name, events);
    }

    ui.add_space(4.0);
    if ui.button("Auswahl aufheben").clicked() {
        events.push(ViewerIntent::ClearSelectionRequested);
    }
}

fn shot_row(
    ui: &mut egui::Ui,
    state: &ViewerSession,
    image_name: &str,
    events: &mut Vec<ViewerIntent>,
) {
    let row = ui.selectable_label(state.selection.is_selected(image_name), image_name);
    if row.clicked() {
        events.push(ViewerIntent::ShotClicked {
            image_name: image_name.to_string(),
        });
    } else if row.hovered() && state.selection.hovered_shot.as_deref() != Some(image_name) {
        events.push(ViewerIntent::ShotHovered {
            image_name: image_name.to_string(),
        });
    }
}
