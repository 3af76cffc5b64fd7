//! Mapping von UI-Intents auf mutierende Viewer-Commands.
//!
//! Rohe Zeigerereignisse werden hier über die Picking-Indizes in
//! semantische Commands (`HoverShot`, `ToggleShotSelection`, ...)
//! aufgelöst; das Mapping selbst verändert keinen Zustand.

use glam::DVec2;

use super::{ViewerCommand, ViewerIntent, ViewerSession};
use crate::core::Mapper;

/// Übersetzt einen `ViewerIntent` in eine Sequenz ausführbarer `ViewerCommand`s.
pub fn map_intent_to_commands(state: &ViewerSession, intent: ViewerIntent) -> Vec<ViewerCommand> {
    match intent {
        ViewerIntent::OpenReportDirRequested => vec![ViewerCommand::RequestReportDirDialog],
        ViewerIntent::OpenProjectDirRequested => vec![ViewerCommand::RequestProjectDirDialog],
        ViewerIntent::ReportDirSelected { path } => vec![ViewerCommand::LoadReportDir { path }],
        ViewerIntent::ProjectDirSelected { path } => vec![ViewerCommand::LoadProjectDir { path }],
        ViewerIntent::ReloadRequested => vec![ViewerCommand::ReloadScene],
        ViewerIntent::ExportReportRequested => vec![ViewerCommand::ExportReport],
        ViewerIntent::ExitRequested => vec![ViewerCommand::RequestExit],

        ViewerIntent::MapPointerMoved { screen } => map_pointer_moved(state, screen),
        ViewerIntent::MapClicked { screen } => map_clicked(state, screen),
        ViewerIntent::MapPointerLeft => clear_hover_commands(state),
        ViewerIntent::PointHovered { id } => vec![ViewerCommand::HoverPoint { id }],
        ViewerIntent::ShotHovered { image_name } => {
            vec![ViewerCommand::HoverShot { image_name }]
        }
        ViewerIntent::ShotClicked { image_name } => {
            vec![ViewerCommand::ToggleShotSelection { image_name }]
        }
        ViewerIntent::ClearSelectionRequested => vec![ViewerCommand::ClearSelection],

        ViewerIntent::ViewportResized { size } => vec![ViewerCommand::SetViewportSize { size }],
        ViewerIntent::MapPanned { delta } => vec![ViewerCommand::PanView { delta }],
        ViewerIntent::MapZoomed { factor, focus } => {
            vec![ViewerCommand::ZoomTowards { factor, focus }]
        }
        ViewerIntent::ZoomInRequested => vec![ViewerCommand::ZoomIn],
        ViewerIntent::ZoomOutRequested => vec![ViewerCommand::ZoomOut],
        ViewerIntent::ResetViewRequested => vec![ViewerCommand::ResetView],

        ViewerIntent::OrthophotoToggled => vec![ViewerCommand::ToggleOrthophoto],
        ViewerIntent::OrthophotoOpacityChanged { opacity } => {
            vec![ViewerCommand::SetOrthophotoOpacity { opacity }]
        }
        ViewerIntent::PointsToggled => vec![ViewerCommand::TogglePoints],
        ViewerIntent::FootprintsToggled => vec![ViewerCommand::ToggleFootprints],

        ViewerIntent::OpenOptionsDialogRequested => vec![ViewerCommand::OpenOptionsDialog],
        ViewerIntent::CloseOptionsDialogRequested => vec![ViewerCommand::CloseOptionsDialog],
        ViewerIntent::OptionsChanged { options } => vec![ViewerCommand::ApplyOptions { options }],
        ViewerIntent::ResetOptionsRequested => vec![ViewerCommand::ResetOptions],
    }
}

/// Treffer einer Picking-Abfrage an einer Kartenposition.
enum PickTarget {
    Shot(String),
    Point(u64),
}

fn map_pointer_moved(state: &ViewerSession, screen: DVec2) -> Vec<ViewerCommand> {
    match pick_at(state, screen) {
        Some(PickTarget::Shot(image_name)) => {
            if state.selection.hovered_shot.as_deref() == Some(image_name.as_str()) {
                Vec::new()
            } else {
                vec![ViewerCommand::HoverShot { image_name }]
            }
        }
        Some(PickTarget::Point(id)) => {
            if state.selection.hovered_point == Some(id) {
                Vec::new()
            } else {
                vec![ViewerCommand::HoverPoint { id }]
            }
        }
        None => clear_hover_commands(state),
    }
}

fn map_clicked(state: &ViewerSession, screen: DVec2) -> Vec<ViewerCommand> {
    match pick_at(state, screen) {
        Some(PickTarget::Shot(image_name)) => {
            vec![ViewerCommand::ToggleShotSelection { image_name }]
        }
        // Klicks auf Punkte oder leere Fläche ändern die Auswahl nicht.
        _ => Vec::new(),
    }
}

/// `ClearHover` nur, wenn überhaupt etwas gehovert ist — sonst würde
/// jede Mausbewegung über leerer Fläche das Command-Log fluten.
fn clear_hover_commands(state: &ViewerSession) -> Vec<ViewerCommand> {
    if state.selection.hovered_point.is_some() || state.selection.hovered_shot.is_some() {
        vec![ViewerCommand::ClearHover]
    } else {
        Vec::new()
    }
}

/// Sucht den nächstgelegenen Shot bzw. Punkt im Pick-Radius.
///
/// Shots liegen in der Zeichenreihenfolge über den Punkten und werden
/// deshalb zuerst geprüft; Punkte nur, wenn der Interaktionsmodus sie
/// einschließt.
fn pick_at(state: &ViewerSession, screen: DVec2) -> Option<PickTarget> {
    let reconstruction = state.reconstruction.as_ref()?;
    let mapper = state.view.mapper.as_ref()?;
    let radius = pick_radius_world(state, mapper)?;
    let world = mapper.px_to_world(state.view.transform.invert(screen));

    if let Some(hit) = state.picking.shots.nearest_within(world, radius) {
        let shot = reconstruction.shots().get(hit.key as usize)?;
        return Some(PickTarget::Shot(shot.image_name.clone()));
    }
    if state.options.points_interactive() {
        if let Some(hit) = state.picking.points.nearest_within(world, radius) {
            return Some(PickTarget::Point(hit.key));
        }
    }
    None
}

/// Pick-Radius in Welt-Einheiten bei aktuellem Zoom.
fn pick_radius_world(state: &ViewerSession, mapper: &Mapper) -> Option<f64> {
    let px_per_unit = mapper.x.pixels_per_unit() * state.view.transform.scale;
    if !px_per_unit.is_finite() || px_per_unit <= 0.0 {
        return None;
    }
    Some(f64::from(state.options.selection_pick_radius_px) / px_per_unit)
}

#[cfg(test)]
mod tests;
