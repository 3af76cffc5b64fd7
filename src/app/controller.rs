//! Viewer-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{ViewerCommand, ViewerIntent, ViewerSession};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf der ViewerSession.
#[derive(Default)]
pub struct ViewerController;

impl ViewerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut ViewerSession,
        intent: ViewerIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf der ViewerSession aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ViewerSession,
        command: ViewerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            ViewerCommand::RequestReportDirDialog => {
                handlers::dialog::request_report_dir_dialog(state)
            }
            ViewerCommand::RequestProjectDirDialog => {
                handlers::dialog::request_project_dir_dialog(state)
            }
            ViewerCommand::LoadReportDir { path } => handlers::file_io::load_report_dir(state, &path),
            ViewerCommand::LoadProjectDir { path } => {
                handlers::file_io::load_project_dir(state, &path)
            }
            ViewerCommand::ReloadScene => handlers::file_io::reload(state),
            ViewerCommand::ExportReport => handlers::file_io::export_report(state),
            ViewerCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Auswahl & Hover ===
            ViewerCommand::HoverPoint { id } => handlers::selection::hover_point(state, id),
            ViewerCommand::HoverShot { image_name } => {
                handlers::selection::hover_shot(state, &image_name)
            }
            ViewerCommand::ClearHover => handlers::selection::clear_hover(state),
            ViewerCommand::ToggleShotSelection { image_name } => {
                handlers::selection::toggle_shot(state, &image_name)
            }
            ViewerCommand::ClearSelection => handlers::selection::clear_selection(state),

            // === Viewport & Ansicht ===
            ViewerCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, size)
            }
            ViewerCommand::PanView { delta } => handlers::view::pan(state, delta),
            ViewerCommand::ZoomTowards { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }
            ViewerCommand::ZoomIn => handlers::view::zoom_in(state),
            ViewerCommand::ZoomOut => handlers::view::zoom_out(state),
            ViewerCommand::ResetView => handlers::view::reset_view(state),

            // === Ebenen ===
            ViewerCommand::ToggleOrthophoto => handlers::view::toggle_orthophoto(state),
            ViewerCommand::SetOrthophotoOpacity { opacity } => {
                handlers::view::set_orthophoto_opacity(state, opacity)
            }
            ViewerCommand::TogglePoints => handlers::view::toggle_points(state),
            ViewerCommand::ToggleFootprints => handlers::view::toggle_footprints(state),

            // === Dialoge & Optionen ===
            ViewerCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            ViewerCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            ViewerCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            ViewerCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut den Frame-Schnappschuss für die Render-Schicht.
    pub fn build_render_scene(&self, state: &ViewerSession) -> RenderScene {
        render_scene::build(state)
    }
}
