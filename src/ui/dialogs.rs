//! Ordner-Dialoge für Report- und Projektverzeichnisse.

use crate::app::{UiState, ViewerIntent};

/// Verarbeitet ausstehende Ordner-Dialoge und gibt ViewerIntents zurück.
///
/// Die Dialoge blockieren den Frame; das Flag wird vor dem Öffnen
/// zurückgesetzt, damit ein Abbruch den Dialog nicht erneut zeigt.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<ViewerIntent> {
    let mut events = Vec::new();

    if ui_state.show_report_dir_dialog {
        ui_state.show_report_dir_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Report-Verzeichnis wählen")
            .pick_folder()
        {
            events.push(ViewerIntent::ReportDirSelected { path });
        }
    }

    if ui_state.show_project_dir_dialog {
        ui_state.show_project_dir_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .set_title("ODM-Projektverzeichnis wählen")
            .pick_folder()
        {
            events.push(ViewerIntent::ProjectDirSelected { path });
        }
    }

    events
}
