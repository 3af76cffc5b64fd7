//! Handler für Dialog-State, Optionen und Anwendungssteuerung.

use crate::app::ViewerSession;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut ViewerSession) {
    state.should_exit = true;
}

/// Fordert den Dateidialog für ein Report-Verzeichnis an.
pub fn request_report_dir_dialog(state: &mut ViewerSession) {
    state.ui.show_report_dir_dialog = true;
}

/// Fordert den Dateidialog für ein Projektverzeichnis an.
pub fn request_project_dir_dialog(state: &mut ViewerSession) {
    state.ui.show_project_dir_dialog = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut ViewerSession) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut ViewerSession) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Ändert sich der Fit-Inset oder die Y-Achsen-Richtung, werden die
/// Skalen der geladenen Szene neu aufgebaut.
pub fn apply_options(state: &mut ViewerSession, options: ViewerOptions) -> anyhow::Result<()> {
    let needs_refit = options.domain_fit_inset_px != state.options.domain_fit_inset_px
        || options.y_axis_up != state.options.y_axis_up;

    state.options = options;
    if needs_refit {
        super::view::refit_scales(state);
    }

    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut ViewerSession) -> anyhow::Result<()> {
    apply_options(state, ViewerOptions::default())
}
