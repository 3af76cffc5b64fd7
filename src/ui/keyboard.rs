//! Keyboard-Shortcuts der Kartenansicht.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `ViewerIntent`s.

use crate::app::ViewerIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt ViewerIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<ViewerIntent> {
    let mut events = Vec::new();

    let (modifiers, escape, plus, minus, home, key_o, f5) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Home),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::F5),
        )
    });

    // Ctrl+O (Report öffnen), Ctrl+Shift+O (Projekt öffnen)
    if modifiers.command && key_o {
        if modifiers.shift {
            events.push(ViewerIntent::OpenProjectDirRequested);
        } else {
            events.push(ViewerIntent::OpenReportDirRequested);
        }
    }

    if f5 {
        events.push(ViewerIntent::ReloadRequested);
    }

    if escape {
        events.push(ViewerIntent::ClearSelectionRequested);
    }

    if plus && !modifiers.any() {
        events.push(ViewerIntent::ZoomInRequested);
    }

    if minus && !modifiers.any() {
        events.push(ViewerIntent::ZoomOutRequested);
    }

    if home {
        events.push(ViewerIntent::ResetViewRequested);
    }

    events
}
