//! Karten-Input: Hover, Klick, Pan und Scroll-Zoom → ViewerIntent.

use glam::DVec2;

use super::keyboard;
use crate::app::ViewerIntent;
use crate::shared::ViewerOptions;

/// Verwaltet den Input-Zustand der Kartenfläche über Frames hinweg.
#[derive(Default)]
pub struct InputState {
    /// Letzte Pointer-Position, solange der Zeiger über der Karte steht.
    last_pointer: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Karten-Events aus egui-Input und gibt ViewerIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Tastatur-Interaktionen auf der Karte. Hover wird nur
    /// bei tatsächlicher Positionsänderung gemeldet, das Verlassen der
    /// Fläche erzeugt genau ein `MapPointerLeft`.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        map_size: [f32; 2],
        options: &ViewerOptions,
    ) -> Vec<ViewerIntent> {
        let mut events = Vec::new();

        events.push(ViewerIntent::ViewportResized { size: map_size });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_pointer_move(response, &mut events);
        self.handle_click(response, &mut events);
        self.handle_pan(ui, response, &mut events);
        self.handle_scroll_zoom(ui, response, options, &mut events);

        events
    }

    // ── Hover / Verlassen ───────────────────────────────────────

    fn handle_pointer_move(&mut self, response: &egui::Response, events: &mut Vec<ViewerIntent>) {
        match response.hover_pos() {
            Some(pos) => {
                if self.last_pointer != Some(pos) {
                    self.last_pointer = Some(pos);
                    events.push(ViewerIntent::MapPointerMoved {
                        screen: local_pos(pos, response),
                    });
                }
            }
            None => {
                if self.last_pointer.take().is_some() {
                    events.push(ViewerIntent::MapPointerLeft);
                }
            }
        }
    }

    // ── Klick ───────────────────────────────────────────────────

    fn handle_click(&self, response: &egui::Response, events: &mut Vec<ViewerIntent>) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(ViewerIntent::MapClicked {
                screen: local_pos(pos, response),
            });
        }
    }

    // ── Pan (Drag mit beliebiger Maustaste) ─────────────────────

    fn handle_pan(&self, ui: &egui::Ui, response: &egui::Response, events: &mut Vec<ViewerIntent>) {
        let dragging = response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Secondary);
        if !dragging {
            return;
        }

        let delta = ui.input(|i| i.pointer.delta());
        if delta == egui::Vec2::ZERO {
            return;
        }

        // Der Karteninhalt folgt dem Zeiger.
        events.push(ViewerIntent::MapPanned {
            delta: DVec2::new(f64::from(delta.x), f64::from(delta.y)),
        });
    }

    // ── Scroll-Zoom (auf Mausposition) ──────────────────────────

    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        options: &ViewerOptions,
        events: &mut Vec<ViewerIntent>,
    ) {
        let Some(pos) = response.hover_pos() else {
            return;
        };
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = options.scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        events.push(ViewerIntent::MapZoomed {
            factor,
            focus: local_pos(pos, response),
        });
    }
}

fn local_pos(pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pos - response.rect.min;
    DVec2::new(f64::from(local.x), f64::from(local.y))
}
