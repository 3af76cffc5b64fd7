//! Handler für Auswahl- und Hover-Operationen auf Shots und Punkten.
//!
//! Die dauerhafte Auswahl ändert sich ausschließlich über den
//! Klick-Toggle; Punkt-Hover ersetzt nur die transiente Arbeitsmenge.
//! Keine dieser Operationen baut die Szene neu auf — es springt allein
//! die Stil-Revision der Shot-Ebene.

use crate::app::ViewerSession;

/// Schaltet die Auswahl eines Shots um.
pub fn toggle_shot(state: &mut ViewerSession, image_name: &str) {
    let known = state
        .reconstruction
        .as_ref()
        .is_some_and(|r| r.shot(image_name).is_some());
    if !known {
        log::warn!("Toggle für unbekannten Shot '{image_name}' ignoriert");
        return;
    }

    let selected = state.selection.selected_mut();
    if !selected.shift_remove(image_name) {
        selected.insert(image_name.to_string());
    }
    state.selection.mark_style_changed();
}

/// Hebt die Auswahl aller Shots auf.
pub fn clear_selection(state: &mut ViewerSession) {
    if state.selection.selected().is_empty() {
        return;
    }
    state.selection.selected_mut().clear();
    state.selection.mark_style_changed();
}

/// Markiert einen Punkt als gehovert und ersetzt die Arbeitsmenge durch
/// genau die Shots, die ihn beobachten.
pub fn hover_point(state: &mut ViewerSession, id: u64) {
    let observers = state
        .reconstruction
        .as_ref()
        .map(|r| r.shots_for_point(id).to_vec())
        .unwrap_or_default();

    state.selection.hovered_point = Some(id);
    state.selection.hovered_shot = None;
    state.selection.detail_point = Some(id);
    state.selection.set_highlighted(observers);
    state.selection.mark_style_changed();
}

/// Markiert einen Shot als gehovert; ein laufender Punkt-Hover endet damit.
pub fn hover_shot(state: &mut ViewerSession, image_name: &str) {
    state.selection.hovered_point = None;
    state.selection.hovered_shot = Some(image_name.to_string());
    state.selection.detail_shot = Some(image_name.to_string());
    state.selection.set_highlighted(Vec::new());
    state.selection.mark_style_changed();
}

/// Beendet jeden Hover und leert die Arbeitsmenge.
///
/// Die Detail-Panel-Ziele (`detail_shot`, `detail_point`) bleiben
/// stehen, das Panel zeigt weiter den letzten Stand.
pub fn clear_hover(state: &mut ViewerSession) {
    state.selection.hovered_point = None;
    state.selection.hovered_shot = None;
    state.selection.set_highlighted(Vec::new());
    state.selection.mark_style_changed();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use glam::DVec3;
    use indexmap::IndexMap;

    use super::*;
    use crate::core::{AxisRange, BoundingDomain, Point, Reconstruction, Shot};

    /// Drei Shots; Punkt 1 wird von A und B beobachtet, Punkt 2 von B und C.
    fn session() -> ViewerSession {
        let shots = ["A.jpeg", "B.jpeg", "C.jpeg"]
            .into_iter()
            .map(|name| {
                Shot::from_euler_xyz(name.to_string(), None, DVec3::ZERO, DVec3::ZERO)
            })
            .collect();
        let points = vec![
            Point::new(1, DVec3::new(1.0, 1.0, 0.0)),
            Point::new(2, DVec3::new(2.0, 2.0, 0.0)),
        ];
        let point_shots = HashMap::from([
            (1, vec!["A.jpeg".to_string(), "B.jpeg".to_string()]),
            (2, vec!["B.jpeg".to_string(), "C.jpeg".to_string()]),
        ]);
        let domain = BoundingDomain {
            x: AxisRange::new(0.0, 2.0),
            y: AxisRange::new(0.0, 2.0),
            z: None,
        };

        let mut state = ViewerSession::new();
        state.reconstruction = Some(Arc::new(Reconstruction::new(
            IndexMap::new(),
            shots,
            points,
            point_shots,
            domain,
        )));
        state
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut state = session();

        toggle_shot(&mut state, "A.jpeg");
        assert!(state.selection.is_selected("A.jpeg"));

        toggle_shot(&mut state, "A.jpeg");
        assert!(!state.selection.is_selected("A.jpeg"));
        assert!(state.selection.selected().is_empty());
    }

    #[test]
    fn toggle_keeps_other_selections() {
        let mut state = session();

        toggle_shot(&mut state, "A.jpeg");
        toggle_shot(&mut state, "B.jpeg");
        toggle_shot(&mut state, "A.jpeg");

        let selected: Vec<&str> = state.selection.selected().iter().map(String::as_str).collect();
        assert_eq!(selected, ["B.jpeg"]);
    }

    #[test]
    fn toggle_unknown_shot_is_ignored() {
        let mut state = session();
        let before = state.selection.style_revision;

        toggle_shot(&mut state, "Z.jpeg");

        assert!(state.selection.selected().is_empty());
        assert_eq!(state.selection.style_revision, before);
    }

    #[test]
    fn hover_point_replaces_working_set_wholesale() {
        let mut state = session();

        hover_point(&mut state, 1);
        assert_eq!(state.selection.highlighted().as_slice(), ["A.jpeg", "B.jpeg"]);

        hover_point(&mut state, 2);
        assert_eq!(state.selection.highlighted().as_slice(), ["B.jpeg", "C.jpeg"]);
        assert_eq!(state.selection.hovered_point, Some(2));
    }

    #[test]
    fn hover_point_without_observers_yields_empty_set() {
        let mut state = session();
        hover_point(&mut state, 1);

        hover_point(&mut state, 99);

        assert!(state.selection.highlighted().is_empty());
        assert_eq!(state.selection.hovered_point, Some(99));
    }

    #[test]
    fn hover_shot_ends_point_hover() {
        let mut state = session();
        hover_point(&mut state, 1);

        hover_shot(&mut state, "C.jpeg");

        assert_eq!(state.selection.hovered_point, None);
        assert_eq!(state.selection.hovered_shot.as_deref(), Some("C.jpeg"));
        assert!(state.selection.highlighted().is_empty());
    }

    #[test]
    fn clear_hover_keeps_durable_selection() {
        let mut state = session();
        toggle_shot(&mut state, "A.jpeg");
        hover_point(&mut state, 2);

        clear_hover(&mut state);

        assert!(state.selection.is_selected("A.jpeg"));
        assert!(state.selection.highlighted().is_empty());
        assert_eq!(state.selection.hovered_point, None);
        assert_eq!(state.selection.hovered_shot, None);
    }

    #[test]
    fn clear_hover_keeps_detail_panel_targets() {
        let mut state = session();
        hover_point(&mut state, 1);
        hover_shot(&mut state, "B.jpeg");

        clear_hover(&mut state);

        assert_eq!(state.selection.detail_point, Some(1));
        assert_eq!(state.selection.detail_shot.as_deref(), Some("B.jpeg"));
    }

    #[test]
    fn selection_changes_never_touch_scene_revision() {
        let mut state = session();
        let scene_before = state.view.scene_revision;
        let style_before = state.selection.style_revision;

        toggle_shot(&mut state, "A.jpeg");
        hover_point(&mut state, 1);
        clear_hover(&mut state);
        clear_selection(&mut state);

        assert_eq!(state.view.scene_revision, scene_before);
        assert!(state.selection.style_revision > style_before);
    }
}
