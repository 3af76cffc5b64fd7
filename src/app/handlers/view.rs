//! Handler für Viewport, Pan/Zoom und Ebenen-Sichtbarkeit.

use glam::DVec2;

use crate::app::ViewerSession;
use crate::core::{fit, Mapper, Viewport};

/// Aktualisiert die Viewport-Größe und fittet die Skalen neu.
///
/// Pan/Zoom bleiben dabei erhalten; nur das Skalenpaar wird neu gebaut.
pub fn set_viewport_size(state: &mut ViewerSession, size: [f32; 2]) {
    if state.view.viewport_size == size {
        return;
    }
    state.view.viewport_size = size;
    refit_scales(state);
}

/// Baut das Skalenpaar für die geladene Szene neu auf.
///
/// Wird nur bei Resize, Neuladen und Fit-relevanten Optionsänderungen
/// gerufen; während Pan/Zoom bleiben die Skalen unangetastet.
pub fn refit_scales(state: &mut ViewerSession) {
    let had_mapper = state.view.mapper.is_some();
    let Some(reconstruction) = state.reconstruction.as_ref() else {
        state.view.mapper = None;
        if had_mapper {
            state.view.mark_scene_changed();
        }
        return;
    };

    let [width, height] = state.view.viewport_size;
    let viewport = Viewport::new(f64::from(width), f64::from(height));
    let inset = state.options.domain_fit_inset_px;

    match fit(reconstruction.domain(), viewport, inset) {
        Ok(fitted) => {
            state.view.mapper = Some(Mapper::new(fitted, viewport, inset, state.options.y_axis_up));
        }
        Err(err) => {
            log::warn!("Domain-Fit fehlgeschlagen: {err}");
            state.view.mapper = None;
        }
    }
    state.view.mark_scene_changed();
}

/// Setzt Pan/Zoom auf den Ausgangszustand zurück.
pub fn reset_view(state: &mut ViewerSession) {
    state.view.transform.reset();
}

/// Zoomt stufenweise auf die Viewport-Mitte hinein.
pub fn zoom_in(state: &mut ViewerSession) {
    let focus = viewport_center(state);
    state.view.transform.zoom_towards(state.options.zoom_step, focus);
}

/// Zoomt stufenweise aus der Viewport-Mitte heraus.
pub fn zoom_out(state: &mut ViewerSession) {
    let focus = viewport_center(state);
    state
        .view
        .transform
        .zoom_towards(1.0 / state.options.zoom_step, focus);
}

/// Zoomt um `factor` und hält den Fokuspunkt stabil.
pub fn zoom_towards(state: &mut ViewerSession, factor: f64, focus: DVec2) {
    state.view.transform.zoom_towards(factor, focus);
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut ViewerSession, delta: DVec2) {
    state.view.transform.pan(delta);
}

/// Schaltet das Orthophoto-Overlay um.
pub fn toggle_orthophoto(state: &mut ViewerSession) {
    state.options.show_orthophoto = !state.options.show_orthophoto;
}

/// Setzt die Orthophoto-Deckkraft (geklemmt auf 0..=1).
pub fn set_orthophoto_opacity(state: &mut ViewerSession, opacity: f32) {
    state.options.orthophoto_opacity = opacity.clamp(0.0, 1.0);
}

/// Schaltet die Punktwolke um.
pub fn toggle_points(state: &mut ViewerSession) {
    state.options.show_points = !state.options.show_points;
}

/// Schaltet die Footprints um.
pub fn toggle_footprints(state: &mut ViewerSession) {
    state.options.show_footprints = !state.options.show_footprints;
}

fn viewport_center(state: &ViewerSession) -> DVec2 {
    let [width, height] = state.view.viewport_size;
    DVec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use indexmap::IndexMap;

    use super::*;
    use crate::core::{AxisRange, BoundingDomain, Reconstruction};

    fn session_with_domain() -> ViewerSession {
        let domain = BoundingDomain {
            x: AxisRange::new(0.0, 10.0),
            y: AxisRange::new(0.0, 10.0),
            z: None,
        };
        let mut state = ViewerSession::new();
        state.reconstruction = Some(Arc::new(Reconstruction::new(
            IndexMap::new(),
            Vec::new(),
            Vec::new(),
            HashMap::new(),
            domain,
        )));
        state
    }

    #[test]
    fn resize_refits_scales() {
        let mut state = session_with_domain();
        let revision_before = state.view.scene_revision;

        set_viewport_size(&mut state, [320.0, 320.0]);

        let mapper = state.view.mapper.expect("Mapper sollte gebaut sein");
        assert_relative_eq!(mapper.x.range()[0], 10.0);
        assert_relative_eq!(mapper.x.range()[1], 310.0);
        assert!(state.view.scene_revision > revision_before);
    }

    #[test]
    fn resize_to_same_size_is_noop() {
        let mut state = session_with_domain();
        set_viewport_size(&mut state, [320.0, 320.0]);
        let revision_before = state.view.scene_revision;

        set_viewport_size(&mut state, [320.0, 320.0]);

        assert_eq!(state.view.scene_revision, revision_before);
    }

    #[test]
    fn resize_below_inset_clears_mapper() {
        let mut state = session_with_domain();
        set_viewport_size(&mut state, [320.0, 320.0]);

        set_viewport_size(&mut state, [15.0, 15.0]);

        assert!(state.view.mapper.is_none());
    }

    #[test]
    fn refit_without_reconstruction_clears_mapper() {
        let mut state = session_with_domain();
        set_viewport_size(&mut state, [320.0, 320.0]);

        state.reconstruction = None;
        refit_scales(&mut state);

        assert!(state.view.mapper.is_none());
    }

    #[test]
    fn zoom_in_uses_configured_step() {
        let mut state = session_with_domain();
        state.view.viewport_size = [320.0, 320.0];

        zoom_in(&mut state);

        assert_relative_eq!(state.view.transform.scale, state.options.zoom_step);
    }

    #[test]
    fn reset_view_restores_identity() {
        let mut state = session_with_domain();
        pan(&mut state, DVec2::new(40.0, -12.0));
        zoom_towards(&mut state, 3.0, DVec2::new(100.0, 100.0));

        reset_view(&mut state);

        assert_relative_eq!(state.view.transform.scale, 1.0);
        assert_relative_eq!(state.view.transform.translation.x, 0.0);
        assert_relative_eq!(state.view.transform.translation.y, 0.0);
    }

    #[test]
    fn orthophoto_opacity_is_clamped() {
        let mut state = session_with_domain();

        set_orthophoto_opacity(&mut state, 1.7);
        assert_relative_eq!(state.options.orthophoto_opacity, 1.0);

        set_orthophoto_opacity(&mut state, -0.3);
        assert_relative_eq!(state.options.orthophoto_opacity, 0.0);
    }
}
