//! Baut die Render-Szene (Frame-Schnappschuss) aus dem Sitzungszustand.

use std::sync::Arc;

use crate::app::ViewerSession;
use crate::shared::RenderScene;

/// Erstellt die unveränderliche Render-Szene für den aktuellen Frame.
///
/// Geteilte Kollektionen hängen an `Arc`s; der Schnappschuss ist damit
/// ein reiner Zeiger-Clone ohne Kopie der Punktwolke.
pub fn build(state: &ViewerSession) -> RenderScene {
    RenderScene {
        reconstruction: state.reconstruction.clone(),
        orthophoto: state.orthophoto.clone(),
        mapper: state.view.mapper,
        transform: state.view.transform,
        viewport_size: state.view.viewport_size,
        selected_shots: Arc::clone(state.selection.selected()),
        highlighted_shots: Arc::clone(state.selection.highlighted()),
        hovered_shot: state.selection.hovered_shot.clone(),
        orthophoto_visible: state.options.show_orthophoto && state.orthophoto.is_some(),
        orthophoto_opacity: state.options.orthophoto_opacity,
        options: state.options.clone(),
        scene_revision: state.view.scene_revision,
        shot_style_revision: state.selection.style_revision,
    }
}
