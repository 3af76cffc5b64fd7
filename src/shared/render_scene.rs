//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use std::sync::Arc;

use indexmap::IndexSet;

use super::options::ViewerOptions;
use crate::core::{Mapper, Orthophoto, Reconstruction, ViewTransform};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Die geladene Rekonstruktion (Shots + Punktwolke)
    pub reconstruction: Option<Arc<Reconstruction>>,
    /// Orthophoto-Overlay (optional)
    pub orthophoto: Option<Arc<Orthophoto>>,
    /// Welt→Pixel-Abbildung; `None` bis zum ersten Fit
    pub mapper: Option<Mapper>,
    /// Pan/Zoom-Transformation für diesen Frame
    pub transform: ViewTransform,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Bildnamen der selektierten Shots (Arc für O(1)-Clone pro Frame)
    pub selected_shots: Arc<IndexSet<String>>,
    /// Arbeitsset des zuletzt gehoverten Punkts
    pub highlighted_shots: Arc<Vec<String>>,
    /// Aktuell gehoverter Shot
    pub hovered_shot: Option<String>,
    /// Orthophoto-Sichtbarkeit
    pub orthophoto_visible: bool,
    /// Orthophoto-Opacity (0.0 = transparent, 1.0 = opak)
    pub orthophoto_opacity: f32,
    /// Laufzeit-Optionen für Farben, Größen, Radien
    pub options: ViewerOptions,
    /// Zähler der Szenen-Generation; springt bei Reload
    pub scene_revision: u64,
    /// Zähler der Shot-Darstellung; springt bei Selektion/Highlight
    pub shot_style_revision: u64,
}

impl RenderScene {
    /// Gibt zurück, ob eine Szene für Rendering vorhanden ist.
    pub fn has_scene(&self) -> bool {
        self.reconstruction.is_some() && self.mapper.is_some()
    }
}
