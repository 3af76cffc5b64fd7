//! Zeichnet die Szene mit egui-Painter-Primitiven.
//!
//! Jede Ebene hält ihren Elementbestand in einem [`SceneStore`] und
//! gleicht ihn nur bei Revisionswechseln mit der [`RenderScene`] ab.
//! Zwischen zwei Revisionen fällt pro Frame nur die affine
//! Pan/Zoom-Abbildung an, der Bestand selbst bleibt unangetastet.

mod axes;
mod footprint_layer;
mod orthophoto_layer;
mod point_layer;
mod shot_layer;
pub mod sync;
mod types;

use eframe::egui;

use footprint_layer::FootprintLayer;
use orthophoto_layer::OrthophotoLayer;
use point_layer::PointLayer;
use shot_layer::ShotLayer;

pub use crate::shared::RenderScene;
pub use axes::paint_axes;
pub use sync::{SceneStore, SyncStats};
pub use types::Projection;

/// Abgleich-Ergebnis eines Frames, pro Ebene `None` wenn nichts zu tun war.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameSync {
    pub footprints: Option<SyncStats>,
    pub points: Option<SyncStats>,
    pub shots: Option<SyncStats>,
}

/// Haupt-Renderer der Kartenfläche.
///
/// Hält die Ebenen samt ihrer Bestände über Frames hinweg. Die
/// Zeichenreihenfolge ist fest: Orthofoto, Footprints, Punkte, Shots —
/// Shots liegen damit zuoberst und gewinnen auch beim Picking.
pub struct Renderer {
    orthophoto_layer: OrthophotoLayer,
    footprint_layer: FootprintLayer,
    point_layer: PointLayer,
    shot_layer: ShotLayer,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            orthophoto_layer: OrthophotoLayer::new(),
            footprint_layer: FootprintLayer::new(),
            point_layer: PointLayer::new(),
            shot_layer: ShotLayer::new(),
        }
    }

    /// Gleicht alle Ebenen mit der Szene ab, ohne zu zeichnen.
    pub fn sync_scene(&mut self, scene: &RenderScene) -> FrameSync {
        FrameSync {
            footprints: self.footprint_layer.sync(scene),
            points: self.point_layer.sync(scene),
            shots: self.shot_layer.sync(scene),
        }
    }

    /// Gleicht ab und zeichnet die Szene in die Kartenfläche.
    pub fn paint(
        &mut self,
        painter: &egui::Painter,
        map_rect: egui::Rect,
        scene: &RenderScene,
    ) -> FrameSync {
        let stats = self.sync_scene(scene);
        let projection = Projection::new(map_rect.min, scene.transform);
        self.orthophoto_layer.paint(painter, &projection, scene);
        self.footprint_layer.paint(painter, &projection, scene);
        self.point_layer.paint(painter, &projection, scene);
        self.shot_layer.paint(painter, &projection, scene);
        stats
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
