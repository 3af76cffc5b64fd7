//! Punktwolken-Ebene: ein Kreis pro rekonstruiertem Punkt.

use eframe::egui;
use glam::DVec2;

use super::sync::{SceneStore, SyncStats};
use super::types::{color32, Projection};
use crate::shared::RenderScene;

/// Gezeichneter Punkt in Skalen-Pixeln.
#[derive(Debug, Clone, Copy)]
pub struct PointElement {
    pub px: DVec2,
}

/// Hält die Punkt-Elemente über Frames hinweg.
pub struct PointLayer {
    store: SceneStore<u64, PointElement>,
    scene_revision: Option<u64>,
}

impl PointLayer {
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            scene_revision: None,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Gleicht den Bestand ab; `None`, wenn die Szene unverändert ist.
    ///
    /// Auswahl- und Hover-Änderungen lassen diese Ebene bewusst
    /// unangetastet — nur ein Szenenwechsel baut die Geometrie neu.
    pub fn sync(&mut self, scene: &RenderScene) -> Option<SyncStats> {
        if self.scene_revision == Some(scene.scene_revision) {
            return None;
        }
        self.scene_revision = Some(scene.scene_revision);

        let (Some(reconstruction), Some(mapper)) = (&scene.reconstruction, &scene.mapper) else {
            let exited = self.store.clear();
            return Some(SyncStats { exited, ..SyncStats::default() });
        };

        let data = reconstruction
            .points()
            .iter()
            .map(|point| (point.id, mapper.world_to_px(point.ground_position())));
        Some(self.store.sync(
            data,
            |_, px| PointElement { px: *px },
            |px, element| element.px = *px,
        ))
    }

    pub fn paint(&self, painter: &egui::Painter, projection: &Projection, scene: &RenderScene) {
        if !scene.options.show_points {
            return;
        }
        let radius = projection.scaled(scene.options.point_radius_px);
        let color = color32(scene.options.point_color);
        for (_, element) in self.store.iter() {
            painter.circle_filled(projection.to_screen(element.px), radius, color);
        }
    }
}

impl Default for PointLayer {
    fn default() -> Self {
        Self::new()
    }
}
