//! Footprint-Ebene: Bodenpolygone der Shot-Abdeckung.

use eframe::egui;
use glam::DVec2;

use super::sync::{SceneStore, SyncStats};
use super::types::{color32, Projection};
use crate::shared::RenderScene;

/// Footprint-Polygon in Skalen-Pixeln.
#[derive(Debug, Clone)]
pub struct FootprintElement {
    pub path_px: Vec<DVec2>,
}

/// Hält die Footprint-Polygone über Frames hinweg.
pub struct FootprintLayer {
    store: SceneStore<String, FootprintElement>,
    scene_revision: Option<u64>,
}

impl FootprintLayer {
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            scene_revision: None,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Gleicht den Bestand ab; Shots ohne Footprint bleiben außen vor.
    pub fn sync(&mut self, scene: &RenderScene) -> Option<SyncStats> {
        if self.scene_revision == Some(scene.scene_revision) {
            return None;
        }
        self.scene_revision = Some(scene.scene_revision);

        let (Some(reconstruction), Some(mapper)) = (&scene.reconstruction, &scene.mapper) else {
            let exited = self.store.clear();
            return Some(SyncStats { exited, ..SyncStats::default() });
        };

        let data = reconstruction.shots().iter().filter_map(|shot| {
            let footprint = shot.footprint.as_ref()?;
            if footprint.is_empty() {
                return None;
            }
            let path: Vec<DVec2> = footprint
                .path
                .iter()
                .map(|world| mapper.world_to_px(*world))
                .collect();
            Some((shot.image_name.clone(), path))
        });
        Some(self.store.sync(
            data,
            |_, path| FootprintElement { path_px: path.clone() },
            |path, element| element.path_px.clone_from(path),
        ))
    }

    pub fn paint(&self, painter: &egui::Painter, projection: &Projection, scene: &RenderScene) {
        if !scene.options.show_footprints {
            return;
        }
        let rgba = scene.options.footprint_color;
        let fill = color32(rgba);
        // Kontur in der Füllfarbe, aber voll deckend.
        let stroke = egui::Stroke::new(
            scene.options.footprint_stroke_width_px,
            color32([rgba[0], rgba[1], rgba[2], 1.0]),
        );
        for (_, element) in self.store.iter() {
            let points: Vec<egui::Pos2> = element
                .path_px
                .iter()
                .map(|px| projection.to_screen(*px))
                .collect();
            if points.len() < 3 {
                continue;
            }
            painter.add(egui::Shape::convex_polygon(points, fill, stroke));
        }
    }
}

impl Default for FootprintLayer {
    fn default() -> Self {
        Self::new()
    }
}
