//! Shot-Ebene: ein Marker pro Kameraposition.
//!
//! Geometrie wird nur beim Szenenwechsel neu gebaut; Auswahl- und
//! Hover-Änderungen frischen ausschließlich den Stil der bestehenden
//! Elemente auf (Restyle statt Neuaufbau).

use eframe::egui;
use glam::DVec2;

use super::sync::{SceneStore, SyncStats};
use super::types::{color32, Projection};
use crate::shared::RenderScene;

/// Darstellungszustand eines Shot-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotStyle {
    Default,
    /// Dauerhaft selektiert (Klick-Toggle)
    Selected,
    /// Teil der Hover-Arbeitsmenge eines Punkts
    Highlighted,
}

/// Gezeichneter Shot in Skalen-Pixeln.
#[derive(Debug, Clone)]
pub struct ShotElement {
    pub px: DVec2,
    pub style: ShotStyle,
    pub hovered: bool,
}

/// Hält die Shot-Elemente über Frames hinweg.
pub struct ShotLayer {
    store: SceneStore<String, ShotElement>,
    scene_revision: Option<u64>,
    style_revision: Option<u64>,
}

impl ShotLayer {
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            scene_revision: None,
            style_revision: None,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn element(&self, image_name: &str) -> Option<&ShotElement> {
        self.store.get(&image_name.to_string())
    }

    /// Gleicht den Bestand ab; `None`, wenn nichts zu tun ist.
    pub fn sync(&mut self, scene: &RenderScene) -> Option<SyncStats> {
        if self.scene_revision != Some(scene.scene_revision) {
            self.scene_revision = Some(scene.scene_revision);
            self.style_revision = Some(scene.shot_style_revision);
            return Some(self.rebuild(scene));
        }
        if self.style_revision != Some(scene.shot_style_revision) {
            self.style_revision = Some(scene.shot_style_revision);
            return Some(self.store.update_in_place(|name, element| {
                element.style = resolve_style(scene, name);
                element.hovered = scene.hovered_shot.as_deref() == Some(name.as_str());
            }));
        }
        None
    }

    fn rebuild(&mut self, scene: &RenderScene) -> SyncStats {
        let (Some(reconstruction), Some(mapper)) = (&scene.reconstruction, &scene.mapper) else {
            let exited = self.store.clear();
            return SyncStats { exited, ..SyncStats::default() };
        };

        let data = reconstruction
            .shots()
            .iter()
            .map(|shot| (shot.image_name.clone(), mapper.world_to_px(shot.ground_position())));
        self.store.sync(
            data,
            |name, px| ShotElement {
                px: *px,
                style: resolve_style(scene, name),
                hovered: scene.hovered_shot.as_deref() == Some(name.as_str()),
            },
            |px, element| element.px = *px,
        )
    }

    pub fn paint(&self, painter: &egui::Painter, projection: &Projection, scene: &RenderScene) {
        let radius = projection.scaled(scene.options.shot_radius_px);
        for (_, element) in self.store.iter() {
            let center = projection.to_screen(element.px);
            let color = match element.style {
                ShotStyle::Default => color32(scene.options.shot_color),
                ShotStyle::Selected => color32(scene.options.shot_color_selected),
                ShotStyle::Highlighted => color32(scene.options.shot_color_highlight),
            };
            painter.circle_filled(center, radius, color);
            if element.hovered {
                painter.circle_stroke(
                    center,
                    radius + 1.5,
                    egui::Stroke::new(1.5, egui::Color32::WHITE),
                );
            }
        }
    }
}

impl Default for ShotLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Arbeitsmenge schlägt die dauerhafte Auswahl, solange ein Punkt
/// gehovert wird.
fn resolve_style(scene: &RenderScene, image_name: &str) -> ShotStyle {
    if scene.highlighted_shots.iter().any(|n| n == image_name) {
        ShotStyle::Highlighted
    } else if scene.selected_shots.contains(image_name) {
        ShotStyle::Selected
    } else {
        ShotStyle::Default
    }
}
