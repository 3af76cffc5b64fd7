//! Orthophoto-Ebene: georeferenziertes Raster unter Punkten und Shots.

use eframe::egui;
use glam::DVec2;

use super::types::Projection;
use crate::core::Orthophoto;
use crate::shared::RenderScene;

/// Lädt das Orthophoto als egui-Textur hoch und zeichnet es anhand
/// seiner Welt-Ecken.
pub struct OrthophotoLayer {
    texture: Option<egui::TextureHandle>,
    /// Adresse des zuletzt hochgeladenen Overlays; vermeidet den
    /// Re-Upload bei Resize, wenn das Bild dasselbe geblieben ist.
    uploaded: Option<usize>,
}

impl OrthophotoLayer {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded: None,
        }
    }

    pub fn paint(&mut self, painter: &egui::Painter, projection: &Projection, scene: &RenderScene) {
        if !scene.orthophoto_visible {
            return;
        }
        let Some(orthophoto) = scene.orthophoto.as_deref() else {
            self.texture = None;
            self.uploaded = None;
            return;
        };
        let Some(mapper) = scene.mapper.as_ref() else {
            return;
        };

        let key = scene
            .orthophoto
            .as_ref()
            .map(|arc| std::sync::Arc::as_ptr(arc) as usize);
        if self.uploaded != key {
            self.texture = upload(painter.ctx(), orthophoto);
            self.uploaded = key;
        }
        let Some(texture) = self.texture.as_ref() else {
            return;
        };

        let (min_corner, max_corner) = orthophoto.corners().world_corners();
        // Bildzeile 0 liegt am Nordrand (Welt-Y-Maximum).
        let north_west = projection.to_screen(mapper.world_to_px(DVec2::new(
            min_corner.x,
            max_corner.y,
        )));
        let south_east = projection.to_screen(mapper.world_to_px(DVec2::new(
            max_corner.x,
            min_corner.y,
        )));

        let rect = egui::Rect::from_two_pos(north_west, south_east);
        let uv = if north_west.y <= south_east.y {
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
        } else {
            // Top-Down-Konvention: Nordrand landet unten, Textur vertikal
            // gespiegelt abtasten.
            egui::Rect::from_min_max(egui::pos2(0.0, 1.0), egui::pos2(1.0, 0.0))
        };
        let tint = egui::Color32::WHITE.linear_multiply(scene.orthophoto_opacity);
        painter.image(texture.id(), rect, uv, tint);
    }
}

impl Default for OrthophotoLayer {
    fn default() -> Self {
        Self::new()
    }
}

fn upload(ctx: &egui::Context, orthophoto: &Orthophoto) -> Option<egui::TextureHandle> {
    let image = orthophoto.image()?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    log::info!("Orthophoto-Textur hochgeladen ({}x{})", size[0], size[1]);
    Some(ctx.load_texture("orthophoto", color_image, egui::TextureOptions::LINEAR))
}
