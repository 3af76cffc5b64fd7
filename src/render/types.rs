//! Gemeinsame Typen der Render-Ebenen.

use eframe::egui;
use glam::DVec2;

use crate::core::ViewTransform;

/// Abbildung Skalen-Pixel → Bildschirm für einen Frame.
///
/// `origin` ist die linke obere Ecke der Kartenfläche; Pan/Zoom laufen
/// über die [`ViewTransform`], die Skalen bleiben unangetastet.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub origin: egui::Pos2,
    pub transform: ViewTransform,
}

impl Projection {
    pub fn new(origin: egui::Pos2, transform: ViewTransform) -> Self {
        Self { origin, transform }
    }

    /// Skalen-Pixel → Bildschirmposition.
    pub fn to_screen(&self, px: DVec2) -> egui::Pos2 {
        let t = self.transform.apply(px);
        self.origin + egui::vec2(t.x as f32, t.y as f32)
    }

    /// Länge in Skalen-Pixeln → Bildschirm-Pixel beim aktuellen Zoom.
    pub fn scaled(&self, len_px: f32) -> f32 {
        len_px * self.transform.scale as f32
    }
}

/// RGBA-Quadrupel aus den Optionen → egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_applies_zoom_then_origin() {
        let mut transform = ViewTransform::identity();
        transform.scale = 2.0;
        transform.translation = DVec2::new(3.0, -1.0);
        let projection = Projection::new(egui::pos2(100.0, 50.0), transform);

        let screen = projection.to_screen(DVec2::new(10.0, 20.0));

        assert_eq!(screen, egui::pos2(100.0 + 23.0, 50.0 + 39.0));
        assert_eq!(projection.scaled(3.0), 6.0);
    }
}
