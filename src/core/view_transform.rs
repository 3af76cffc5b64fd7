//! Pixelraum-Transformation für Pan und Zoom.

use glam::DVec2;

/// Affine Pan/Zoom-Transformation über dem Skalen-Output.
///
/// Wirkt ausschließlich im Pixelraum: `angezeigt = scale · px + translation`.
/// Die Skalen darunter bleiben während der gesamten Interaktion
/// unverändert; nur diese Transformation ändert sich pro Pan/Zoom-Tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub translation: DVec2,
    pub scale: f64,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    pub fn identity() -> Self {
        Self {
            translation: DVec2::ZERO,
            scale: 1.0,
        }
    }

    /// Wendet die Transformation auf einen Skalen-Pixel an.
    pub fn apply(&self, px: DVec2) -> DVec2 {
        px * self.scale + self.translation
    }

    /// Kehrt die Transformation um (Screen-Pixel → Skalen-Pixel).
    pub fn invert(&self, screen: DVec2) -> DVec2 {
        (screen - self.translation) / self.scale
    }

    /// Verschiebt die Ansicht um ein Screen-Delta.
    pub fn pan(&mut self, delta: DVec2) {
        self.translation += delta;
    }

    /// Zoomt um `factor` und hält dabei den Fokus-Pixel auf dem
    /// Bildschirm stabil.
    pub fn zoom_towards(&mut self, factor: f64, focus: DVec2) {
        let new_scale = (self.scale * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let applied = new_scale / self.scale;
        self.translation = focus - (focus - self.translation) * applied;
        self.scale = new_scale;
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}
