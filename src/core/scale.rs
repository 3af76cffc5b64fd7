//! Lineare 1-D-Skalen und das daraus gebaute X/Y-Mapper-Paar.

use glam::DVec2;

use crate::core::domain::{FittedDomains, Viewport};

/// Invertierbare lineare Abbildung Domäne → Pixel.
///
/// Die Range-Endpunkte dürfen in beliebiger Reihenfolge stehen; eine
/// fallende Range spiegelt die Achse (für Screen-Y nach oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Degenerierte Domänen löst der Fitter vorab auf; hier wird nicht
    /// erneut geprüft.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Domänenwert → Pixel.
    pub fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain[0]) / (self.domain[1] - self.domain[0]);
        self.range[0] + t * (self.range[1] - self.range[0])
    }

    /// Pixel → Domänenwert (Umkehrung von [`scale`](Self::scale)).
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = (pixel - self.range[0]) / (self.range[1] - self.range[0]);
        self.domain[0] + t * (self.domain[1] - self.domain[0])
    }

    /// Pixel pro Welteinheit (Betrag, unabhängig von der Achsrichtung).
    pub fn pixels_per_unit(&self) -> f64 {
        ((self.range[1] - self.range[0]) / (self.domain[1] - self.domain[0])).abs()
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }
}

/// X/Y-Skalenpaar einer geladenen Szene.
///
/// Wird nur bei Resize oder Neuladen neu gebaut; Pan und Zoom laufen
/// ausschließlich über die darüberliegende [`ViewTransform`]
/// (transformations-agnostisch).
///
/// [`ViewTransform`]: crate::core::view_transform::ViewTransform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Mapper {
    /// Baut das Skalenpaar aus gefitteten Domänen.
    ///
    /// `y_axis_up` dreht die Y-Range um, so dass wachsendes Welt-Y auf
    /// dem Bildschirm nach oben zeigt; sonst gilt die Top-Down-Konvention
    /// des Referenz-Viewers.
    pub fn new(fitted: FittedDomains, viewport: Viewport, inset: f64, y_axis_up: bool) -> Self {
        let x = LinearScale::new(
            [fitted.x.min, fitted.x.max],
            [inset, viewport.width - inset],
        );
        let y_range = if y_axis_up {
            [viewport.height - inset, inset]
        } else {
            [inset, viewport.height - inset]
        };
        let y = LinearScale::new([fitted.y.min, fitted.y.max], y_range);
        Self { x, y }
    }

    /// Weltposition → Skalen-Pixel (ohne Pan/Zoom).
    pub fn world_to_px(&self, world: DVec2) -> DVec2 {
        DVec2::new(self.x.scale(world.x), self.y.scale(world.y))
    }

    /// Skalen-Pixel → Weltposition.
    pub fn px_to_world(&self, px: DVec2) -> DVec2 {
        DVec2::new(self.x.invert(px.x), self.y.invert(px.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::AxisRange;
    use approx::assert_relative_eq;

    #[test]
    fn scale_maps_domain_endpoints_to_range_endpoints() {
        let s = LinearScale::new([0.0, 100.0], [10.0, 290.0]);
        assert_relative_eq!(s.scale(0.0), 10.0);
        assert_relative_eq!(s.scale(100.0), 290.0);
        assert_relative_eq!(s.scale(50.0), 150.0);
    }

    #[test]
    fn invert_round_trips_within_epsilon() {
        let s = LinearScale::new([-25.0, 75.0], [10.0, 290.0]);
        for v in [-25.0, -3.7, 0.0, 12.345, 74.99] {
            assert_relative_eq!(s.invert(s.scale(v)), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn reversed_range_flips_axis() {
        let s = LinearScale::new([0.0, 10.0], [290.0, 10.0]);
        assert_relative_eq!(s.scale(0.0), 290.0);
        assert_relative_eq!(s.scale(10.0), 10.0);
        assert_relative_eq!(s.invert(10.0), 10.0);
        assert_relative_eq!(s.pixels_per_unit(), 28.0);
    }

    #[test]
    fn mapper_uses_inset_range_both_axes() {
        let fitted = FittedDomains {
            x: AxisRange::new(0.0, 100.0),
            y: AxisRange::new(-25.0, 75.0),
        };
        let m = Mapper::new(fitted, Viewport::new(300.0, 300.0), 10.0, false);
        let px = m.world_to_px(glam::DVec2::new(0.0, -25.0));
        assert_relative_eq!(px.x, 10.0);
        assert_relative_eq!(px.y, 10.0);
        // Gleiches Pixel-pro-Einheit-Verhältnis auf beiden Achsen
        assert_relative_eq!(m.x.pixels_per_unit(), m.y.pixels_per_unit());
    }

    #[test]
    fn mapper_y_axis_up_reverses_y_range() {
        let fitted = FittedDomains {
            x: AxisRange::new(0.0, 10.0),
            y: AxisRange::new(0.0, 10.0),
        };
        let m = Mapper::new(fitted, Viewport::new(300.0, 300.0), 10.0, true);
        assert_relative_eq!(m.y.scale(0.0), 290.0);
        assert_relative_eq!(m.y.scale(10.0), 10.0);

        let world = m.px_to_world(m.world_to_px(glam::DVec2::new(3.0, 7.0)));
        assert_relative_eq!(world.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(world.y, 7.0, epsilon = 1e-9);
    }
}
