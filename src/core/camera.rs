//! Kamera-Intrinsik und perspektivische Projektion (OpenSfM-Modell).

use glam::{DVec2, DVec3};

/// Intrinsik einer Aufnahme-Kamera.
///
/// `focal` und die Verzerrungskoeffizienten beziehen sich auf das
/// normalisierte Bildkoordinatensystem von OpenSfM, in dem die größere
/// Bildkante den Bereich [-0.5, 0.5] aufspannt.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub name: String,
    pub projection_type: String,
    pub width: u32,
    pub height: u32,
    pub focal: f64,
    pub c_x: f64,
    pub c_y: f64,
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub p1: f64,
    pub p2: f64,
}

impl Camera {
    /// Halbe Bildausdehnung im normalisierten Rahmen.
    ///
    /// Die größere Bildkante bekommt 0.5, die kleinere wird mit dem
    /// Seitenverhältnis skaliert.
    pub fn frame_half_extents(&self) -> DVec2 {
        let (w, h) = (self.width as f64, self.height as f64);
        if self.width >= self.height {
            DVec2::new(0.5, 0.5 * h / w)
        } else {
            DVec2::new(0.5 * w / h, 0.5)
        }
    }

    /// Projiziert kamerarelative Koordinaten auf normalisierte
    /// Bildpixel (radiale Verzerrung über `k1`/`k2`).
    pub fn perspective_pixel(&self, rel: DVec3) -> DVec2 {
        let x_n = rel.x / rel.z;
        let y_n = rel.y / rel.z;
        let r2 = x_n * x_n + y_n * y_n;
        let d = 1.0 + r2 * self.k1 + r2 * r2 * self.k2;
        DVec2::new(self.focal * d * x_n, self.focal * d * y_n)
    }

    /// Liegt der projizierte Pixel innerhalb des Bildrahmens?
    pub fn in_frame(&self, pixel: DVec2) -> bool {
        let half = self.frame_half_extents();
        pixel.x.abs() <= half.x && pixel.y.abs() <= half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// GoPro 8 im Linear-Modus, Werte aus einem realen cameras.json.
    fn gopro8_linear() -> Camera {
        Camera {
            name: "gopro8".to_string(),
            projection_type: "brown".to_string(),
            width: 3000,
            height: 4000,
            focal: 0.5207834102328533,
            c_x: 0.0,
            c_y: 0.0,
            k1: -0.10638507280457302,
            k2: 0.06769290794144624,
            k3: 0.0,
            p1: 0.0,
            p2: 0.0,
        }
    }

    // Horizontales Sichtfeld der GoPro, empirisch auf 89.9° angepasst
    const HORIZ_FOV_HALF: f64 = 89.9 / 2.0 / 180.0 * PI;
    const GIVEN_Z: f64 = 10.0;

    #[test]
    fn perspective_center_projects_to_origin() {
        let px = gopro8_linear().perspective_pixel(DVec3::new(0.0, 0.0, GIVEN_Z));
        assert_relative_eq!(px.x, 0.0);
        assert_relative_eq!(px.y, 0.0);
    }

    #[test]
    fn perspective_max_right_hits_half_frame() {
        let x = GIVEN_Z * HORIZ_FOV_HALF.tan();
        let px = gopro8_linear().perspective_pixel(DVec3::new(x, 0.0, GIVEN_Z));
        assert_relative_eq!(px.x, 0.5, epsilon = 1e-3);
        assert_relative_eq!(px.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn perspective_is_scale_invariant() {
        let x = GIVEN_Z * HORIZ_FOV_HALF.tan();
        let px = gopro8_linear().perspective_pixel(DVec3::new(x * 2.0, 0.0, GIVEN_Z * 2.0));
        assert_relative_eq!(px.x, 0.5, epsilon = 1e-3);
        assert_relative_eq!(px.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn perspective_max_top_hits_half_frame() {
        let y = GIVEN_Z * HORIZ_FOV_HALF.tan();
        let px = gopro8_linear().perspective_pixel(DVec3::new(0.0, y, GIVEN_Z));
        assert_relative_eq!(px.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(px.y, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn frame_half_extents_scale_the_smaller_edge() {
        // Hochformat 3000x4000: volle Halbhöhe, Breite über das Seitenverhältnis
        let half = gopro8_linear().frame_half_extents();
        assert_relative_eq!(half.x, 0.375);
        assert_relative_eq!(half.y, 0.5);

        let mut landscape = gopro8_linear();
        landscape.width = 4000;
        landscape.height = 3000;
        let half = landscape.frame_half_extents();
        assert_relative_eq!(half.x, 0.5);
        assert_relative_eq!(half.y, 0.375);
    }

    #[test]
    fn in_frame_is_inclusive_at_the_border() {
        let camera = gopro8_linear();
        assert!(camera.in_frame(DVec2::new(0.375, 0.5)));
        assert!(camera.in_frame(DVec2::new(-0.375, -0.5)));
        assert!(!camera.in_frame(DVec2::new(0.3751, 0.0)));
        assert!(!camera.in_frame(DVec2::new(0.0, 0.5001)));
    }
}
