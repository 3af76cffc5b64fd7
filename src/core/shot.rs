//! Shots: Pose, Projektion in die Kamera und Coverage-Footprints.

use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::{DQuat, DVec2, DVec3, EulerRot};

use crate::core::camera::Camera;

/// Anzahl Winkel-Sektoren eines Footprint-Polygons.
pub const FOOTPRINT_SECTORS: usize = 36;

/// Bodenpolygon, das eine Aufnahme abdeckt (geordnete Stützpunkte).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footprint {
    pub path: Vec<DVec2>,
}

impl Footprint {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Baut das Footprint-Polygon aus den von einer Aufnahme abgedeckten
/// Bodenpunkten.
///
/// Um den Schwerpunkt werden [`FOOTPRINT_SECTORS`] Winkel-Sektoren
/// aufgespannt; pro Sektor bleibt der am weitesten entfernte Punkt
/// stehen. Sektoren ohne Punkt behalten den Schwerpunkt.
pub fn footprint_from_points(points: &[DVec2]) -> Footprint {
    footprint_with_sectors(points, FOOTPRINT_SECTORS)
}

pub(crate) fn footprint_with_sectors(points: &[DVec2], sectors: usize) -> Footprint {
    if points.is_empty() || sectors < 2 {
        return Footprint::default();
    }
    let centroid = points.iter().copied().sum::<DVec2>() / points.len() as f64;
    let mut best_dist = vec![0.0_f64; sectors];
    let mut furthest = vec![centroid; sectors];

    for &p in points {
        let (i, d) = sector_index_dist(p, centroid, sectors);
        if d > best_dist[i] {
            best_dist[i] = d;
            furthest[i] = p;
        }
    }
    Footprint { path: furthest }
}

/// Sektor-Index und quadrierte Distanz eines Punkts relativ zum
/// Schwerpunkt.
///
/// Der Halbwinkel aus `atan(vy/vx)` adressiert die rechte Hälfte der
/// Sektoren, `vx < 0` schiebt um eine halbe Umdrehung weiter.
fn sector_index_dist(p: DVec2, centroid: DVec2, sectors: usize) -> (usize, f64) {
    let v = p - centroid;
    let alpha = if v.x == 0.0 {
        if v.y >= 0.0 {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        }
    } else {
        (v.y / v.x).atan()
    };
    let half = sectors / 2;
    let mut index = (half as f64 * (alpha / PI + 0.5)) as usize;
    if v.x < 0.0 {
        index += half;
    }
    (index.min(sectors - 1), v.x * v.x + v.y * v.y)
}

/// Eine einzelne Aufnahme: Pose, Kamera-Referenz und Footprint.
///
/// Die Orientierung wird beim Konstruieren einmal in ein Quaternion
/// überführt; `rotation` behält den gelieferten Rotationsvektor für
/// den Report-Export.
#[derive(Debug, Clone)]
pub struct Shot {
    pub image_name: String,
    pub camera: Option<Arc<Camera>>,
    pub translation: DVec3,
    /// Rotationsvektor (skalierte Drehachse), falls geliefert.
    pub rotation: Option<DVec3>,
    /// Euler-Winkel, extrinsisch x-y-z, in Radiant.
    pub rotation_euler_xyz: DVec3,
    /// Originalauflösung des Bildes (Breite, Höhe), falls bekannt.
    pub original_dimensions: Option<(u32, u32)>,
    pub footprint: Option<Footprint>,
    orientation: DQuat,
}

impl Shot {
    /// Erstellt einen Shot aus dem Rotationsvektor der Rohdaten.
    pub fn from_rotation_vector(
        image_name: String,
        camera: Option<Arc<Camera>>,
        translation: DVec3,
        rotation: DVec3,
    ) -> Self {
        let orientation = DQuat::from_scaled_axis(rotation);
        Self {
            image_name,
            camera,
            translation,
            rotation: Some(rotation),
            rotation_euler_xyz: euler_xyz_extrinsic(orientation),
            original_dimensions: None,
            footprint: None,
            orientation,
        }
    }

    /// Erstellt einen Shot aus fertigen Euler-Winkeln (Report-Daten
    /// ohne Rotationsvektor).
    pub fn from_euler_xyz(
        image_name: String,
        camera: Option<Arc<Camera>>,
        translation: DVec3,
        euler_xyz: DVec3,
    ) -> Self {
        let orientation = DQuat::from_euler(EulerRot::ZYX, euler_xyz.z, euler_xyz.y, euler_xyz.x);
        Self {
            image_name,
            camera,
            translation,
            rotation: None,
            rotation_euler_xyz: euler_xyz,
            original_dimensions: None,
            footprint: None,
            orientation,
        }
    }

    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    /// Weltkoordinaten → kamerarelative Koordinaten: `R · (p − t)`.
    pub fn camera_relative(&self, world: DVec3) -> DVec3 {
        self.orientation * (world - self.translation)
    }

    /// Weltkoordinaten → normalisierte Kamera-Pixel; `None` ohne Kamera.
    pub fn camera_pixel(&self, world: DVec3) -> Option<DVec2> {
        self.camera
            .as_ref()
            .map(|c| c.perspective_pixel(self.camera_relative(world)))
    }

    /// Bodenposition (x, y) der Aufnahme.
    pub fn ground_position(&self) -> DVec2 {
        self.translation.truncate()
    }

    /// Euler-Winkel in Grad, für die Anzeige.
    pub fn rotation_euler_degrees(&self) -> DVec3 {
        self.rotation_euler_xyz * (180.0 / PI)
    }
}

/// Extrinsische x-y-z-Zerlegung (`R = Rz·Ry·Rx`), Rückgabe als
/// `(winkel_x, winkel_y, winkel_z)`.
fn euler_xyz_extrinsic(q: DQuat) -> DVec3 {
    let (z, y, x) = q.to_euler(EulerRot::ZYX);
    DVec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gopro8_linear() -> Arc<Camera> {
        Arc::new(Camera {
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
        })
    }

    fn a_shot() -> Shot {
        Shot::from_rotation_vector(
            "a.jpeg".to_string(),
            Some(gopro8_linear()),
            DVec3::new(
                0.033173629227221335,
                0.5114751173118289,
                -0.07091459305900544,
            ),
            DVec3::new(2.0577299307555323, -2.20218132761156, -0.04484071736689525),
        )
    }

    #[test]
    fn camera_relative_matches_reference_values() {
        let point = DVec3::new(0.43375263823147325, 2.4853185781312033, -3.0598703709130475);
        let got = a_shot().camera_relative(point);

        assert_relative_eq!(got.x, 1.2646942673746822, epsilon = 1e-9);
        assert_relative_eq!(got.y, 2.678944091796595, epsilon = 1e-9);
        assert_relative_eq!(got.z, 2.036753006024462, epsilon = 1e-9);
    }

    #[test]
    fn euler_angles_for_single_axis_rotation() {
        let shot = Shot::from_rotation_vector(
            "z.jpeg".to_string(),
            None,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, FRAC_PI_2),
        );
        assert_relative_eq!(shot.rotation_euler_xyz.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(shot.rotation_euler_xyz.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(shot.rotation_euler_xyz.z, FRAC_PI_2, epsilon = 1e-12);

        let degrees = shot.rotation_euler_degrees();
        assert_relative_eq!(degrees.z, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn euler_round_trip_preserves_orientation() {
        let original = a_shot();
        let rebuilt = Shot::from_euler_xyz(
            original.image_name.clone(),
            None,
            original.translation,
            original.rotation_euler_xyz,
        );

        // Orientierungen über die Wirkung auf einen Probevektor vergleichen
        let probe = DVec3::new(0.3, -1.2, 2.5);
        let a = original.orientation() * probe;
        let b = rebuilt.orientation() * probe;
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn camera_pixel_requires_a_camera() {
        let mut shot = a_shot();
        assert!(shot.camera_pixel(DVec3::new(0.0, 0.0, 5.0)).is_some());
        shot.camera = None;
        assert!(shot.camera_pixel(DVec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn footprint_places_cardinal_points_in_expected_sectors() {
        let points = [
            DVec2::new(1.0, 0.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(0.0, -1.0),
        ];
        let fp = footprint_from_points(&points);

        assert_eq!(fp.path.len(), FOOTPRINT_SECTORS);
        assert_eq!(fp.path[9], DVec2::new(1.0, 0.0));
        assert_eq!(fp.path[27], DVec2::new(-1.0, 0.0));
        assert_eq!(fp.path[18], DVec2::new(0.0, 1.0));
        assert_eq!(fp.path[0], DVec2::new(0.0, -1.0));

        // Unbesetzte Sektoren behalten den Schwerpunkt (hier der Ursprung)
        assert_eq!(fp.path[5], DVec2::ZERO);
    }

    #[test]
    fn footprint_keeps_only_the_furthest_point_per_sector() {
        let points = [DVec2::new(1.0, 0.0), DVec2::new(3.0, 0.0)];
        let fp = footprint_from_points(&points);

        // Schwerpunkt (2, 0): beide Punkte liegen auf der x-Achse,
        // einer rechts (Sektor 9), einer links (Sektor 27)
        assert_eq!(fp.path[9], DVec2::new(3.0, 0.0));
        assert_eq!(fp.path[27], DVec2::new(1.0, 0.0));
        assert_eq!(fp.path[1], DVec2::new(2.0, 0.0));
    }

    #[test]
    fn footprint_of_no_points_is_empty() {
        assert!(footprint_from_points(&[]).is_empty());
    }
}
