//! Normalisiertes Rekonstruktions-Modell mit den Abfragen des Viewers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use glam::DVec3;
use indexmap::IndexMap;

use crate::core::camera::Camera;
use crate::core::domain::BoundingDomain;
use crate::core::error::LoadError;
use crate::core::point::Point;
use crate::core::shot::{footprint_from_points, Shot};

/// Vollständig aufgelöste Rekonstruktion: Kameras, Shots, Punktwolke
/// und der invertierte Punkt→Shots-Index.
///
/// Nach dem Laden append-only; Selektion und Hover leben in der
/// Session, nicht im Modell.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    cameras: IndexMap<String, Arc<Camera>>,
    /// Nach Bildname sortiert.
    shots: Vec<Shot>,
    shot_lookup: HashMap<String, usize>,
    points: Vec<Point>,
    point_lookup: HashMap<u64, usize>,
    /// Punkt-Id → Bildnamen der beobachtenden Shots.
    point_shots: HashMap<u64, Vec<String>>,
    domain: BoundingDomain,
}

impl Reconstruction {
    pub fn new(
        cameras: IndexMap<String, Arc<Camera>>,
        mut shots: Vec<Shot>,
        points: Vec<Point>,
        point_shots: HashMap<u64, Vec<String>>,
        domain: BoundingDomain,
    ) -> Self {
        shots.sort_by(|a, b| a.image_name.cmp(&b.image_name));
        let shot_lookup = shots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.image_name.clone(), i))
            .collect();
        let point_lookup = points.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self {
            cameras,
            shots,
            shot_lookup,
            points,
            point_lookup,
            point_shots,
            domain,
        }
    }

    pub fn cameras(&self) -> &IndexMap<String, Arc<Camera>> {
        &self.cameras
    }

    pub fn camera(&self, name: &str) -> Option<&Arc<Camera>> {
        self.cameras.get(name)
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn shot(&self, image_name: &str) -> Option<&Shot> {
        self.shot_lookup.get(image_name).map(|&i| &self.shots[i])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, id: u64) -> Option<&Point> {
        self.point_lookup.get(&id).map(|&i| &self.points[i])
    }

    /// Bildnamen aller Shots, die den Punkt beobachten; leer, wenn der
    /// Punkt unbekannt ist oder kein Index geliefert wurde.
    pub fn shots_for_point(&self, point_id: u64) -> &[String] {
        self.point_shots
            .get(&point_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn domain(&self) -> &BoundingDomain {
        &self.domain
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Kamera-Zuordnung über die Bildabmessungen: genau ein Treffer
    /// oder Fehler (Roh-Projekte referenzieren Kameras nicht per Id).
    pub fn find_camera_by_dimensions(
        &self,
        width: u32,
        height: u32,
    ) -> Result<Arc<Camera>, LoadError> {
        find_camera_by_dimensions(&self.cameras, width, height)
    }

    /// Berechnet für jeden Shot das Coverage-Polygon aus den im Bild
    /// liegenden Boden-Punkten (typischerweise die Mesh-Vertices).
    pub fn compute_footprints(&mut self, ground_points: &[DVec3]) {
        for shot in &mut self.shots {
            let Some(camera) = shot.camera.clone() else {
                continue;
            };
            let mut covered = Vec::new();
            for &p in ground_points {
                let pixel = camera.perspective_pixel(shot.camera_relative(p));
                if camera.in_frame(pixel) {
                    covered.push(p.truncate());
                }
            }
            shot.footprint = Some(footprint_from_points(&covered));
        }
    }
}

/// Sucht die Kamera mit exakt diesen Bildabmessungen; mehrdeutige oder
/// fehlende Treffer sind ein Fehler.
pub fn find_camera_by_dimensions(
    cameras: &IndexMap<String, Arc<Camera>>,
    width: u32,
    height: u32,
) -> Result<Arc<Camera>, LoadError> {
    let matches: Vec<&Arc<Camera>> = cameras
        .values()
        .filter(|c| c.width == width && c.height == height)
        .collect();
    match matches.as_slice() {
        [camera] => Ok(Arc::clone(camera)),
        _ => Err(LoadError::AmbiguousCamera {
            width,
            height,
            found: matches.len(),
        }),
    }
}

/// Invertiert die `shotPoints`-Tabelle (Bildname → Punkt-Ids) zum
/// Punkt→Shots-Index. Bildnamen je Punkt in alphabetischer Reihenfolge,
/// passend zur Sortierung der Shots.
pub fn invert_shot_points(shot_points: &BTreeMap<String, Vec<u64>>) -> HashMap<u64, Vec<String>> {
    let mut index: HashMap<u64, Vec<String>> = HashMap::new();
    for (image_name, point_ids) in shot_points {
        for &point_id in point_ids {
            let shots = index.entry(point_id).or_default();
            if !shots.iter().any(|s| s == image_name) {
                shots.push(image_name.clone());
            }
        }
    }
    index
}
