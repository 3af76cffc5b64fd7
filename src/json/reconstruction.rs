//! Parser für das Report-JSON (`reconstruction_shot_points.json`).

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::{DVec2, DVec3};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{
    invert_shot_points, AxisRange, BoundingDomain, Camera, Footprint, LoadError, Point,
    Reconstruction, Shot,
};

/// Rohschema des Report-JSON.
///
/// `serde` weist Typabweichungen beim ersten Treffer ab; die Querbezüge
/// (Kamera-Ids, Punkt-Ids) werden anschließend explizit aufgelöst.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReconstruction {
    #[serde(default)]
    cameras: IndexMap<String, RawCamera>,
    shots: Vec<RawShot>,
    #[serde(default)]
    points: RawPoints,
    #[serde(default)]
    shot_points: BTreeMap<String, Vec<u64>>,
    #[serde(default)]
    boundaries: Option<RawBoundaries>,
}

/// Kamera-Eintrag, wie er sowohl im Report-JSON als auch in der
/// `cameras.json` roher Projekte vorkommt. Die Brennweite steht
/// entweder in `focal` oder in `focal_x`/`focal_y`.
#[derive(Debug, Deserialize)]
pub(super) struct RawCamera {
    #[serde(default)]
    name: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    projection_type: String,
    #[serde(default)]
    focal: Option<f64>,
    #[serde(default)]
    focal_x: Option<f64>,
    #[serde(default)]
    focal_y: Option<f64>,
    #[serde(default)]
    c_x: f64,
    #[serde(default)]
    c_y: f64,
    #[serde(default)]
    k1: f64,
    #[serde(default)]
    k2: f64,
    #[serde(default)]
    k3: f64,
    #[serde(default)]
    p1: f64,
    #[serde(default)]
    p2: f64,
}

impl RawCamera {
    /// Konvertiert den Roheintrag; `key` ist der Map-Schlüssel und
    /// dient als Name, wenn kein `name`-Feld geliefert wurde.
    pub(super) fn into_camera(self, key: &str) -> Result<Camera, LoadError> {
        let focal = self.resolve_focal(key)?;
        Ok(Camera {
            name: self.name.unwrap_or_else(|| key.to_string()),
            projection_type: self.projection_type,
            width: self.width,
            height: self.height,
            focal,
            c_x: self.c_x,
            c_y: self.c_y,
            k1: self.k1,
            k2: self.k2,
            k3: self.k3,
            p1: self.p1,
            p2: self.p2,
        })
    }

    fn resolve_focal(&self, key: &str) -> Result<f64, LoadError> {
        if let Some(focal) = self.focal {
            return Ok(focal);
        }
        match (self.focal_x, self.focal_y) {
            (Some(focal_x), Some(focal_y)) if focal_x == focal_y => Ok(focal_x),
            (Some(focal_x), Some(focal_y)) => Err(LoadError::MismatchedFocals {
                name: key.to_string(),
                focal_x,
                focal_y,
            }),
            _ => Err(LoadError::MissingFocal {
                name: key.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShot {
    image_name: String,
    translation: [f64; 3],
    /// Rotationsvektor (skalierte Drehachse), Vorrang vor den
    /// Euler-Winkeln.
    #[serde(default)]
    rotation: Option<[f64; 3]>,
    #[serde(default, rename = "rotationEulerXYZ")]
    rotation_euler_xyz: Option<[f64; 3]>,
    #[serde(default)]
    camera: Option<String>,
    #[serde(default)]
    original_dimensions: Option<RawDimensions>,
    #[serde(default)]
    boundaries: Option<RawFootprint>,
}

impl RawShot {
    fn into_shot(self, cameras: &IndexMap<String, Arc<Camera>>) -> Result<Shot, LoadError> {
        let camera = match &self.camera {
            Some(id) => {
                let camera = cameras.get(id).ok_or_else(|| LoadError::UnresolvedCamera {
                    shot: self.image_name.clone(),
                    camera: id.clone(),
                })?;
                Some(Arc::clone(camera))
            }
            None => None,
        };

        let translation = DVec3::from_array(self.translation);
        let mut shot = match (self.rotation, self.rotation_euler_xyz) {
            (Some(rotation), _) => Shot::from_rotation_vector(
                self.image_name,
                camera,
                translation,
                DVec3::from_array(rotation),
            ),
            (None, Some(euler)) => Shot::from_euler_xyz(
                self.image_name,
                camera,
                translation,
                DVec3::from_array(euler),
            ),
            (None, None) => {
                return Err(LoadError::Schema(format!(
                    "Shot '{}' hat weder 'rotation' noch 'rotationEulerXYZ'",
                    self.image_name
                )))
            }
        };

        if let Some(dimensions) = self.original_dimensions {
            shot.original_dimensions = Some((dimensions.width, dimensions.height));
        }
        if let Some(boundaries) = self.boundaries {
            shot.footprint = Some(Footprint {
                path: boundaries
                    .path
                    .iter()
                    .map(|&[x, y]| DVec2::new(x, y))
                    .collect(),
            });
        }
        Ok(shot)
    }
}

#[derive(Debug, Deserialize)]
struct RawDimensions {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct RawFootprint {
    path: Vec<[f64; 2]>,
}

/// Punktliste in den drei vorkommenden Formen: nackte Tripel (Id =
/// Position), Einträge mit expliziter Id oder Map Id → Eintrag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPoints {
    Tuples(Vec<[f64; 3]>),
    Records(Vec<RawPointRecord>),
    ById(BTreeMap<String, RawPointEntry>),
}

impl Default for RawPoints {
    fn default() -> Self {
        RawPoints::Tuples(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct RawPointRecord {
    id: u64,
    coordinates: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct RawPointEntry {
    coordinates: [f64; 3],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoundaries {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

/// Parsed das Report-JSON in eine vollständig aufgelöste
/// `Reconstruction`.
///
/// Schlägt ein Querbezug fehl (etwa eine unbekannte Kamera-Id), kommt
/// ein Fehler und nie ein Teilergebnis zurück.
pub fn parse_reconstruction_json(json: &str) -> Result<Reconstruction, LoadError> {
    let raw: RawReconstruction = serde_json::from_str(json)?;

    let mut cameras: IndexMap<String, Arc<Camera>> = IndexMap::new();
    for (key, raw_camera) in raw.cameras {
        let camera = raw_camera.into_camera(&key)?;
        cameras.insert(key, Arc::new(camera));
    }

    let mut shots = Vec::with_capacity(raw.shots.len());
    for raw_shot in raw.shots {
        shots.push(raw_shot.into_shot(&cameras)?);
    }

    let points = collect_points(raw.points)?;
    let point_shots = invert_shot_points(&raw.shot_points);
    let domain = resolve_domain(raw.boundaries, &points, &shots)?;

    Ok(Reconstruction::new(
        cameras,
        shots,
        points,
        point_shots,
        domain,
    ))
}

fn collect_points(raw: RawPoints) -> Result<Vec<Point>, LoadError> {
    match raw {
        RawPoints::Tuples(tuples) => Ok(tuples
            .into_iter()
            .enumerate()
            .map(|(index, coords)| Point::new(index as u64, DVec3::from_array(coords)))
            .collect()),
        RawPoints::Records(records) => Ok(records
            .into_iter()
            .map(|record| Point::new(record.id, DVec3::from_array(record.coordinates)))
            .collect()),
        RawPoints::ById(entries) => entries
            .into_iter()
            .map(|(key, entry)| {
                let id = key
                    .parse::<u64>()
                    .map_err(|_| LoadError::Schema(format!("Punkt-Id '{key}' ist keine Zahl")))?;
                Ok(Point::new(id, DVec3::from_array(entry.coordinates)))
            })
            .collect(),
    }
}

/// Gelieferte `boundaries` haben Vorrang; sonst Min/Max der
/// Punktwolke, notfalls der Shot-Positionen.
fn resolve_domain(
    boundaries: Option<RawBoundaries>,
    points: &[Point],
    shots: &[Shot],
) -> Result<BoundingDomain, LoadError> {
    if let Some(bounds) = boundaries {
        return Ok(BoundingDomain::flat(
            AxisRange::new(bounds.x_min, bounds.x_max),
            AxisRange::new(bounds.y_min, bounds.y_max),
        ));
    }

    let coords: Vec<DVec3> = points.iter().map(|p| p.coordinates).collect();
    if let Some(domain) = BoundingDomain::from_points(&coords) {
        return Ok(domain);
    }

    let positions: Vec<DVec3> = shots.iter().map(|s| s.translation).collect();
    BoundingDomain::from_points(&positions).ok_or_else(|| {
        LoadError::Schema("weder Punkte noch 'boundaries' vorhanden, Domäne unbestimmt".to_string())
    })
}
