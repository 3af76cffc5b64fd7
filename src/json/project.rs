//! Lader für rohe ODM-Projektverzeichnisse.
//!
//! Liest `cameras.json`, `odm_report/shots.geojson` und das 2.5D-Mesh
//! aus `odm_texturing_25d`. Kameras werden über die Bildabmessungen
//! zugeordnet, die Footprints direkt aus den Mesh-Vertices berechnet.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::DVec3;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{
    find_camera_by_dimensions, parse_wavefront_25d, Camera, LoadError, Reconstruction, Shot,
};
use crate::json::reconstruction::RawCamera;

/// GeoJSON-Ausschnitt von `shots.geojson`; gelesen werden nur die
/// Properties der Features.
#[derive(Debug, Deserialize)]
struct ShotsGeojson {
    features: Vec<ShotFeature>,
}

#[derive(Debug, Deserialize)]
struct ShotFeature {
    properties: ShotProperties,
}

#[derive(Debug, Deserialize)]
struct ShotProperties {
    filename: String,
    translation: [f64; 3],
    rotation: [f64; 3],
    width: u32,
    height: u32,
}

/// Lädt ein ODM-Projektverzeichnis zu einer fertigen Rekonstruktion.
///
/// Die Domäne ist die Bounding-Box des Mesh; eine Punktwolke liefert
/// das Rohformat nicht.
pub fn load_project(project_dir: &Path) -> Result<Reconstruction, LoadError> {
    let cameras_json = std::fs::read_to_string(project_dir.join("cameras.json"))?;
    let raw_cameras: IndexMap<String, RawCamera> = serde_json::from_str(&cameras_json)?;
    let mut cameras: IndexMap<String, Arc<Camera>> = IndexMap::new();
    for (key, raw_camera) in raw_cameras {
        let camera = raw_camera.into_camera(&key)?;
        cameras.insert(key, Arc::new(camera));
    }

    let shots_json =
        std::fs::read_to_string(project_dir.join("odm_report").join("shots.geojson"))?;
    let geojson: ShotsGeojson = serde_json::from_str(&shots_json)?;
    let mut shots = Vec::with_capacity(geojson.features.len());
    for feature in geojson.features {
        let props = feature.properties;
        let camera = find_camera_by_dimensions(&cameras, props.width, props.height)?;
        let mut shot = Shot::from_rotation_vector(
            props.filename,
            Some(camera),
            DVec3::from_array(props.translation),
            DVec3::from_array(props.rotation),
        );
        shot.original_dimensions = Some((props.width, props.height));
        shots.push(shot);
    }

    let obj_path = project_dir
        .join("odm_texturing_25d")
        .join("odm_textured_model_geo.obj");
    let mesh = parse_wavefront_25d(&std::fs::read_to_string(obj_path)?)?;

    let mut reconstruction =
        Reconstruction::new(cameras, shots, Vec::new(), HashMap::new(), mesh.bounds);
    reconstruction.compute_footprints(&mesh.points);

    log::info!(
        "Projekt geladen: {} Shots, {} Kameras, Mesh mit {} Vertices",
        reconstruction.shot_count(),
        reconstruction.camera_count(),
        mesh.points.len()
    );
    Ok(reconstruction)
}
