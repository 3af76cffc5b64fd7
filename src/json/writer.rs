//! Writer für das Report-JSON (`reconstruction_shots.json`).

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Reconstruction, Shot};

#[derive(Serialize)]
struct CameraOut<'a> {
    name: &'a str,
    width: u32,
    height: u32,
    focal: f64,
    k1: f64,
    k2: f64,
}

#[derive(Serialize)]
struct DimensionsOut {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct FootprintOut {
    path: Vec<[f64; 2]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShotOut<'a> {
    image_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_dimensions: Option<DimensionsOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation: Option<[f64; 3]>,
    #[serde(rename = "rotationEulerXYZ")]
    rotation_euler_xyz: [f64; 3],
    translation: [f64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    camera: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boundaries: Option<FootprintOut>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoundariesOut {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

#[derive(Serialize)]
struct ReconstructionOut<'a> {
    cameras: IndexMap<&'a str, CameraOut<'a>>,
    shots: Vec<ShotOut<'a>>,
    boundaries: BoundariesOut,
}

/// Serialisiert eine Rekonstruktion in das Report-JSON, das der Viewer
/// wieder einlesen kann.
pub fn write_reconstruction_json(reconstruction: &Reconstruction) -> Result<String> {
    let cameras = reconstruction
        .cameras()
        .values()
        .map(|camera| {
            (
                camera.name.as_str(),
                CameraOut {
                    name: &camera.name,
                    width: camera.width,
                    height: camera.height,
                    focal: camera.focal,
                    k1: camera.k1,
                    k2: camera.k2,
                },
            )
        })
        .collect();

    let shots = reconstruction.shots().iter().map(shot_out).collect();

    let domain = reconstruction.domain();
    let out = ReconstructionOut {
        cameras,
        shots,
        boundaries: BoundariesOut {
            x_min: domain.x.min,
            x_max: domain.x.max,
            y_min: domain.y.min,
            y_max: domain.y.max,
        },
    };
    Ok(serde_json::to_string(&out)?)
}

fn shot_out(shot: &Shot) -> ShotOut<'_> {
    ShotOut {
        image_name: &shot.image_name,
        original_dimensions: shot
            .original_dimensions
            .map(|(width, height)| DimensionsOut { width, height }),
        rotation: shot.rotation.map(|r| r.to_array()),
        rotation_euler_xyz: shot.rotation_euler_xyz.to_array(),
        translation: shot.translation.to_array(),
        camera: shot.camera.as_deref().map(|c| c.name.as_str()),
        boundaries: shot.footprint.as_ref().map(|footprint| FootprintOut {
            path: footprint.path.iter().map(|p| p.to_array()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parse_reconstruction_json;
    use approx::assert_relative_eq;

    #[test]
    fn written_report_parses_back() {
        let source = r#"{
            "cameras": {
                "cam1": {"name": "cam1", "width": 3000, "height": 4000, "focal": 0.52, "k1": -0.1, "k2": 0.06}
            },
            "shots": [
                {
                    "imageName": "GOPR3101.jpeg",
                    "originalDimensions": {"width": 3000, "height": 4000},
                    "rotation": [2.05, -2.20, -0.04],
                    "translation": [0.03, 0.51, -0.07],
                    "camera": "cam1",
                    "boundaries": {"path": [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]}
                }
            ],
            "points": [[0.0, 0.0, 10.0], [10.0, 5.0, 12.0]]
        }"#;
        let reconstruction = parse_reconstruction_json(source).expect("Parsing fehlgeschlagen");

        let written = write_reconstruction_json(&reconstruction).expect("Export fehlgeschlagen");
        assert!(written.contains("rotationEulerXYZ"));
        assert!(written.contains("originalDimensions"));

        let reparsed = parse_reconstruction_json(&written).expect("Re-Parsing fehlgeschlagen");
        assert_eq!(reparsed.shot_count(), reconstruction.shot_count());
        assert_eq!(reparsed.camera_count(), reconstruction.camera_count());

        let shot = reparsed.shot("GOPR3101.jpeg").expect("Shot fehlt");
        assert_relative_eq!(shot.translation.y, 0.51);
        assert!(shot.camera.is_some());
        assert_eq!(
            shot.footprint.as_ref().expect("Footprint fehlt").path.len(),
            3
        );
        assert_relative_eq!(reparsed.domain().x.max, 10.0);
    }

    #[test]
    fn euler_only_shot_written_without_rotation_key() {
        let source = r#"{
            "shots": [
                {
                    "imageName": "a.jpeg",
                    "translation": [1.0, 2.0, 3.0],
                    "rotationEulerXYZ": [0.0, 0.0, 1.5707963267948966]
                }
            ]
        }"#;
        let reconstruction = parse_reconstruction_json(source).expect("Parsing fehlgeschlagen");

        let written = write_reconstruction_json(&reconstruction).expect("Export fehlgeschlagen");
        assert!(!written.contains("\"rotation\":"));
        assert!(written.contains("rotationEulerXYZ"));
    }
}
