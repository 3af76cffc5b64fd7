//! Export des Shot-Coverage-Reports in ein ODM-Projektverzeichnis.
//!
//! Materialisiert unter `<projekt>/odm_report/shot_coverage/` genau die
//! Dateien, die der Report-Load wieder einliest: das
//! Reconstruction-JSON, das Orthophoto als PNG samt Ecken-JSON und
//! verkleinerte Vorschaubilder. Fehlende Quellen (Projekt ohne
//! Orthophoto-Stufe, defekte Einzelbilder) werden mit Warnung
//! übersprungen; Schreibfehler brechen den Export ab.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{load_orthophoto_image, Reconstruction};
use crate::json;
use crate::shared::ViewerOptions;

/// Schreibt den kompletten Report und liefert das Zielverzeichnis.
pub fn export(
    project_dir: &Path,
    reconstruction: &Reconstruction,
    options: &ViewerOptions,
) -> Result<PathBuf> {
    let out_dir = project_dir.join("odm_report").join("shot_coverage");
    let data_dir = out_dir.join("data");
    fs::create_dir_all(&data_dir).with_context(|| {
        format!(
            "Report-Verzeichnis nicht anlegbar: {}",
            data_dir.display()
        )
    })?;

    write_reconstruction(&data_dir, reconstruction)?;
    export_orthophoto(project_dir, &data_dir)?;
    let thumbnails = export_thumbnails(project_dir, &out_dir, options.thumbnail_max_dimension)?;

    log::info!(
        "Report geschrieben: {} Shots, {thumbnails} Vorschaubilder ({})",
        reconstruction.shot_count(),
        out_dir.display()
    );
    Ok(out_dir)
}

fn write_reconstruction(data_dir: &Path, reconstruction: &Reconstruction) -> Result<()> {
    let out = data_dir.join("reconstruction_shots.json");
    let json = json::write_reconstruction_json(reconstruction)?;
    fs::write(&out, json)
        .with_context(|| format!("Report-JSON nicht schreibbar: {}", out.display()))
}

/// Ecken-Textdatei → JSON und TIFF → PNG, beides nur wenn die Quelle
/// existiert.
fn export_orthophoto(project_dir: &Path, data_dir: &Path) -> Result<()> {
    let ortho_dir = project_dir.join("odm_orthophoto");

    let corners_src = ortho_dir.join("odm_orthophoto_corners.txt");
    if corners_src.is_file() {
        let text = fs::read_to_string(&corners_src)
            .with_context(|| format!("Ecken nicht lesbar: {}", corners_src.display()))?;
        let corners = json::parse_corners_txt(&text)
            .with_context(|| format!("Ecken nicht parsbar: {}", corners_src.display()))?;
        let out = data_dir.join("odm_orthophoto_corners.json");
        fs::write(&out, serde_json::to_string(&corners)?)
            .with_context(|| format!("Ecken-JSON nicht schreibbar: {}", out.display()))?;
    } else {
        log::warn!(
            "Keine Orthophoto-Ecken unter {}, Overlay entfällt im Report",
            corners_src.display()
        );
    }

    let tif_src = ortho_dir.join("odm_orthophoto.tif");
    if tif_src.is_file() {
        let image = load_orthophoto_image(&tif_src)?;
        let out = data_dir.join("odm_orthophoto.png");
        image
            .save(&out)
            .with_context(|| format!("Orthophoto-PNG nicht schreibbar: {}", out.display()))?;
    } else {
        log::warn!(
            "Kein Orthophoto-Raster unter {}, Overlay entfällt im Report",
            tif_src.display()
        );
    }

    Ok(())
}

/// Verkleinert jedes Quellbild so, dass die längere Kante höchstens
/// `max_dimension` Pixel misst. Unlesbare Einzelbilder werden mit
/// Warnung übersprungen.
fn export_thumbnails(project_dir: &Path, out_dir: &Path, max_dimension: u32) -> Result<usize> {
    let src_dir = project_dir.join("images");
    if !src_dir.is_dir() {
        log::warn!(
            "Kein images/-Verzeichnis unter {}, Vorschaubilder entfallen",
            project_dir.display()
        );
        return Ok(0);
    }

    let dst_dir = out_dir.join("images");
    fs::create_dir_all(&dst_dir).with_context(|| {
        format!(
            "Vorschau-Verzeichnis nicht anlegbar: {}",
            dst_dir.display()
        )
    })?;

    let mut written = 0;
    let entries = fs::read_dir(&src_dir)
        .with_context(|| format!("images/ nicht lesbar: {}", src_dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("images/ nicht lesbar: {}", src_dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };

        match image::open(&path) {
            Ok(image) => {
                let thumbnail = image.thumbnail(max_dimension, max_dimension);
                let dst = dst_dir.join(name);
                thumbnail
                    .save(&dst)
                    .with_context(|| format!("Vorschaubild nicht schreibbar: {}", dst.display()))?;
                written += 1;
            }
            Err(err) => {
                log::warn!("Bild übersprungen ({}): {err}", path.display());
            }
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;

    use super::*;
    use crate::json::{parse_corners_json, parse_reconstruction_json};

    fn sample_reconstruction() -> Reconstruction {
        let source = r#"{
            "shots": [
                {"imageName": "a.png", "translation": [1.0, 2.0, 3.0], "rotationEulerXYZ": [0.0, 0.0, 0.0]},
                {"imageName": "b.png", "translation": [4.0, 5.0, 6.0], "rotationEulerXYZ": [0.0, 0.0, 0.0]}
            ],
            "points": [[0.0, 0.0, 1.0], [10.0, 10.0, 1.0]]
        }"#;
        parse_reconstruction_json(source).expect("Fixture-Parsing fehlgeschlagen")
    }

    fn write_rgb(path: &Path, width: u32, height: u32) {
        image::DynamicImage::new_rgb8(width, height)
            .save(path)
            .expect("Testbild nicht schreibbar");
    }

    #[test]
    fn export_materializes_full_report() {
        let tmp = std::env::temp_dir().join("test_report_export_full");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("images")).unwrap();
        fs::create_dir_all(tmp.join("odm_orthophoto")).unwrap();
        write_rgb(&tmp.join("images").join("a.png"), 800, 600);
        write_rgb(&tmp.join("odm_orthophoto").join("odm_orthophoto.tif"), 16, 8);
        fs::write(
            tmp.join("odm_orthophoto").join("odm_orthophoto_corners.txt"),
            "-5.0 0.0 25.0 40.0\n",
        )
        .unwrap();

        let options = ViewerOptions {
            thumbnail_max_dimension: 100,
            ..ViewerOptions::default()
        };

        let out_dir = export(&tmp, &sample_reconstruction(), &options).expect("Export fehlgeschlagen");
        assert_eq!(out_dir, tmp.join("odm_report").join("shot_coverage"));

        let report_json =
            fs::read_to_string(out_dir.join("data").join("reconstruction_shots.json")).unwrap();
        let reparsed = parse_reconstruction_json(&report_json).expect("Report nicht parsbar");
        assert_eq!(reparsed.shot_count(), 2);

        let corners_json =
            fs::read_to_string(out_dir.join("data").join("odm_orthophoto_corners.json")).unwrap();
        let corners = parse_corners_json(&corners_json).expect("Ecken nicht parsbar");
        assert_eq!(corners.x, [-5.0, 25.0]);
        assert_eq!(corners.y, [0.0, 40.0]);

        let png = image::open(out_dir.join("data").join("odm_orthophoto.png"))
            .expect("PNG nicht lesbar");
        assert_eq!(png.dimensions(), (16, 8));

        // 800×600 mit längerer Kante 100 → 100×75.
        let thumb = image::open(out_dir.join("images").join("a.png"))
            .expect("Vorschaubild nicht lesbar");
        assert_eq!(thumb.dimensions(), (100, 75));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn export_without_orthophoto_still_writes_report_json() {
        let tmp = std::env::temp_dir().join("test_report_export_bare");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let out_dir = export(&tmp, &sample_reconstruction(), &ViewerOptions::default())
            .expect("Export fehlgeschlagen");

        assert!(out_dir.join("data").join("reconstruction_shots.json").is_file());
        assert!(!out_dir.join("data").join("odm_orthophoto_corners.json").exists());
        assert!(!out_dir.join("data").join("odm_orthophoto.png").exists());

        let _ = fs::remove_dir_all(&tmp);
    }
}
