//! Handler für Laden, Neuladen und Export von Szenen.
//!
//! Der Report-Load läuft strikt sequenziell: erst das
//! Reconstruction-JSON, dann die Orthophoto-Ecken. Scheitert einer der
//! beiden Schritte, scheitert der gesamte Load und die bisherige Szene
//! bleibt unverändert stehen.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context};

use crate::app::state::{PickingState, SceneSource};
use crate::app::ViewerSession;
use crate::core::{load_orthophoto_image, Orthophoto, Reconstruction};
use crate::{json, report};

/// Report-Dateinamen, in Suchreihenfolge.
const REPORT_FILENAMES: [&str; 2] = [
    "reconstruction_shot_points.json",
    "reconstruction_shots.json",
];
/// Orthophoto-Ecken im Report-Verzeichnis.
const CORNERS_FILENAME: &str = "odm_orthophoto_corners.json";
/// Orthophoto-Raster im Report-Verzeichnis.
const ORTHOPHOTO_FILENAME: &str = "odm_orthophoto.png";

/// Lädt ein Report-Verzeichnis (JSON + Corners + Orthophoto).
pub fn load_report_dir(state: &mut ViewerSession, path: &Path) {
    match try_load_report(path) {
        Ok((reconstruction, orthophoto)) => {
            install_scene(state, reconstruction, orthophoto, path, SceneSource::Report);
        }
        Err(err) => fail_load(state, path, &err),
    }
}

/// Lädt ein rohes ODM-Projektverzeichnis.
pub fn load_project_dir(state: &mut ViewerSession, path: &Path) {
    match try_load_project(path) {
        Ok((reconstruction, orthophoto)) => {
            install_scene(state, reconstruction, orthophoto, path, SceneSource::Project);
        }
        Err(err) => fail_load(state, path, &err),
    }
}

/// Lädt die aktuelle Quelle erneut.
pub fn reload(state: &mut ViewerSession) {
    let Some(dir) = state.ui.scene_dir.clone() else {
        state.ui.status_message = Some("Keine Szene zum Neuladen".to_string());
        return;
    };
    match state.ui.scene_source {
        Some(SceneSource::Report) => load_report_dir(state, &dir),
        Some(SceneSource::Project) => load_project_dir(state, &dir),
        None => state.ui.status_message = Some("Keine Szene zum Neuladen".to_string()),
    }
}

/// Exportiert den Shot-Coverage-Report in das geladene Projektverzeichnis.
pub fn export_report(state: &mut ViewerSession) {
    let (Some(dir), Some(reconstruction)) =
        (state.ui.scene_dir.clone(), state.reconstruction.clone())
    else {
        state.ui.status_message = Some("Kein Projekt geladen".to_string());
        return;
    };
    if state.ui.scene_source != Some(SceneSource::Project) {
        state.ui.status_message =
            Some("Export nur für rohe ODM-Projekte möglich".to_string());
        return;
    }

    match report::export(&dir, &reconstruction, &state.options) {
        Ok(out_dir) => {
            let msg = format!("Report exportiert nach {}", out_dir.display());
            log::info!("{msg}");
            state.ui.status_message = Some(msg);
        }
        Err(err) => {
            let msg = format!("Export fehlgeschlagen: {err:#}");
            log::error!("{msg}");
            state.ui.status_message = Some(msg);
        }
    }
}

/// Übernimmt eine frisch geladene Szene in die Session.
///
/// Auswahl und Hover werden zurückgesetzt, die Revisionszähler laufen
/// dabei monoton weiter, damit Render-Stores den Wechsel erkennen.
pub(crate) fn install_scene(
    state: &mut ViewerSession,
    reconstruction: Reconstruction,
    orthophoto: Option<Orthophoto>,
    dir: &Path,
    source: SceneSource,
) {
    let shot_count = reconstruction.shot_count();
    let point_count = reconstruction.point_count();

    state.picking = PickingState::from_reconstruction(&reconstruction);
    state.reconstruction = Some(Arc::new(reconstruction));
    state.orthophoto = orthophoto.map(Arc::new);

    state.selection.selected_mut().clear();
    state.selection.set_highlighted(Vec::new());
    state.selection.hovered_point = None;
    state.selection.hovered_shot = None;
    state.selection.detail_shot = None;
    state.selection.detail_point = None;
    state.selection.mark_style_changed();

    state.view.transform.reset();
    super::view::refit_scales(state);

    state.ui.scene_dir = Some(dir.to_path_buf());
    state.ui.scene_source = Some(source);
    state.ui.load_error = None;
    let msg = format!(
        "Szene geladen: {shot_count} Shots, {point_count} Punkte ({})",
        dir.display()
    );
    log::info!("{msg}");
    state.ui.status_message = Some(msg);
}

fn fail_load(state: &mut ViewerSession, path: &Path, err: &anyhow::Error) {
    let msg = format!("Laden von {} fehlgeschlagen: {err:#}", path.display());
    log::error!("{msg}");
    state.ui.load_error = Some(msg);
}

fn try_load_report(dir: &Path) -> anyhow::Result<(Reconstruction, Option<Orthophoto>)> {
    let report_path = find_report_json(dir).ok_or_else(|| {
        anyhow!(
            "kein Reconstruction-JSON unter {} gefunden (gesucht: {})",
            dir.display(),
            REPORT_FILENAMES.join(", ")
        )
    })?;
    // Corners und Orthophoto liegen neben dem gefundenen JSON.
    let data_dir = report_path.parent().unwrap_or(dir).to_path_buf();

    let json_text = fs::read_to_string(&report_path)
        .with_context(|| format!("Reconstruction-JSON {} nicht lesbar", report_path.display()))?;
    let reconstruction = json::parse_reconstruction_json(&json_text)
        .with_context(|| format!("Reconstruction-JSON {} ungültig", report_path.display()))?;

    let corners_path = data_dir.join(CORNERS_FILENAME);
    let corners_text = fs::read_to_string(&corners_path)
        .with_context(|| format!("Orthophoto-Ecken {} nicht lesbar", corners_path.display()))?;
    let corners = json::parse_corners_json(&corners_text)
        .with_context(|| format!("Orthophoto-Ecken {} ungültig", corners_path.display()))?;

    // Das Rasterbild ist optional; ohne Bild bleibt nur das Overlay weg.
    let image_path = data_dir.join(ORTHOPHOTO_FILENAME);
    let image = match load_orthophoto_image(&image_path) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("Orthophoto {} nicht ladbar: {err:#}", image_path.display());
            None
        }
    };

    Ok((reconstruction, Some(Orthophoto::new(corners, image))))
}

fn try_load_project(dir: &Path) -> anyhow::Result<(Reconstruction, Option<Orthophoto>)> {
    let reconstruction = json::load_project(dir)
        .with_context(|| format!("Projekt {} nicht ladbar", dir.display()))?;
    Ok((reconstruction, load_project_orthophoto(dir)))
}

/// Orthophoto eines rohen Projekts; fehlende Teile sind kein Ladefehler.
fn load_project_orthophoto(dir: &Path) -> Option<Orthophoto> {
    let corners_path = dir.join("odm_orthophoto/odm_orthophoto_corners.txt");
    let corners_text = match fs::read_to_string(&corners_path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "Keine Orthophoto-Ecken unter {}: {err}",
                corners_path.display()
            );
            return None;
        }
    };
    let corners = match json::parse_corners_txt(&corners_text) {
        Ok(corners) => corners,
        Err(err) => {
            log::warn!("Orthophoto-Ecken {} ungültig: {err}", corners_path.display());
            return None;
        }
    };

    let image_path = dir.join("odm_orthophoto/odm_orthophoto.tif");
    let image = match load_orthophoto_image(&image_path) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("Orthophoto {} nicht ladbar: {err:#}", image_path.display());
            None
        }
    };
    Some(Orthophoto::new(corners, image))
}

/// Sucht das Report-JSON direkt im Verzeichnis und in dessen `data/`.
fn find_report_json(dir: &Path) -> Option<PathBuf> {
    [dir.to_path_buf(), dir.join("data")]
        .iter()
        .flat_map(|base| REPORT_FILENAMES.iter().map(move |name| base.join(name)))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::DVec3;
    use indexmap::IndexMap;

    use super::*;
    use crate::core::{AxisRange, BoundingDomain, Point, Shot};

    fn sample_reconstruction() -> Reconstruction {
        let shots = vec![Shot::from_euler_xyz(
            "A.jpeg".to_string(),
            None,
            DVec3::new(1.0, 1.0, 5.0),
            DVec3::ZERO,
        )];
        let points = vec![Point::new(1, DVec3::ZERO)];
        let domain = BoundingDomain {
            x: AxisRange::new(0.0, 1.0),
            y: AxisRange::new(0.0, 1.0),
            z: None,
        };
        Reconstruction::new(IndexMap::new(), shots, points, HashMap::new(), domain)
    }

    #[test]
    fn install_scene_resets_selection_and_keeps_revisions_monotonic() {
        let mut state = ViewerSession::new();
        state.view.viewport_size = [320.0, 320.0];
        install_scene(
            &mut state,
            sample_reconstruction(),
            None,
            Path::new("/tmp/a"),
            SceneSource::Report,
        );
        super::super::selection::toggle_shot(&mut state, "A.jpeg");
        let style_before = state.selection.style_revision;
        let scene_before = state.view.scene_revision;

        install_scene(
            &mut state,
            sample_reconstruction(),
            None,
            Path::new("/tmp/b"),
            SceneSource::Project,
        );

        assert!(state.selection.selected().is_empty());
        assert!(state.selection.style_revision > style_before);
        assert!(state.view.scene_revision > scene_before);
        assert_eq!(state.ui.scene_source, Some(SceneSource::Project));
        assert!(state.has_scene());
        assert_eq!(state.picking.shots.len(), 1);
    }

    #[test]
    fn failed_load_keeps_previous_scene() {
        let mut state = ViewerSession::new();
        state.view.viewport_size = [320.0, 320.0];
        install_scene(
            &mut state,
            sample_reconstruction(),
            None,
            Path::new("/tmp/a"),
            SceneSource::Report,
        );

        load_report_dir(&mut state, Path::new("/nonexistent/report"));

        assert!(state.has_scene());
        assert!(state.ui.load_error.is_some());
        assert_eq!(state.ui.scene_dir.as_deref(), Some(Path::new("/tmp/a")));
    }
}
