//! Orthophoto-Overlay: Welt-Ecken plus dekodiertes Rasterbild.

use anyhow::{Context, Result};
use glam::DVec2;
use image::{DynamicImage, GenericImageView, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::BufReader;
use std::path::Path;

/// Welt-Ecken des Orthophotos, wie von `odm_orthophoto_corners.json`
/// geliefert: `x = [xMin, xMax]`, `y = [yMin, yMax]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Corners {
    /// Gegenüberliegende Welt-Ecken (erste und zweite Koordinate der
    /// Achsenlisten, ohne Umsortierung).
    pub fn world_corners(&self) -> (DVec2, DVec2) {
        (
            DVec2::new(self.x[0], self.y[0]),
            DVec2::new(self.x[1], self.y[1]),
        )
    }
}

/// Georeferenziertes Hintergrundbild der Szene.
///
/// Die Ecken sind lade-pflichtig; das Bild selbst darf fehlen
/// (Render-Phase lässt das Overlay dann einfach aus).
#[derive(Debug)]
pub struct Orthophoto {
    corners: Corners,
    image: Option<DynamicImage>,
}

impl Orthophoto {
    pub fn new(corners: Corners, image: Option<DynamicImage>) -> Self {
        Self { corners, image }
    }

    pub fn corners(&self) -> Corners {
        self.corners
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|i| i.dimensions())
    }
}

/// Lädt das Orthophoto-Raster.
///
/// Erst Format-Erkennung über die Dateiendung; schlägt die fehl,
/// Erkennung über die Magic Bytes im Dateiinhalt.
pub fn load_orthophoto_image(path: &Path) -> Result<DynamicImage> {
    let image = match image::open(path) {
        Ok(img) => img,
        Err(ext_err) => {
            log::warn!(
                "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                path.display(),
                ext_err
            );
            let file = std::fs::File::open(path)
                .with_context(|| format!("Datei nicht gefunden: {}", path.display()))?;
            let reader = ImageReader::new(BufReader::new(file))
                .with_guessed_format()
                .with_context(|| {
                    format!("Format-Erkennung fehlgeschlagen für: {}", path.display())
                })?;
            if let Some(fmt) = reader.format() {
                log::info!(
                    "Tatsächliches Bildformat erkannt: {:?} für '{}'",
                    fmt,
                    path.display()
                );
            }
            reader.decode().with_context(|| {
                format!("Fehler beim Dekodieren des Orthophotos: {}", path.display())
            })?
        }
    };

    log::info!(
        "Orthophoto geladen: {}x{} Pixel von '{}'",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}
