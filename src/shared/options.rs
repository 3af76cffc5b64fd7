//! Zentrale Konfiguration für den Shot-Coverage-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Innenabstand des Domain-Fits in Pixeln (pro Seite).
pub const DOMAIN_FIT_INSET_PX: f64 = 10.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Radius der Punktwolken-Marker in Karten-Pixeln (skaliert mit Zoom).
pub const POINT_RADIUS_PX: f32 = 0.3;
/// Farbe der Punktwolken-Marker (RGBA: Grau).
pub const POINT_COLOR: [f32; 4] = [0.62, 0.62, 0.62, 1.0];

// ── Shot-Rendering ──────────────────────────────────────────────────

/// Radius der Shot-Marker in Karten-Pixeln (skaliert mit Zoom).
pub const SHOT_RADIUS_PX: f32 = 3.0;
/// Standard-Farbe der Shot-Marker (RGBA: Blau).
pub const SHOT_COLOR: [f32; 4] = [0.16, 0.5, 0.9, 1.0];
/// Farbe für selektierte Shots (RGBA: Orange).
pub const SHOT_COLOR_SELECTED: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
/// Farbe für Shots im Arbeitsset eines gehoverten Punkts (RGBA: Magenta).
pub const SHOT_COLOR_HIGHLIGHT: [f32; 4] = [0.95, 0.2, 0.8, 1.0];
/// Linienfarbe der Footprint-Polygone (RGBA: transparentes Grün).
pub const FOOTPRINT_COLOR: [f32; 4] = [0.2, 0.8, 0.3, 0.45];
/// Linienstärke der Footprint-Polygone in Karten-Pixeln.
pub const FOOTPRINT_STROKE_WIDTH_PX: f32 = 0.5;

// ── Export ──────────────────────────────────────────────────────────

/// Maximale Kantenlänge der exportierten Thumbnails in Pixeln.
pub const THUMBNAIL_MAX_DIMENSION: u32 = 400;

// ── Interaktion ─────────────────────────────────────────────────────

/// Welche Hover-Interaktionen die Karte anbietet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Punkte und Shots reagieren auf Hover und Klick.
    PointsAndShots,
    /// Nur Shots; die Punktwolke ist reine Anzeige.
    ShotsOnly,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `odm_shot_coverage.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Punkt-Radius in Karten-Pixeln
    pub point_radius_px: f32,
    /// Farbe der Punktwolken-Marker (RGBA)
    pub point_color: [f32; 4],

    // ── Shots ───────────────────────────────────────────────────
    /// Shot-Radius in Karten-Pixeln
    pub shot_radius_px: f32,
    /// Standard-Farbe der Shot-Marker
    pub shot_color: [f32; 4],
    /// Farbe für selektierte Shots
    pub shot_color_selected: [f32; 4],
    /// Farbe für das Arbeitsset eines gehoverten Punkts
    pub shot_color_highlight: [f32; 4],
    /// Linienfarbe der Footprint-Polygone
    pub footprint_color: [f32; 4],
    /// Linienstärke der Footprint-Polygone in Karten-Pixeln
    pub footprint_stroke_width_px: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Hover und Klick in Screen-Pixeln
    pub selection_pick_radius_px: f32,
    /// Hover-Verhalten der Karte
    #[serde(default = "default_interaction_mode")]
    pub interaction_mode: InteractionMode,

    // ── Karte ───────────────────────────────────────────────────
    /// Innenabstand des Domain-Fits in Pixeln (pro Seite)
    pub domain_fit_inset_px: f64,
    /// y-Achse zeigt nach oben (Welt-Konvention) statt nach unten (Screen)
    #[serde(default)]
    pub y_axis_up: bool,
    /// Deckungs-Niveau des Orthophotos
    pub orthophoto_opacity: f32,
    /// Orthophoto anzeigen
    pub show_orthophoto: bool,
    /// Punktwolke anzeigen
    pub show_points: bool,
    /// Footprint-Polygone anzeigen
    #[serde(default = "default_show_footprints")]
    pub show_footprints: bool,

    // ── Zoom ────────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub scroll_zoom_step: f64,

    // ── Export ──────────────────────────────────────────────────
    /// Maximale Kantenlänge exportierter Thumbnails in Pixeln
    #[serde(default = "default_thumbnail_max_dimension")]
    pub thumbnail_max_dimension: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            point_radius_px: POINT_RADIUS_PX,
            point_color: POINT_COLOR,

            shot_radius_px: SHOT_RADIUS_PX,
            shot_color: SHOT_COLOR,
            shot_color_selected: SHOT_COLOR_SELECTED,
            shot_color_highlight: SHOT_COLOR_HIGHLIGHT,
            footprint_color: FOOTPRINT_COLOR,
            footprint_stroke_width_px: FOOTPRINT_STROKE_WIDTH_PX,

            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
            interaction_mode: InteractionMode::PointsAndShots,

            domain_fit_inset_px: DOMAIN_FIT_INSET_PX,
            y_axis_up: false,
            orthophoto_opacity: 1.0,
            show_orthophoto: true,
            show_points: true,
            show_footprints: true,

            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            thumbnail_max_dimension: THUMBNAIL_MAX_DIMENSION,
        }
    }
}

/// Serde-Default für `interaction_mode` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_interaction_mode() -> InteractionMode {
    InteractionMode::PointsAndShots
}

/// Serde-Default für `show_footprints` (Abwärtskompatibilität).
fn default_show_footprints() -> bool {
    true
}

/// Serde-Default für `thumbnail_max_dimension` (Abwärtskompatibilität).
fn default_thumbnail_max_dimension() -> u32 {
    THUMBNAIL_MAX_DIMENSION
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("odm-shot-coverage"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("odm_shot_coverage.toml")
    }

    /// Punkt-Hover nur, wenn der Modus es vorsieht und Punkte sichtbar sind.
    pub fn points_interactive(&self) -> bool {
        self.interaction_mode == InteractionMode::PointsAndShots && self.show_points
    }
}
