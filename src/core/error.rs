//! Typisierte Fehler der Lade- und Fit-Phase.

use thiserror::Error;

/// Fehler beim Laden einer Rekonstruktion (Report-JSON, Roh-Projekt
/// oder Mesh).
///
/// Jeder Lade-Fehler bricht die komplette Szene ab; eine teilweise
/// gefüllte Rekonstruktion wird nie zurückgegeben.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ungültiges JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Strukturell gültiges JSON, das dem erwarteten Schema widerspricht.
    #[error("Ungültiges Schema: {0}")]
    Schema(String),

    /// Shot verweist auf eine Kamera-Id, die nicht geladen wurde.
    #[error("Shot '{shot}' referenziert unbekannte Kamera '{camera}'")]
    UnresolvedCamera { shot: String, camera: String },

    /// Kamera-Zuordnung über Bildabmessungen war nicht eindeutig.
    #[error("Keine eindeutige Kamera mit Abmessungen {width}x{height} (gefunden: {found})")]
    AmbiguousCamera { width: u32, height: u32, found: usize },

    #[error("Kamera '{name}': focal_x {focal_x} != focal_y {focal_y}")]
    MismatchedFocals {
        name: String,
        focal_x: f64,
        focal_y: f64,
    },

    #[error("Kamera '{name}': weder 'focal' noch 'focal_x'/'focal_y' vorhanden")]
    MissingFocal { name: String },

    #[error("Wavefront-Facette nicht lesbar: '{line}'")]
    MalformedFacet { line: String },

    #[error("Wavefront-Vertex nicht lesbar: '{line}'")]
    MalformedVertex { line: String },

    #[error("Leeres Mesh: keine 'v '-Zeilen gefunden")]
    EmptyMesh,

    #[error("Corners-Zeile nicht lesbar: '{line}'")]
    MalformedCorners { line: String },
}

/// Fehler des Domain-Fitters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    /// Beide Achsen ohne Ausdehnung; es gibt nichts einzupassen.
    #[error("Degenerierte Domäne: beide Achsen ohne Ausdehnung")]
    DegenerateDomain,

    /// Der Viewport lässt nach Abzug des Insets keine Fläche übrig.
    #[error("Viewport {width}x{height} zu klein für Inset {inset}")]
    InvalidViewport { width: f64, height: f64, inset: f64 },
}
