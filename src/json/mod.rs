//! JSON-Import/-Export der Rekonstruktionsdaten.
//!
//! Liest das Report-JSON des Viewers, die Orthophoto-Ecken und rohe
//! ODM-Projektverzeichnisse; schreibt den Report wieder zurück.

pub mod corners;
pub mod project;
pub mod reconstruction;
pub mod writer;

pub use corners::{parse_corners_json, parse_corners_txt};
pub use project::load_project;
pub use reconstruction::parse_reconstruction_json;
pub use writer::write_reconstruction_json;
