//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::ViewerOptions;
pub use options::{InteractionMode, DOMAIN_FIT_INSET_PX, SELECTION_PICK_RADIUS_PX};
pub use render_scene::RenderScene;
