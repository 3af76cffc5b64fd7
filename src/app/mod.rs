//! App-Schicht: Sitzungszustand, Events, Intent-Mapping und Handler.
//!
//! Datenfluss pro Frame: UI sammelt [`ViewerIntent`]s, das Mapping
//! übersetzt sie in [`ViewerCommand`]s, der [`ViewerController`] führt
//! sie über die Handler auf der [`ViewerSession`] aus. Die Render-Schicht
//! sieht danach nur den Schnappschuss aus [`build_render_scene`].

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::ViewerController;
pub use events::{ViewerCommand, ViewerIntent};
pub use render_scene::build as build_render_scene;
pub use state::{PickingState, SceneSource, SelectionState, UiState, ViewState, ViewerSession};
