//! ODM Shot Coverage Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod render;
pub mod report;
pub mod shared;
pub mod ui;

pub use app::{
    SceneSource, ViewerCommand, ViewerController, ViewerIntent, ViewerSession,
};
pub use core::{
    fit, AxisRange, BoundingDomain, Camera, FitError, LoadError, Mapper, Orthophoto, Point,
    Reconstruction, Shot, SpatialIndex, ViewTransform, Viewport,
};
pub use json::{parse_corners_json, parse_corners_txt, parse_reconstruction_json};
pub use shared::{InteractionMode, RenderScene, ViewerOptions};
