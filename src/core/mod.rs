//! Core-Domänentypen: Rekonstruktion, Kameras, Shots, Domänen-Fitting,
//! Skalen und Spatial-Index.

pub mod camera;
pub mod domain;
pub mod error;
pub mod mesh;
pub mod orthophoto;
pub mod point;
pub mod reconstruction;
pub mod scale;
pub mod shot;
pub mod spatial;
pub mod view_transform;

pub use camera::Camera;
pub use domain::{fit, AxisRange, BoundingDomain, FittedDomains, Viewport};
pub use error::{FitError, LoadError};
pub use mesh::{parse_wavefront_25d, paving_sizes, Wavefront25d};
pub use orthophoto::{load_orthophoto_image, Corners, Orthophoto};
pub use point::Point;
pub use reconstruction::{find_camera_by_dimensions, invert_shot_points, Reconstruction};
pub use scale::{LinearScale, Mapper};
pub use shot::{footprint_from_points, Footprint, Shot, FOOTPRINT_SECTORS};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use view_transform::ViewTransform;
