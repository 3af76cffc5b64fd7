//! Punktwolken-Einträge einer Rekonstruktion.

use glam::{DVec2, DVec3};

/// Ein rekonstruierter 3D-Punkt. Nach dem Laden unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: u64,
    pub coordinates: DVec3,
}

impl Point {
    pub fn new(id: u64, coordinates: DVec3) -> Self {
        Self { id, coordinates }
    }

    /// Bodenposition (x, y).
    pub fn ground_position(&self) -> DVec2 {
        self.coordinates.truncate()
    }
}
