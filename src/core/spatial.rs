//! Spatial-Index (KD-Tree) für das Picking von Punkten und Shots.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Schlüssel des gefundenen Eintrags (Punkt-Id bzw. Shot-Slot)
    pub key: u64,
    /// Euklidische Distanz zum Suchpunkt in Welt-Einheiten
    pub distance: f64,
}

/// Read-only Spatial-Index über Bodenpositionen.
///
/// Wird einmal beim Laden gebaut; die Kollektionen dahinter sind
/// append-only, ein Rebuild während der Session entfällt.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    keys: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            keys: Vec::new(),
        }
    }

    /// Baut einen Index aus Schlüssel/Position-Paaren.
    pub fn from_entries(entries: impl IntoIterator<Item = (u64, DVec2)>) -> Self {
        let mut keys = Vec::new();
        let mut positions: Vec<[f64; 2]> = Vec::new();
        for (key, pos) in entries {
            keys.push(key);
            positions.push([pos.x, pos.y]);
        }
        let tree: KdTree<f64, 2> = (&positions).into();
        Self { tree, keys }
    }

    /// Gibt die Anzahl indexierter Einträge zurück.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Gibt `true` zurück, wenn der Index leer ist.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Findet den nächsten Eintrag zur gegebenen Weltposition.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let key = *self.keys.get(result.item as usize)?;

        Some(SpatialMatch {
            key,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet den nächsten Eintrag innerhalb des Radius, sonst `None`.
    pub fn nearest_within(&self, query: DVec2, radius: f64) -> Option<SpatialMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }
}
