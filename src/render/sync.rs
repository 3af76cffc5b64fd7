//! Schlüssel-basierter Abgleich zwischen Datenstand und gezeichneten
//! Elementen.
//!
//! `sync` gleicht einen Store mit einer Datensequenz ab: Enter erzeugt
//! Elemente für neue Schlüssel, Update frischt bestehende auf, Exit
//! entfernt verwaiste. Die Elementreihenfolge folgt der Datensequenz,
//! damit die Zeichenreihenfolge deterministisch bleibt.

use std::hash::Hash;

use indexmap::IndexMap;

/// Ergebnis eines Abgleichs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Neu erzeugte Elemente
    pub entered: usize,
    /// Aufgefrischte bestehende Elemente
    pub updated: usize,
    /// Entfernte verwaiste Elemente
    pub exited: usize,
}

/// Persistenter Elementbestand einer Render-Ebene.
#[derive(Debug, Clone)]
pub struct SceneStore<K, E> {
    elements: IndexMap<K, E>,
}

impl<K: Hash + Eq + Clone, E> SceneStore<K, E> {
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&E> {
        self.elements.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &E)> {
        self.elements.iter()
    }

    /// Gleicht den Bestand mit `data` ab.
    ///
    /// `enter` baut ein Element für einen neuen Schlüssel, `update`
    /// frischt ein bestehendes auf. Elemente, deren Schlüssel nicht mehr
    /// vorkommt, fallen weg.
    pub fn sync<D, FEnter, FUpdate>(
        &mut self,
        data: impl IntoIterator<Item = (K, D)>,
        mut enter: FEnter,
        mut update: FUpdate,
    ) -> SyncStats
    where
        FEnter: FnMut(&K, &D) -> E,
        FUpdate: FnMut(&D, &mut E),
    {
        let mut stats = SyncStats::default();
        let mut next = IndexMap::with_capacity(self.elements.len());

        for (key, datum) in data {
            match self.elements.swap_remove(&key) {
                Some(mut element) => {
                    update(&datum, &mut element);
                    stats.updated += 1;
                    next.insert(key, element);
                }
                None => {
                    let element = enter(&key, &datum);
                    stats.entered += 1;
                    next.insert(key, element);
                }
            }
        }

        // Was im alten Bestand übrig ist, kam in den Daten nicht mehr vor.
        stats.exited = self.elements.len();
        self.elements = next;
        stats
    }

    /// Frischt alle Elemente auf, ohne den Bestand zu verändern.
    pub fn update_in_place(&mut self, mut f: impl FnMut(&K, &mut E)) -> SyncStats {
        for (key, element) in self.elements.iter_mut() {
            f(key, element);
        }
        SyncStats {
            updated: self.elements.len(),
            ..SyncStats::default()
        }
    }

    /// Leert den Bestand; liefert die Anzahl entfernter Elemente.
    pub fn clear(&mut self) -> usize {
        let exited = self.elements.len();
        self.elements.clear();
        exited
    }
}

impl<K: Hash + Eq + Clone, E> Default for SceneStore<K, E> {
    fn default() -> Self {
        Self::new()
    }
}
