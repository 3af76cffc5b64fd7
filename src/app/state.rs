//! Zentraler Sitzungszustand des Viewers.
//!
//! Alle Operationen bekommen die [`ViewerSession`] explizit übergeben;
//! es gibt keinen globalen Zustand neben ihr.

use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::app::command_log::CommandLog;
use crate::core::{Mapper, Orthophoto, Reconstruction, SpatialIndex, ViewTransform};
use crate::shared::ViewerOptions;

/// Herkunft der aktuell geladenen Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSource {
    /// Fertiger Shot-Coverage-Report (Reconstruction-JSON + Corners).
    Report,
    /// Rohes ODM-Projektverzeichnis (cameras.json, shots.geojson, Mesh).
    Project,
}

/// Kartenzustand: Skalenpaar, Pan/Zoom, Viewport.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Skalenpaar der geladenen Szene; `None` solange nichts geladen ist
    pub mapper: Option<Mapper>,
    /// Pan/Zoom über den Skalen
    pub transform: ViewTransform,
    /// Aktuelle Größe der Kartenfläche in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Springt bei jedem Neuaufbau der Skalen (Laden, Resize);
    /// Render-Stores synchronisieren dann ihre Geometrie
    pub scene_revision: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mapper: None,
            transform: ViewTransform::identity(),
            viewport_size: [0.0, 0.0],
            scene_revision: 0,
        }
    }

    /// Markiert die Szene als neu aufgebaut.
    pub fn mark_scene_changed(&mut self) {
        self.scene_revision += 1;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Auswahl- und Hover-Zustand der Shots.
///
/// Die dauerhafte Auswahl und die Hover-Arbeitsmenge hängen an `Arc`s,
/// so dass die Render-Szene sie pro Frame in O(1) übernehmen kann.
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Dauerhaft selektierte Shots (Klick-Toggle), in Selektionsreihenfolge
    selected_shots: Arc<IndexSet<String>>,
    /// Arbeitsmenge der per Punkt-Hover hervorgehobenen Shots;
    /// wird bei jedem Hover-Ereignis vollständig ersetzt
    highlighted_shots: Arc<Vec<String>>,
    /// Aktuell gehoverter Punkt
    pub hovered_point: Option<u64>,
    /// Aktuell gehoverter Shot (reiner Lesezustand für das Detail-Panel)
    pub hovered_shot: Option<String>,
    /// Zuletzt gehoverter Shot; überlebt das Hover-Ende, damit das
    /// Detail-Panel nicht leer zurückspringt
    pub detail_shot: Option<String>,
    /// Zuletzt gehoverter Punkt, analog zu `detail_shot`
    pub detail_point: Option<u64>,
    /// Springt bei jeder Stil-Änderung der Shot-Darstellung;
    /// nur die Shot-Ebene synchronisiert dann neu
    pub style_revision: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_shots: Arc::new(IndexSet::new()),
            highlighted_shots: Arc::new(Vec::new()),
            hovered_point: None,
            hovered_shot: None,
            detail_shot: None,
            detail_point: None,
            style_revision: 0,
        }
    }

    /// Dauerhafte Auswahl (geteilt mit der Render-Szene).
    pub fn selected(&self) -> &Arc<IndexSet<String>> {
        &self.selected_shots
    }

    /// Veränderbarer Zugriff auf die Auswahl (Copy-on-Write).
    pub fn selected_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_shots)
    }

    pub fn is_selected(&self, image_name: &str) -> bool {
        self.selected_shots.contains(image_name)
    }

    /// Hover-Arbeitsmenge (geteilt mit der Render-Szene).
    pub fn highlighted(&self) -> &Arc<Vec<String>> {
        &self.highlighted_shots
    }

    /// Ersetzt die Hover-Arbeitsmenge vollständig.
    pub fn set_highlighted(&mut self, shots: Vec<String>) {
        self.highlighted_shots = Arc::new(shots);
    }

    /// Markiert die Shot-Darstellung als geändert.
    pub fn mark_style_changed(&mut self) {
        self.style_revision += 1;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-naher Zustand: Dialog-Flags, Statuszeile, aktuelle Quelle.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Verzeichnis der aktuell geladenen Szene
    pub scene_dir: Option<PathBuf>,
    /// Art der aktuell geladenen Quelle
    pub scene_source: Option<SceneSource>,
    /// Meldung für die Statusleiste
    pub status_message: Option<String>,
    /// Letzter Ladefehler in lesbarer Form
    pub load_error: Option<String>,
    /// UI soll einen Dateidialog für ein Report-Verzeichnis zeigen
    pub show_report_dir_dialog: bool,
    /// UI soll einen Dateidialog für ein Projektverzeichnis zeigen
    pub show_project_dir_dialog: bool,
    /// Optionen-Dialog ist sichtbar
    pub show_options_dialog: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Spatial-Indizes für das Picking, beim Laden einmal aufgebaut.
#[derive(Debug, Clone)]
pub struct PickingState {
    /// Index über Punkt-Bodenpositionen; Schlüssel = Punkt-Id
    pub points: SpatialIndex,
    /// Index über Shot-Bodenpositionen; Schlüssel = Shot-Slot
    pub shots: SpatialIndex,
}

impl PickingState {
    pub fn empty() -> Self {
        Self {
            points: SpatialIndex::empty(),
            shots: SpatialIndex::empty(),
        }
    }

    /// Baut beide Indizes aus einer geladenen Rekonstruktion.
    pub fn from_reconstruction(reconstruction: &Reconstruction) -> Self {
        let points = SpatialIndex::from_entries(
            reconstruction
                .points()
                .iter()
                .map(|p| (p.id, p.ground_position())),
        );
        let shots = SpatialIndex::from_entries(
            reconstruction
                .shots()
                .iter()
                .enumerate()
                .map(|(slot, shot)| (slot as u64, shot.ground_position())),
        );
        Self { points, shots }
    }
}

impl Default for PickingState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Gesamter Sitzungszustand des Viewers.
pub struct ViewerSession {
    /// Geladene Rekonstruktion; `None` vor dem ersten Laden
    pub reconstruction: Option<Arc<Reconstruction>>,
    /// Orthophoto-Overlay samt Ecken, falls vorhanden
    pub orthophoto: Option<Arc<Orthophoto>>,
    /// Karten- und Viewport-Zustand
    pub view: ViewState,
    /// Auswahl- und Hover-Zustand
    pub selection: SelectionState,
    /// Dialog-Flags und Statusmeldungen
    pub ui: UiState,
    /// Picking-Indizes der geladenen Szene
    pub picking: PickingState,
    /// Aktive Optionen
    pub options: ViewerOptions,
    /// Protokoll der zuletzt ausgeführten Commands
    pub command_log: CommandLog,
    /// Signalisiert der Event-Loop das Beenden
    pub should_exit: bool,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self {
            reconstruction: None,
            orthophoto: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            ui: UiState::new(),
            picking: PickingState::empty(),
            options: ViewerOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt zurück, ob eine Szene geladen und gefittet ist.
    pub fn has_scene(&self) -> bool {
        self.reconstruction.is_some() && self.view.mapper.is_some()
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}
