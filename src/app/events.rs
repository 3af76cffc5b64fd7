//! ViewerIntent- und ViewerCommand-Enums für den Intent/Command-Datenfluss.

use std::path::PathBuf;

use glam::DVec2;

use crate::shared::ViewerOptions;

/// Viewer-Intent und Viewer-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// Report-Verzeichnis öffnen (zeigt Dateidialog)
    OpenReportDirRequested,
    /// Rohes ODM-Projektverzeichnis öffnen (zeigt Dateidialog)
    OpenProjectDirRequested,
    /// Dateidialog hat ein Report-Verzeichnis geliefert
    ReportDirSelected { path: PathBuf },
    /// Dateidialog hat ein Projektverzeichnis geliefert
    ProjectDirSelected { path: PathBuf },
    /// Aktuelle Quelle erneut laden
    ReloadRequested,
    /// Shot-Coverage-Report für das geladene Projekt exportieren
    ExportReportRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Mauszeiger über der Karte bewegt (Bildschirm-Pixel)
    MapPointerMoved { screen: DVec2 },
    /// Primärklick auf die Karte (Bildschirm-Pixel)
    MapClicked { screen: DVec2 },
    /// Mauszeiger hat die Kartenfläche verlassen
    MapPointerLeft,
    /// Punkt direkt angefahren (z. B. aus dem Detail-Panel)
    PointHovered { id: u64 },
    /// Shot direkt angefahren (z. B. aus dem Detail-Panel)
    ShotHovered { image_name: String },
    /// Shot direkt angeklickt (z. B. aus dem Detail-Panel)
    ShotClicked { image_name: String },
    /// Auswahl aller Shots aufheben
    ClearSelectionRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um Delta verschieben (Bildschirm-Pixel)
    MapPanned { delta: DVec2 },
    /// Karte zoomen, Fokuspunkt in Bildschirm-Pixeln
    MapZoomed { factor: f64, focus: DVec2 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf den Ausgangszustand zurücksetzen
    ResetViewRequested,
    /// Orthophoto ein-/ausblenden
    OrthophotoToggled,
    /// Orthophoto-Deckkraft ändern
    OrthophotoOpacityChanged { opacity: f32 },
    /// Punktwolke ein-/ausblenden
    PointsToggled,
    /// Footprints ein-/ausblenden
    FootprintsToggled,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen
    OptionsChanged { options: Box<ViewerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind ausführbare Einzelschritte, vom Controller abgearbeitet.
#[derive(Debug, Clone)]
pub enum ViewerCommand {
    /// Dateidialog für ein Report-Verzeichnis anfordern
    RequestReportDirDialog,
    /// Dateidialog für ein Projektverzeichnis anfordern
    RequestProjectDirDialog,
    /// Report-Verzeichnis laden
    LoadReportDir { path: PathBuf },
    /// Rohes ODM-Projekt laden
    LoadProjectDir { path: PathBuf },
    /// Aktuelle Quelle erneut laden
    ReloadScene,
    /// Report in das Projektverzeichnis exportieren
    ExportReport,
    /// Anwendung beenden
    RequestExit,
    /// Punkt als gehovert markieren und seine Shots hervorheben
    HoverPoint { id: u64 },
    /// Shot als gehovert markieren (Detailanzeige)
    HoverShot { image_name: String },
    /// Hover-Zustand aufheben
    ClearHover,
    /// Auswahl eines Shots umschalten
    ToggleShotSelection { image_name: String },
    /// Auswahl aller Shots aufheben
    ClearSelection,
    /// Viewport-Größe setzen und Skalen neu fitten
    SetViewportSize { size: [f32; 2] },
    /// Karte um Delta verschieben (Bildschirm-Pixel)
    PanView { delta: DVec2 },
    /// Auf einen Fokuspunkt zoomen (Bildschirm-Pixel)
    ZoomTowards { factor: f64, focus: DVec2 },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Ansicht zurücksetzen
    ResetView,
    /// Orthophoto-Sichtbarkeit umschalten
    ToggleOrthophoto,
    /// Orthophoto-Deckkraft setzen
    SetOrthophotoOpacity { opacity: f32 },
    /// Punktwolken-Sichtbarkeit umschalten
    TogglePoints,
    /// Footprint-Sichtbarkeit umschalten
    ToggleFootprints,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<ViewerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
