use crate::core::{CurveSettings, ExportFormat, ViewPlane};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,

    // ── Kontrollpunkte ──
    /// Neuen Punkt an zufälliger Position anhängen
    AddPointRequested,
    /// Letzten Punkt entfernen
    RemovePointRequested,
    /// Kontrollpunkte auf die Startpositionen zurücksetzen
    ResetPointsRequested,
    /// Kurven-Einstellungen geändert (Parametrisierung, Spannung, geschlossen)
    CurveSettingsChanged { settings: CurveSettings },
    /// Outline ein-/ausblenden
    OutlineVisibilityToggled,

    // ── Transform-Handle ──
    /// Cursor schwebt über dem Handle mit Index `index`
    HandleHovered { index: usize },
    /// Klick ohne Mausbewegung im Viewport
    ViewportClicked,
    /// Drag des gebundenen Handles beginnt
    HandleDragStarted,
    /// Gebundenes Handle um ein Pixel-Delta verschoben
    HandleDragged { delta_px: glam::Vec2 },
    /// Drag des gebundenen Handles beendet
    HandleDragEnded,

    // ── Kamera & Viewport ──
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Pixel-Delta verschieben
    CameraPan { delta_px: glam::Vec2 },
    /// Kamera zoomen
    CameraZoom { factor: f32 },
    /// Ansichtsebene wechseln
    ViewPlaneChanged { plane: ViewPlane },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,

    // ── Export / Import ──
    /// Export-Dialog öffnen
    ExportRequested,
    /// Exportformat im Dialog geändert
    ExportFormatChanged { format: ExportFormat },
    /// Export-Dialog schließen
    ExportDialogClosed,
    /// Export als Datei speichern (zeigt Dateidialog)
    ExportSaveRequested,
    /// Speicherpfad für den Export wurde im Dialog ausgewählt
    ExportSavePathSelected { path: String },
    /// Punktliste aus Datei laden (zeigt Dateidialog)
    ImportRequested,
    /// Punktdatei wurde im Dialog ausgewählt
    ImportFileSelected { path: String },

    // ── Optionen ──
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
}
