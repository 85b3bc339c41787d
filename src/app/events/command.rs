use crate::core::{CurveSettings, ExportFormat, ViewPlane};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,

    // ── Kontrollpunkte ──
    /// Punkt an zufälliger Position innerhalb der Spawn-Grenzen anhängen
    AddRandomPoint,
    /// Letzten Punkt entfernen (No-op an der Mindestanzahl)
    RemoveLastPoint,
    /// Alle Punkte durch die gegebenen Positionen ersetzen
    LoadPoints { positions: Vec<glam::Vec3> },
    /// Kurven-Einstellungen übernehmen
    SetCurveSettings { settings: CurveSettings },
    /// Outline-Sichtbarkeit umschalten
    ToggleOutlineVisibility,

    // ── Transform-Handle ──
    /// Handle an Kontrollpunkt binden
    AttachHandle { index: usize },
    /// Handle-Bindung lösen
    DetachHandle,
    /// Drag-Lifecycle Start
    BeginHandleDrag,
    /// Gebundenen Punkt um ein Welt-Delta verschieben
    TranslateAttachedPoint { delta_world: glam::Vec3 },
    /// Drag-Lifecycle Ende
    EndHandleDrag,

    // ── Kamera & Viewport ──
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um ein Ebenen-Delta verschieben
    PanCamera { delta_plane: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera { factor: f32 },
    /// Ansichtsebene setzen
    SetViewPlane { plane: ViewPlane },
    /// Kamera zurücksetzen
    ResetCamera,

    // ── Export / Import ──
    /// Exporttext erzeugen und Dialog öffnen
    OpenExportDialog,
    /// Exportformat setzen und Text neu erzeugen
    SetExportFormat { format: ExportFormat },
    /// Export-Dialog schließen
    CloseExportDialog,
    /// Dateidialog für Export anfordern
    RequestExportSaveDialog,
    /// Exporttext in Datei schreiben
    SaveExport { path: String },
    /// Dateidialog für Import anfordern
    RequestImportDialog,
    /// JSON-Punktliste laden
    LoadPointsFile { path: String },

    // ── Optionen ──
    /// Optionen persistieren
    SaveOptions,
}
