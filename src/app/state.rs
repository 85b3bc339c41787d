//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{ExportFormat, SplinePointSet, ViewCamera};
use crate::shared::EditorOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Zustand des Export-Dialogs
#[derive(Debug, Clone, Default)]
pub struct ExportDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Gewähltes Ausgabeformat
    pub format: ExportFormat,
    /// Zuletzt erzeugter Exporttext
    pub text: String,
}

/// UI-bezogener Anwendungszustand (Dialoge, Statusmeldungen)
#[derive(Debug, Default)]
pub struct UiState {
    /// Export-Dialog
    pub export_dialog: ExportDialogState,
    /// Datei-Dialog "Export speichern" anzeigen (einmalig im nächsten Frame)
    pub show_export_save_dialog: bool,
    /// Datei-Dialog "Punkte laden" anzeigen (einmalig im nächsten Frame)
    pub show_import_dialog: bool,
    /// Statusnachricht für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Orthografische Kamera für die Ansicht
    pub camera: ViewCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: ViewCamera::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte und Outline des bearbeiteten Splines
    pub points: SplinePointSet,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Kurve, Farben, Größen)
    pub options: EditorOptions,
    /// Zufallsquelle für neue Kontrollpunkte
    pub rng: StdRng,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen.
    ///
    /// Outline-Auflösung und Kurven-Einstellungen werden aus den Optionen übernommen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let points = SplinePointSet::from_positions(
            crate::core::DEFAULT_POSITIONS.to_vec(),
            options.outline_resolution,
            options.curve,
        )
        .unwrap_or_else(|e| {
            log::warn!("Startpunkte mit Optionen nicht erzeugbar, verwende Standard: {:#}", e);
            SplinePointSet::new()
        });

        let mut ui = UiState::new();
        ui.export_dialog.format = options.export_format;

        Self {
            points,
            view: ViewState::new(),
            ui,
            command_log: CommandLog::new(),
            options,
            rng: StdRng::from_entropy(),
            should_exit: false,
        }
    }

    /// Ersetzt die Zufallsquelle durch eine deterministische (für Tests und Reproduzierbarkeit).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
