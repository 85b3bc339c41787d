//! Zentrale Konfiguration für den Spline-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveSettings, ExportFormat, SpawnBounds, ViewCamera, ARC_SEGMENTS};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = ViewCamera::ZOOM_MIN;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = ViewCamera::ZOOM_MAX;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Handles ─────────────────────────────────────────────────────────

/// Kantenlänge eines Kontrollpunkt-Handles in Screen-Pixeln.
pub const HANDLE_SIZE_PX: f32 = 10.0;
/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;
/// Farbe des gebundenen Handles (RGBA: Gelb).
pub const HANDLE_COLOR_ATTACHED: [f32; 4] = [1.0, 0.85, 0.0, 1.0];

// ── Outline ─────────────────────────────────────────────────────────

/// Outline-Farbe (RGBA: Rot, halbtransparent).
pub const OUTLINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.35];
/// Linienstärke der Outline in Screen-Pixeln.
pub const OUTLINE_WIDTH_PX: f32 = 2.0;

// ── Szene ───────────────────────────────────────────────────────────

/// Hintergrundfarbe des Viewports (RGBA: Hellgrau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.94, 0.94, 0.94, 1.0];

/// Name der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "spline_path_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl der Outline-Abtastpunkte (wirkt beim nächsten Programmstart)
    pub outline_resolution: usize,
    /// Outline anzeigen
    #[serde(default = "default_true")]
    pub outline_visible: bool,
    /// Outline-Farbe (RGBA)
    pub outline_color: [f32; 4],
    /// Linienstärke der Outline in Pixeln
    pub outline_width_px: f32,

    // ── Punkte ──────────────────────────────────────────────────
    /// Handle-Größe in Pixeln
    pub handle_size_px: f32,
    /// Farbe des gebundenen Handles
    pub handle_color_attached: [f32; 4],
    /// Pick-Radius für Hover-Bindung in Pixeln
    pub pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Hintergrundfarbe des Viewports
    pub background_color: [f32; 4],

    // ── Export ──────────────────────────────────────────────────
    /// Vorausgewähltes Exportformat
    #[serde(default)]
    pub export_format: ExportFormat,

    // ── Tabellen (müssen in TOML nach den einfachen Werten stehen) ──
    /// Parametrisierung, Spannung, geschlossen/offen
    #[serde(default)]
    pub curve: CurveSettings,
    /// Bereich für zufällig platzierte neue Punkte
    #[serde(default)]
    pub spawn_bounds: SpawnBounds,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            outline_resolution: ARC_SEGMENTS,
            outline_visible: true,
            outline_color: OUTLINE_COLOR,
            outline_width_px: OUTLINE_WIDTH_PX,

            handle_size_px: HANDLE_SIZE_PX,
            handle_color_attached: HANDLE_COLOR_ATTACHED,
            pick_radius_px: PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            background_color: BACKGROUND_COLOR,

            export_format: ExportFormat::default(),

            curve: CurveSettings::default(),
            spawn_bounds: SpawnBounds::default(),
        }
    }
}

/// Serde-Default für boolesche Felder, die standardmäßig aktiv sind.
fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Korrigiert Werte, die den Editor unbenutzbar machen würden.
    pub fn sanitized(mut self) -> Self {
        if self.outline_resolution < 2 {
            log::warn!(
                "outline_resolution {} zu klein, verwende {}",
                self.outline_resolution,
                ARC_SEGMENTS
            );
            self.outline_resolution = ARC_SEGMENTS;
        }
        if !self.camera_zoom_min.is_finite() || self.camera_zoom_min <= 0.0 {
            log::warn!(
                "camera_zoom_min {} ungültig, verwende {}",
                self.camera_zoom_min,
                CAMERA_ZOOM_MIN
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
        }
        if !self.camera_zoom_max.is_finite() || self.camera_zoom_max <= 0.0 {
            log::warn!(
                "camera_zoom_max {} ungültig, verwende {}",
                self.camera_zoom_max,
                CAMERA_ZOOM_MAX
            );
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        }
        if self.camera_zoom_min > self.camera_zoom_max {
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }
        if !self.spawn_bounds.is_valid() {
            log::warn!(
                "spawn_bounds {:?} nicht endlich, verwende Standardbereich",
                self.spawn_bounds
            );
            self.spawn_bounds = SpawnBounds::default();
        }
        self
    }
}
