//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::ViewCamera;
use glam::Vec3;

/// Ein zu zeichnendes Kontrollpunkt-Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    /// Weltposition des Kontrollpunkts
    pub position: Vec3,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    /// Handle ist an den Transform-Handle gebunden
    pub attached: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Outline als Line-Strip in Weltkoordinaten
    pub outline: Vec<Vec3>,
    /// Outline sichtbar
    pub outline_visible: bool,
    /// Ein Handle pro Kontrollpunkt, in Kurvenreihenfolge
    pub handles: Vec<HandleMarker>,
    /// Kamera-Zustand für diesen Frame
    pub camera: ViewCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Outline gezeichnet werden soll.
    pub fn has_outline(&self) -> bool {
        self.outline_visible && self.outline.len() >= 2
    }

    /// Index des gebundenen Handles.
    pub fn attached_index(&self) -> Option<usize> {
        self.handles.iter().position(|h| h.attached)
    }
}
