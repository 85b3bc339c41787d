//! Rendering-Typen und Farb-Konvertierung.

use crate::core::ViewCamera;
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// Painter, auf den gezeichnet wird
    pub painter: &'a egui::Painter,
    /// Viewport-Rechteck in egui-Koordinaten
    pub rect: egui::Rect,
    /// Kamera (Ebene, Mitte, Zoom)
    pub camera: &'a ViewCamera,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Weltpunkt → absolute egui-Position.
    pub fn to_screen(&self, world: Vec3) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport_size);
        egui::pos2(self.rect.min.x + local.x, self.rect.min.y + local.y)
    }
}

/// RGBA `[0, 1]` → `egui::Color32` (Werte außerhalb werden geklemmt).
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
