//! Kontrollpunkt-Handles als gefüllte Quadrate.

use super::types::{to_color32, RenderContext};
use crate::shared::HandleMarker;

/// Zeichnet ein Handle pro Kontrollpunkt, das gebundene hervorgehoben.
#[derive(Default)]
pub(crate) struct HandleRenderer;

impl HandleRenderer {
    pub fn render(&self, ctx: &RenderContext, handles: &[HandleMarker]) {
        let size = ctx.options.handle_size_px;
        for handle in handles {
            let center = ctx.to_screen(handle.position);
            // Nur sichtbare Handles zeichnen
            if !ctx.rect.expand(size).contains(center) {
                continue;
            }
            let rect = egui::Rect::from_center_size(center, egui::vec2(size, size));
            ctx.painter
                .rect_filled(rect, 1.0, to_color32(handle.color));

            if handle.attached {
                // Achsenkreuz der Ansichtsebene als Transform-Gizmo
                let arm = size * 2.0;
                let stroke = egui::Stroke::new(2.0, to_color32(handle.color));
                ctx.painter.line_segment(
                    [center - egui::vec2(arm, 0.0), center + egui::vec2(arm, 0.0)],
                    stroke,
                );
                ctx.painter.line_segment(
                    [center - egui::vec2(0.0, arm), center + egui::vec2(0.0, arm)],
                    stroke,
                );
                ctx.painter.rect_stroke(
                    rect.expand(2.0),
                    1.0,
                    egui::Stroke::new(1.5, egui::Color32::BLACK),
                    egui::StrokeKind::Outside,
                );
            }
        }
    }
}
