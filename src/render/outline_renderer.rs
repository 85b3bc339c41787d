//! Outline als Line-Strip.

use super::types::{to_color32, RenderContext};
use glam::Vec3;

/// Zeichnet die abgetastete Kurve als zusammenhängenden Linienzug.
#[derive(Default)]
pub(crate) struct OutlineRenderer;

impl OutlineRenderer {
    pub fn render(&self, ctx: &RenderContext, outline: &[Vec3]) {
        let points: Vec<egui::Pos2> = outline.iter().map(|&p| ctx.to_screen(p)).collect();
        let stroke = egui::Stroke::new(
            ctx.options.outline_width_px,
            to_color32(ctx.options.outline_color),
        );
        ctx.painter.add(egui::Shape::line(points, stroke));
    }
}
