//! Viewport-Zeichnung mit dem egui-Painter.

mod handle_renderer;
mod outline_renderer;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use handle_renderer::HandleRenderer;
pub(crate) use outline_renderer::OutlineRenderer;
pub use types::to_color32;
use types::RenderContext;

/// Haupt-Renderer für Outline und Kontrollpunkt-Handles.
///
/// Zustandslos: jeder Frame zeichnet die komplette `RenderScene` neu.
#[derive(Default)]
pub struct Renderer {
    outline_renderer: OutlineRenderer,
    handle_renderer: HandleRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die komplette Szene in `rect`.
    pub fn render_scene(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        painter.rect_filled(rect, 0.0, to_color32(scene.options.background_color));

        let ctx = RenderContext {
            painter,
            rect,
            camera: &scene.camera,
            viewport_size: glam::Vec2::new(scene.viewport_size[0], scene.viewport_size[1]),
            options: &scene.options,
        };

        // Outline unter den Handles
        if scene.has_outline() {
            self.outline_renderer.render(&ctx, &scene.outline);
        }
        self.handle_renderer.render(&ctx, &scene.handles);
    }
}
