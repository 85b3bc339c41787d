//! Viewport-Input-Handling: Maus-Events, Handle-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `pointer`: Hover-Bindung, Klick, Drag-Lifecycle und Pan
//! - `zoom`: Scroll-Zoom

mod pointer;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, AppState, ViewCamera};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Gebundener Kontrollpunkt wird verschoben
    HandleMove,
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a ViewCamera,
    pub positions: &'a [Vec3],
    pub attached: Option<usize>,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Index des Handles unter `pointer_pos` (absolute egui-Position).
    pub fn pick_handle(&self, pointer_pos: egui::Pos2) -> Option<usize> {
        let local = pointer_pos - self.response.rect.min;
        self.camera.pick(
            self.positions,
            glam::Vec2::new(local.x, local.y),
            glam::Vec2::new(self.viewport_size[0], self.viewport_size[1]),
            self.options.pick_radius_px,
        )
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        state: &AppState,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera: &state.view.camera,
            positions: state.points.positions(),
            attached: state.points.attached(),
            options: &state.options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            state.ui.export_dialog.visible,
        ));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}
