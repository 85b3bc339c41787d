//! Pointer-Verarbeitung: Hover-Bindung, Klick-Lösen, Handle-Drag und Kamera-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Bindet das Handle an den Punkt unter dem Cursor (nicht während eines Drags).
    pub(crate) fn handle_hover(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if self.primary_drag_mode != PrimaryDragMode::None {
            return;
        }
        let Some(pointer_pos) = ctx.response.hover_pos() else {
            return;
        };
        if let Some(index) = ctx.pick_handle(pointer_pos) {
            if ctx.attached != Some(index) {
                events.push(AppIntent::HandleHovered { index });
            }
        }
    }

    /// Klick ohne Bewegung löst das Handle.
    pub(crate) fn handle_clicks(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.clicked() {
            events.push(AppIntent::ViewportClicked);
        }
    }

    /// Entscheidet beim Drag-Start, ob der gebundene Punkt oder die Kamera bewegt wird.
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        let press_origin = ctx.ui.input(|i| i.pointer.press_origin());
        let on_attached = ctx.attached.is_some()
            && press_origin.and_then(|pos| ctx.pick_handle(pos)) == ctx.attached;

        if on_attached {
            self.primary_drag_mode = PrimaryDragMode::HandleMove;
            events.push(AppIntent::HandleDragStarted);
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Verarbeitet Maus-Bewegungs-Deltas für Handle-Drag und Kamera-Pan.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }
        let delta_px = glam::Vec2::new(pointer_delta.x, pointer_delta.y);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::HandleMove => {
                    events.push(AppIntent::HandleDragged { delta_px });
                }
                PrimaryDragMode::CameraPan => {
                    events.push(AppIntent::CameraPan { delta_px });
                }
                PrimaryDragMode::None => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan { delta_px });
        }
    }

    /// Beendet einen laufenden Primär-Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped() {
            return;
        }
        if self.primary_drag_mode == PrimaryDragMode::HandleMove {
            events.push(AppIntent::HandleDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
