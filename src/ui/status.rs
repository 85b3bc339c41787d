//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::curve::polyline_length;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Outline: {} Samples, Länge {:.1}",
                state.point_count(),
                state.points.outline().len(),
                polyline_length(state.points.outline())
            ));

            ui.separator();

            match state.points.attached() {
                Some(index) => {
                    let p = state.points.positions()[index];
                    let mode = if state.points.handle().is_dragging() {
                        "zieht"
                    } else {
                        "gebunden"
                    };
                    ui.label(format!(
                        "Handle: Punkt {} ({}) ({:.1}, {:.1}, {:.1})",
                        index, mode, p.x, p.y, p.z
                    ));
                }
                None => {
                    ui.label("Handle: frei");
                }
            }

            ui.separator();

            ui.label(format!(
                "Ansicht: {} | Zoom: {:.2}x",
                state.view.camera.plane.label(),
                state.view.camera.zoom
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
