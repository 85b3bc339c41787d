//! Properties-Panel (rechte Seitenleiste) für Kurve, Ansicht und Punktliste.

use crate::app::{AppIntent, AppState};
use crate::core::{CurveSettings, CurveType, ViewPlane};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.separator();
            render_curve_settings(ui, state.points.curve_settings(), &mut events);

            let mut outline_visible = state.options.outline_visible;
            if ui.checkbox(&mut outline_visible, "Outline anzeigen").changed() {
                events.push(AppIntent::OutlineVisibilityToggled);
            }

            ui.add_space(8.0);
            ui.heading("Ansicht");
            ui.separator();
            render_view_selector(ui, state.view.camera.plane, &mut events);
            if ui.button("Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.add_space(8.0);
            ui.heading("Kontrollpunkte");
            ui.separator();
            render_point_list(ui, state);
        });

    events
}

fn render_curve_settings(
    ui: &mut egui::Ui,
    current: CurveSettings,
    events: &mut Vec<AppIntent>,
) {
    let mut settings = current;

    egui::ComboBox::from_label("Typ")
        .selected_text(settings.curve_type.label())
        .show_ui(ui, |ui| {
            for curve_type in CurveType::ALL {
                ui.selectable_value(&mut settings.curve_type, curve_type, curve_type.label());
            }
        });

    // Spannung wirkt nur auf die uniforme Variante
    ui.add_enabled(
        settings.curve_type == CurveType::Uniform,
        egui::Slider::new(&mut settings.tension, 0.0..=1.0).text("Spannung"),
    );

    ui.checkbox(&mut settings.closed, "Geschlossen");

    if settings != current {
        events.push(AppIntent::CurveSettingsChanged { settings });
    }
}

fn render_view_selector(ui: &mut egui::Ui, current: ViewPlane, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        for plane in ViewPlane::ALL {
            if ui.selectable_label(current == plane, plane.label()).clicked() && current != plane
            {
                events.push(AppIntent::ViewPlaneChanged { plane });
            }
        }
    });
}

fn render_point_list(ui: &mut egui::Ui, state: &AppState) {
    let attached = state.points.attached();
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("point_list")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    for (index, p) in state.points.positions().iter().enumerate() {
                        let label = format!("#{}", index);
                        if attached == Some(index) {
                            ui.strong(label);
                        } else {
                            ui.label(label);
                        }
                        ui.monospace(format!("{:8.1}", p.x));
                        ui.monospace(format!("{:8.1}", p.y));
                        ui.monospace(format!("{:8.1}", p.z));
                        ui.end_row();
                    }
                });
        });
}
