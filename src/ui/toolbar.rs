//! Toolbar für Punkt-, Export- und Datei-Aktionen.

use crate::app::{AppIntent, AppState};
use crate::core::MIN_POINTS;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Punkte:");
            ui.separator();

            if ui
                .button("➕ Punkt hinzufügen")
                .on_hover_text("Neuer Punkt an zufälliger Position (Einfg)")
                .clicked()
            {
                events.push(AppIntent::AddPointRequested);
            }

            let can_remove = state.point_count() > MIN_POINTS;
            if ui
                .add_enabled(can_remove, egui::Button::new("➖ Punkt entfernen"))
                .on_hover_text("Letzten Punkt entfernen (Entf)")
                .on_disabled_hover_text(format!("Mindestens {} Punkte", MIN_POINTS))
                .clicked()
            {
                events.push(AppIntent::RemovePointRequested);
            }

            if ui.button("↺ Zurücksetzen").clicked() {
                events.push(AppIntent::ResetPointsRequested);
            }

            ui.separator();

            if ui
                .button("📋 Exportieren")
                .on_hover_text("Punkte als Quelltext exportieren (Strg+E)")
                .clicked()
            {
                events.push(AppIntent::ExportRequested);
            }

            if ui
                .button("📂 Punkte laden…")
                .on_hover_text("JSON-Punktliste laden (Strg+O)")
                .clicked()
            {
                events.push(AppIntent::ImportRequested);
            }

            ui.separator();

            if ui.button("💾 Optionen speichern").clicked() {
                events.push(AppIntent::SaveOptionsRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
