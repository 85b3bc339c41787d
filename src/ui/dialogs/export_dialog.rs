use crate::app::{AppIntent, UiState};
use crate::core::ExportFormat;

/// Zeigt den Export-Dialog mit dem erzeugten Punkt-Text.
///
/// Der Text kann in die Zwischenablage kopiert oder per Datei-Dialog
/// gespeichert werden. Ein Formatwechsel erzeugt den Text neu.
pub fn show_export_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let dialog = &ui_state.export_dialog;

    if !dialog.visible {
        return events;
    }

    let mut open = true;
    egui::Window::new("Punkte exportieren")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([520.0, 320.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Format:");
                let mut format = dialog.format;
                egui::ComboBox::from_id_salt("export_format")
                    .selected_text(format.label())
                    .show_ui(ui, |ui| {
                        for candidate in ExportFormat::ALL {
                            ui.selectable_value(&mut format, candidate, candidate.label());
                        }
                    });
                if format != dialog.format {
                    events.push(AppIntent::ExportFormatChanged { format });
                }
            });

            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut dialog.text.as_str())
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("📋 Kopieren").clicked() {
                    ui.ctx().copy_text(dialog.text.clone());
                    log::info!("Export in Zwischenablage kopiert");
                }
                if ui.button("💾 Speichern…").clicked() {
                    events.push(AppIntent::ExportSaveRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::ExportDialogClosed);
                }
            });
        });

    if !open {
        events.push(AppIntent::ExportDialogClosed);
    }

    events
}
