use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Export-Speichern-Dialog
    if ui_state.show_export_save_dialog {
        ui_state.show_export_save_dialog = false;

        let format = ui_state.export_dialog.format;
        let extension = format.file_extension();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(format.label(), &[extension])
            .set_file_name(format!("spline_points.{}", extension))
            .save_file()
        {
            events.push(AppIntent::ExportSavePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Punkte-Laden-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Punktliste (JSON)", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ImportFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
