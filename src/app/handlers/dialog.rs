//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::core::export::format_points;
use crate::core::ExportFormat;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Erzeugt den Exporttext im gewählten Format und öffnet den Dialog.
///
/// Der Text wird zusätzlich auf dem Log ausgegeben.
pub fn open_export_dialog(state: &mut AppState) -> anyhow::Result<()> {
    refresh_export_text(state)?;
    log::info!("Export:\n{}", state.ui.export_dialog.text);
    state.ui.export_dialog.visible = true;
    Ok(())
}

/// Setzt das Exportformat und erzeugt den Text neu.
pub fn set_export_format(state: &mut AppState, format: ExportFormat) -> anyhow::Result<()> {
    state.ui.export_dialog.format = format;
    state.options.export_format = format;
    refresh_export_text(state)
}

/// Schließt den Export-Dialog.
pub fn close_export_dialog(state: &mut AppState) {
    state.ui.export_dialog.visible = false;
}

/// Fordert den "Export speichern"-Dateidialog an.
pub fn request_export_save_dialog(state: &mut AppState) {
    state.ui.show_export_save_dialog = true;
}

/// Fordert den "Punkte laden"-Dateidialog an.
pub fn request_import_dialog(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Erzeugt den Exporttext aus den aktuellen Punkten neu.
pub fn refresh_export_text(state: &mut AppState) -> anyhow::Result<()> {
    state.ui.export_dialog.text =
        format_points(state.points.positions(), state.ui.export_dialog.format)?;
    Ok(())
}
