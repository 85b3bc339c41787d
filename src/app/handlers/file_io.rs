//! Handler für Datei-Operationen (Export schreiben, Punkte laden, Optionen).

use crate::app::AppState;
use crate::core::parse_json_points;
use crate::shared::EditorOptions;
use anyhow::Context;

/// Schreibt die aktuellen Punkte im gewählten Exportformat nach `path`.
pub fn save_export(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let text = crate::core::export::format_points(
        state.points.positions(),
        state.ui.export_dialog.format,
    )?;
    std::fs::write(path, &text)
        .with_context(|| format!("Export nicht schreibbar: {}", path))?;
    state.ui.export_dialog.text = text;
    state.ui.status_message = Some(format!("Exportiert nach {}", path));
    log::info!("{} Punkte exportiert nach: {}", state.points.count(), path);
    Ok(())
}

/// Lädt eine JSON-Punktliste und ersetzt damit die aktuellen Punkte.
pub fn load_points_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Punktdatei nicht lesbar: {}", path))?;
    let positions =
        parse_json_points(&text).with_context(|| format!("Ungültige Punktdatei: {}", path))?;
    super::editing::load_points(state, &positions);
    state.ui.status_message = Some(format!("{} Positionen geladen", positions.len()));
    Ok(())
}

/// Persistiert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
