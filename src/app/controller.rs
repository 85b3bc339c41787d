//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Kontrollpunkte ===
            AppCommand::AddRandomPoint => handlers::editing::add_random_point(state),
            AppCommand::RemoveLastPoint => handlers::editing::remove_last_point(state),
            AppCommand::LoadPoints { positions } => handlers::editing::load_points(state, &positions),
            AppCommand::SetCurveSettings { settings } => {
                handlers::editing::set_curve_settings(state, settings)
            }
            AppCommand::ToggleOutlineVisibility => handlers::editing::toggle_outline(state),

            // === Transform-Handle ===
            AppCommand::AttachHandle { index } => handlers::handle::attach(state, index),
            AppCommand::DetachHandle => handlers::handle::detach(state),
            AppCommand::BeginHandleDrag => handlers::handle::begin_drag(state),
            AppCommand::TranslateAttachedPoint { delta_world } => {
                handlers::handle::translate(state, delta_world)
            }
            AppCommand::EndHandleDrag => handlers::handle::end_drag(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_plane } => handlers::view::pan(state, delta_plane),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::SetViewPlane { plane } => handlers::view::set_view_plane(state, plane),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Export / Import ===
            AppCommand::OpenExportDialog => handlers::dialog::open_export_dialog(state)?,
            AppCommand::SetExportFormat { format } => {
                handlers::dialog::set_export_format(state, format)?
            }
            AppCommand::CloseExportDialog => handlers::dialog::close_export_dialog(state),
            AppCommand::RequestExportSaveDialog => {
                handlers::dialog::request_export_save_dialog(state)
            }
            AppCommand::SaveExport { path } => handlers::file_io::save_export(state, &path)?,
            AppCommand::RequestImportDialog => handlers::dialog::request_import_dialog(state),
            AppCommand::LoadPointsFile { path } => {
                handlers::file_io::load_points_file(state, &path)?
            }

            // === Optionen ===
            AppCommand::SaveOptions => handlers::file_io::save_options(state)?,
        }

        // Offener Export-Dialog zeigt immer die aktuellen Punkte
        if state.ui.export_dialog.visible {
            handlers::dialog::refresh_export_text(state)?;
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
