//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::DEFAULT_POSITIONS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::AddPointRequested => vec![AppCommand::AddRandomPoint],
        AppIntent::RemovePointRequested => vec![AppCommand::RemoveLastPoint],
        AppIntent::ResetPointsRequested => vec![AppCommand::LoadPoints {
            positions: DEFAULT_POSITIONS.to_vec(),
        }],
        AppIntent::CurveSettingsChanged { settings } => {
            vec![AppCommand::SetCurveSettings { settings }]
        }
        AppIntent::OutlineVisibilityToggled => vec![AppCommand::ToggleOutlineVisibility],

        AppIntent::HandleHovered { index } => {
            let handle = state.points.handle();
            // Während eines Drags bleibt die Bindung stehen
            if handle.is_dragging() || handle.is_attached_to(index) {
                Vec::new()
            } else {
                vec![AppCommand::AttachHandle { index }]
            }
        }
        AppIntent::ViewportClicked => vec![AppCommand::DetachHandle],
        AppIntent::HandleDragStarted => {
            if state.points.attached().is_some() {
                vec![AppCommand::BeginHandleDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::HandleDragged { delta_px } => {
            if !state.points.handle().is_dragging() {
                return Vec::new();
            }
            let delta_world = state
                .view
                .camera
                .screen_delta_to_world(delta_px, state.view.viewport_size[1]);
            vec![AppCommand::TranslateAttachedPoint { delta_world }]
        }
        AppIntent::HandleDragEnded => vec![AppCommand::EndHandleDrag],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => {
            let wpp = state
                .view
                .camera
                .world_per_pixel(state.view.viewport_size[1]);
            // Szene folgt der Maus: Bildmitte wandert entgegen
            let delta_plane = glam::Vec2::new(-delta_px.x, delta_px.y) * wpp;
            vec![AppCommand::PanCamera { delta_plane }]
        }
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::ViewPlaneChanged { plane } => vec![AppCommand::SetViewPlane { plane }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        AppIntent::ExportRequested => vec![AppCommand::OpenExportDialog],
        AppIntent::ExportFormatChanged { format } => vec![AppCommand::SetExportFormat { format }],
        AppIntent::ExportDialogClosed => vec![AppCommand::CloseExportDialog],
        AppIntent::ExportSaveRequested => vec![AppCommand::RequestExportSaveDialog],
        AppIntent::ExportSavePathSelected { path } => vec![AppCommand::SaveExport { path }],
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::LoadPointsFile { path }],

        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}
