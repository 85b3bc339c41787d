use glam::{Vec2, Vec3};
use spline_path_editor::{AppCommand, AppController, AppIntent, AppState, EditorOptions};
use spline_path_editor::{CurveSettings, CurveType, ExportFormat, ViewPlane};
use spline_path_editor::{DEFAULT_POSITIONS, MIN_POINTS};

fn seeded_state() -> AppState {
    let mut state = AppState::new().with_seed(7);
    state.view.viewport_size = [1280.0, 720.0];
    state
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("spline_path_editor_{}_{}", std::process::id(), name))
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_add_point_appends_inside_spawn_bounds() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let revision = state.points.outline_revision();

    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .expect("AddPointRequested sollte funktionieren");

    assert_eq!(state.point_count(), MIN_POINTS + 1);
    assert_eq!(state.points.outline_revision(), revision + 1);

    let added = state.points.positions()[MIN_POINTS];
    let bounds = state.options.spawn_bounds;
    assert!(added.cmpge(bounds.min).all());
    assert!(added.cmplt(bounds.max).all());
}

#[test]
fn test_remove_at_floor_sets_status_and_keeps_points() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::RemovePointRequested)
        .expect("RemovePointRequested sollte funktionieren");

    assert_eq!(state.point_count(), MIN_POINTS);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_reset_restores_default_positions() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::AddPointRequested)
            .expect("AddPointRequested sollte funktionieren");
    }
    assert_eq!(state.point_count(), MIN_POINTS + 3);

    let revision = state.points.outline_revision();
    controller
        .handle_intent(&mut state, AppIntent::ResetPointsRequested)
        .expect("ResetPointsRequested sollte funktionieren");

    assert_eq!(state.points.positions(), &DEFAULT_POSITIONS);
    // Laden regeneriert genau einmal
    assert_eq!(state.points.outline_revision(), revision + 1);
}

#[test]
fn test_hover_drag_moves_attached_point_and_regenerates() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let before = state.points.positions()[1];
    let outline_before = state.points.outline().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::HandleHovered { index: 1 })
        .expect("HandleHovered sollte funktionieren");
    assert_eq!(state.points.attached(), Some(1));

    controller
        .handle_intent(&mut state, AppIntent::HandleDragStarted)
        .expect("HandleDragStarted sollte funktionieren");
    assert!(state.points.handle().is_dragging());

    // Hover auf anderen Punkt während des Drags ändert die Bindung nicht
    controller
        .handle_intent(&mut state, AppIntent::HandleHovered { index: 2 })
        .expect("HandleHovered sollte funktionieren");
    assert_eq!(state.points.attached(), Some(1));

    controller
        .handle_intent(
            &mut state,
            AppIntent::HandleDragged {
                delta_px: Vec2::new(36.0, 0.0),
            },
        )
        .expect("HandleDragged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::HandleDragEnded)
        .expect("HandleDragEnded sollte funktionieren");

    let after = state.points.positions()[1];
    assert!(after.x > before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.z, before.z);
    assert_ne!(state.points.outline(), outline_before.as_slice());
    assert!(!state.points.handle().is_dragging());
    assert_eq!(state.points.attached(), Some(1));
}

#[test]
fn test_click_detaches_handle() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::HandleHovered { index: 0 })
        .expect("HandleHovered sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::ViewportClicked)
        .expect("ViewportClicked sollte funktionieren");

    assert_eq!(state.points.attached(), None);
}

#[test]
fn test_remove_detaches_handle_from_last_point() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .expect("AddPointRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::HandleHovered { index: MIN_POINTS })
        .expect("HandleHovered sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::RemovePointRequested)
        .expect("RemovePointRequested sollte funktionieren");

    assert_eq!(state.point_count(), MIN_POINTS);
    assert_eq!(state.points.attached(), None);
}

#[test]
fn test_export_dialog_shows_rust_source_then_json() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte funktionieren");

    assert!(state.ui.export_dialog.visible);
    let text = &state.ui.export_dialog.text;
    assert!(text.starts_with("vec!["));
    assert!(text.ends_with(']'));
    assert_eq!(text.matches("Vec3::new(").count(), MIN_POINTS);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportFormatChanged {
                format: ExportFormat::Json,
            },
        )
        .expect("ExportFormatChanged sollte funktionieren");

    let parsed = spline_path_editor::core::parse_json_points(&state.ui.export_dialog.text)
        .expect("JSON-Export sollte lesbar sein");
    assert_eq!(parsed, state.points.positions());
    assert_eq!(state.options.export_format, ExportFormat::Json);

    controller
        .handle_intent(&mut state, AppIntent::ExportDialogClosed)
        .expect("ExportDialogClosed sollte funktionieren");
    assert!(!state.ui.export_dialog.visible);
}

#[test]
fn test_open_export_dialog_follows_point_changes() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .expect("AddPointRequested sollte funktionieren");

    assert_eq!(
        state.ui.export_dialog.text.matches("Vec3::new(").count(),
        MIN_POINTS + 1
    );
    assert_eq!(state.ui.export_dialog.text, state.points.export_points());

    controller
        .handle_intent(&mut state, AppIntent::HandleHovered { index: 0 })
        .expect("HandleHovered sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::HandleDragStarted)
        .expect("HandleDragStarted sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::HandleDragged {
                delta_px: Vec2::new(12.0, -8.0),
            },
        )
        .expect("HandleDragged sollte funktionieren");

    assert_eq!(state.ui.export_dialog.text, state.points.export_points());
}

#[test]
fn test_options_with_overflowing_spawn_bounds_still_add_points() {
    let mut controller = AppController::new();
    let mut options = EditorOptions::default();
    options.spawn_bounds.min = Vec3::new(-3.0e38, 0.0, 0.0);
    options.spawn_bounds.max = Vec3::new(3.0e38, 1.0, 1.0);
    let mut state = AppState::with_options(options).with_seed(11);

    controller
        .handle_intent(&mut state, AppIntent::AddPointRequested)
        .expect("AddPointRequested sollte funktionieren");

    assert_eq!(state.point_count(), MIN_POINTS + 1);
    let added = state.points.positions()[MIN_POINTS];
    assert!(added.cmpge(state.options.spawn_bounds.min).all());
    assert!(added.cmplt(state.options.spawn_bounds.max).all());
}

#[test]
fn test_options_with_nan_zoom_limit_still_zoom() {
    let mut controller = AppController::new();
    let options = EditorOptions {
        camera_zoom_min: f32::NAN,
        camera_zoom_max: 4.0,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::CameraZoom { factor: 1.1 })
        .expect("CameraZoom sollte funktionieren");

    assert!(state.view.camera.zoom.is_finite());
    assert!(state.view.camera.zoom <= 4.0);
}

#[test]
fn test_export_save_writes_file() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let path = temp_path("export.rs");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportSavePathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Export sollte schreibbar sein");

    let written = std::fs::read_to_string(&path).expect("Exportdatei sollte existieren");
    assert_eq!(written, state.points.export_points());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_import_json_file_replaces_points() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let path = temp_path("import.json");
    std::fs::write(
        &path,
        "[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0], [10.0, 0.0, -1.0]]",
    )
    .expect("Testdatei sollte schreibbar sein");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Import sollte funktionieren");

    assert_eq!(state.point_count(), 5);
    assert_eq!(state.points.positions()[4], Vec3::new(10.0, 0.0, -1.0));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_import_invalid_file_returns_error_and_keeps_points() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let path = temp_path("broken.json");
    std::fs::write(&path, "kein json").expect("Testdatei sollte schreibbar sein");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImportFileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.points.positions(), &DEFAULT_POSITIONS);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_curve_settings_change_regenerates_and_updates_options() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let outline_before = state.points.outline().to_vec();
    let settings = CurveSettings {
        curve_type: CurveType::Centripetal,
        ..CurveSettings::default()
    };

    controller
        .handle_intent(&mut state, AppIntent::CurveSettingsChanged { settings })
        .expect("CurveSettingsChanged sollte funktionieren");

    assert_eq!(state.points.curve_settings(), settings);
    assert_eq!(state.options.curve, settings);
    assert_ne!(state.points.outline(), outline_before.as_slice());
}

#[test]
fn test_outline_toggle_hides_outline_in_render_scene() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    controller
        .handle_intent(&mut state, AppIntent::OutlineVisibilityToggled)
        .expect("OutlineVisibilityToggled sollte funktionieren");

    let scene = controller.build_render_scene(&state, [1280.0, 720.0]);
    assert!(!scene.has_outline());
    assert_eq!(scene.handles.len(), MIN_POINTS);
}

#[test]
fn test_zoom_is_clamped_to_options() {
    let mut controller = AppController::new();
    let mut state = seeded_state();

    for _ in 0..200 {
        controller
            .handle_intent(&mut state, AppIntent::CameraZoom { factor: 2.0 })
            .expect("CameraZoom sollte funktionieren");
    }

    assert_eq!(state.view.camera.zoom, state.options.camera_zoom_max);
}

#[test]
fn test_view_plane_change_keeps_shared_axis() {
    let mut controller = AppController::new();
    let mut state = seeded_state();
    let center_x = state.view.camera.center.x;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewPlaneChanged {
                plane: ViewPlane::Top,
            },
        )
        .expect("ViewPlaneChanged sollte funktionieren");

    assert_eq!(state.view.camera.plane, ViewPlane::Top);
    // X ist in Front- und Top-Ansicht die Bildschirm-Horizontale
    assert_eq!(state.view.camera.center.x, center_x);
}
