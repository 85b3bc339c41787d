//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::{ViewCamera, ViewPlane};

/// Setzt die Kamera auf den Standardzustand zurück (Ansichtsebene bleibt).
pub fn reset_camera(state: &mut AppState) {
    let plane = state.view.camera.plane;
    state.view.camera = ViewCamera::new();
    state.view.camera.plane = plane;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Ebenen-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt innerhalb der konfigurierten Grenzen.
pub fn zoom(state: &mut AppState, factor: f32) {
    if !factor.is_finite() || factor <= 0.0 {
        return;
    }
    let (min, max) = (state.options.camera_zoom_min, state.options.camera_zoom_max);
    state.view.camera.zoom_by(factor, min, max);
}

/// Wechselt die Ansichtsebene.
pub fn set_view_plane(state: &mut AppState, plane: ViewPlane) {
    if state.view.camera.plane == plane {
        return;
    }
    // Bildmitte aus der bisherigen Ebene in die neue übertragen
    let (right, up) = state.view.camera.plane.axes();
    let center_world = right * state.view.camera.center.x + up * state.view.camera.center.y;
    state.view.camera.plane = plane;
    state.view.camera.center = plane.project(center_world);
}
