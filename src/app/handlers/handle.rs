//! Handler für das Transform-Handle (Binden, Lösen, Ziehen).

use crate::app::AppState;

/// Bindet das Handle an den Kontrollpunkt `index`.
pub fn attach(state: &mut AppState, index: usize) {
    if state.points.attach_handle(index) {
        log::debug!("Handle gebunden an Punkt {}", index);
    }
}

/// Löst das Handle vom aktuell gebundenen Punkt.
pub fn detach(state: &mut AppState) {
    if let Some(index) = state.points.detach_handle() {
        log::debug!("Handle von Punkt {} gelöst", index);
    }
}

/// Startet den Drag des gebundenen Punkts.
pub fn begin_drag(state: &mut AppState) {
    state.points.set_dragging(true);
}

/// Verschiebt den gebundenen Punkt um ein Welt-Delta.
pub fn translate(state: &mut AppState, delta_world: glam::Vec3) {
    state.points.translate_attached(delta_world);
}

/// Beendet den Drag; die Bindung bleibt bestehen.
pub fn end_drag(state: &mut AppState) {
    state.points.set_dragging(false);
}
