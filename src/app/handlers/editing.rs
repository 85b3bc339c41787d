//! Handler für Kontrollpunkt-Operationen (Hinzufügen, Entfernen, Laden).

use crate::app::AppState;
use crate::core::CurveSettings;

/// Hängt einen Punkt an zufälliger Position innerhalb der Spawn-Grenzen an.
pub fn add_random_point(state: &mut AppState) {
    let bounds = state.options.spawn_bounds;
    let index = state.points.add_random_point(&mut state.rng, &bounds);
    let position = state.points.positions()[index];
    log::info!(
        "Punkt {} hinzugefügt bei ({:.1}, {:.1}, {:.1})",
        index,
        position.x,
        position.y,
        position.z
    );
    state.ui.status_message = None;
}

/// Entfernt den letzten Punkt; an der Mindestanzahl nur Statusmeldung.
pub fn remove_last_point(state: &mut AppState) {
    if state.points.remove_point() {
        log::info!("Letzter Punkt entfernt, {} verbleibend", state.points.count());
        state.ui.status_message = None;
    } else {
        state.ui.status_message = Some(format!(
            "Mindestens {} Punkte erforderlich",
            crate::core::MIN_POINTS
        ));
    }
}

/// Ersetzt alle Punkte durch die gegebenen Positionen.
pub fn load_points(state: &mut AppState, positions: &[glam::Vec3]) {
    state.points.load(positions);
    log::info!(
        "{} Positionen geladen, {} Punkte aktiv",
        positions.len(),
        state.points.count()
    );
}

/// Übernimmt neue Kurven-Einstellungen in Punktmenge und Optionen.
pub fn set_curve_settings(state: &mut AppState, settings: CurveSettings) {
    state.points.set_curve_settings(settings);
    state.options.curve = settings;
}

/// Schaltet die Sichtbarkeit der Outline um.
pub fn toggle_outline(state: &mut AppState) {
    state.options.outline_visible = !state.options.outline_visible;
}
