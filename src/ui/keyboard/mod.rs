//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    export_dialog_visible: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_e, key_o, key_insert, key_delete, key_escape, key_home) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Insert),
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Home),
        )
    });

    // Strg+E (Export), Strg+O (Punkte laden)
    if modifiers.command && key_e {
        events.push(AppIntent::ExportRequested);
    }
    if modifiers.command && key_o {
        events.push(AppIntent::ImportRequested);
    }

    if key_insert {
        events.push(AppIntent::AddPointRequested);
    }
    if key_delete {
        events.push(AppIntent::RemovePointRequested);
    }

    if key_escape {
        if export_dialog_visible {
            events.push(AppIntent::ExportDialogClosed);
        } else {
            // Handle lösen
            events.push(AppIntent::ViewportClicked);
        }
    }

    if key_home {
        events.push(AppIntent::ResetCameraRequested);
    }

    events
}
