//! UI-Komponenten: Toolbar, Properties, Status-Bar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Dialoge).
/// Keyboard-Shortcuts und Viewport-Input sind in eigene Dateien extrahiert.
pub mod properties;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_file_dialogs, show_export_dialog};
pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
