//! Datei-Dialoge und modale Fenster.

mod export_dialog;
mod file_dialogs;

pub use export_dialog::show_export_dialog;
pub use file_dialogs::handle_file_dialogs;
