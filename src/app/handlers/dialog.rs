//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::WheelOptions;

/// Öffnet den Bestätigungsdialog „Alle Optionen löschen".
pub fn open_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = true;
}

/// Schließt den Bestätigungsdialog.
pub fn close_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = false;
}

/// Öffnet den Speichern-Dialog.
pub fn open_save_dialog(state: &mut AppState) {
    state.ui.save_dialog.visible = true;
}

/// Schließt den Speichern-Dialog.
pub fn close_save_dialog(state: &mut AppState) {
    state.ui.save_dialog.visible = false;
}

/// Öffnet den Laden-Dialog und liest die Store-Liste.
/// Store-Fehler landen als Statusmeldung, der Dialog bleibt zu.
pub fn open_load_dialog(state: &mut AppState) {
    match state.store.list() {
        Ok(wheels) => {
            state.ui.load_dialog.wheels = wheels;
            state.ui.load_dialog.visible = true;
        }
        Err(e) => {
            log::error!("Store-Liste nicht lesbar: {:#}", e);
            state.ui.status_message = Some(format!("Gespeicherte Räder nicht lesbar: {e}"));
        }
    }
}

/// Schließt den Laden-Dialog.
pub fn close_load_dialog(state: &mut AppState) {
    state.ui.load_dialog.visible = false;
}

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt geänderte Optionen (Live-Preview) und persistiert als TOML.
/// Der Dialog bleibt für weitere Änderungen offen.
pub fn apply_options(state: &mut AppState, options: WheelOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&WheelOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück und persistiert.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = WheelOptions::default();
    state.options.save_to_file(&WheelOptions::config_path())
}

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
