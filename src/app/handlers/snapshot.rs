//! Handler für das Speichern und Laden benannter Räder.

use crate::app::AppState;

/// Speichert die aktuelle Optionsliste unter dem angegebenen Namen.
///
/// Bei Erfolg schließt der Dialog; bei Fehler (z.B. ungültiger Name) bleibt
/// er offen und die Eingabe erhalten.
pub fn save_snapshot(state: &mut AppState, name: &str) {
    match state.store.save(name, &state.wheel.options) {
        Ok(snapshot) => {
            state.ui.save_dialog.visible = false;
            state.ui.status_message = Some(format!(
                "Rad '{}' gespeichert ({} Optionen)",
                snapshot.name,
                snapshot.options.len()
            ));
        }
        Err(e) => {
            log::error!("Speichern fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {e}"));
        }
    }
}

/// Lädt ein gespeichertes Rad in den Rad-Zustand.
///
/// Ein laufender Spin wird nicht unterbrochen; die neue Liste gilt ab dem
/// nächsten Frame (Segmentanzahl wird pro Frame neu berechnet).
pub fn load_snapshot(state: &mut AppState, name: &str) {
    match state.store.load(name) {
        Ok(snapshot) => {
            state.wheel.options = snapshot.options;
            state.wheel.rotation = 0.0;
            state.ui.last_result = None;
            state.ui.load_dialog.visible = false;
            state.ui.save_dialog.name = snapshot.name.clone();
            state.ui.status_message = Some(format!(
                "Rad '{}' geladen ({} Optionen)",
                snapshot.name,
                state.wheel.option_count()
            ));
        }
        Err(e) => {
            log::error!("Laden fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some(format!("Laden fehlgeschlagen: {e}"));
        }
    }
}

/// Löscht ein gespeichertes Rad und aktualisiert die Dialog-Liste.
pub fn delete_snapshot(state: &mut AppState, name: &str) {
    if let Err(e) = state.store.delete(name) {
        log::error!("Löschen fehlgeschlagen: {:#}", e);
        state.ui.status_message = Some(format!("Löschen fehlgeschlagen: {e}"));
        return;
    }
    state.ui.load_dialog.wheels.retain(|n| n != name);
    state.ui.status_message = Some(format!("Rad '{name}' gelöscht"));
}
