//! Handler für die Optionsliste (Hinzufügen, Entfernen, Leeren).

use crate::app::AppState;

/// Übernimmt eine neue Option aus dem Eingabefeld.
///
/// Leere Eingaben werden mit Statusmeldung abgelehnt. Duplikate sind
/// ausdrücklich erlaubt — der Listen-Index, nicht der Text, identifiziert
/// das Segment.
pub fn add_option(state: &mut AppState, label: &str) {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        state.ui.status_message = Some("Option darf nicht leer sein".to_string());
        return;
    }

    state.wheel.options.push(trimmed.to_string());
    state.ui.option_input.clear();
    state.ui.status_message = None;
    log::debug!(
        "Option hinzugefügt: '{}' ({} gesamt)",
        trimmed,
        state.wheel.option_count()
    );
}

/// Entfernt die Option am angegebenen Listen-Index.
/// Ein veralteter Index (Liste wurde zwischenzeitlich verändert) wird
/// ignoriert statt zu panicken.
pub fn remove_option(state: &mut AppState, index: usize) {
    if index >= state.wheel.options.len() {
        log::warn!("RemoveOption mit ungültigem Index {} ignoriert", index);
        return;
    }
    let removed = state.wheel.options.remove(index);
    log::debug!("Option entfernt: '{}'", removed);
}

/// Leert die Optionsliste und setzt die Rotation zurück.
/// Ein laufender Spin läuft weiter und landet dann auf dem leeren Rad —
/// Geometrie und Hit-Test liefern dafür leere Ergebnisse.
pub fn clear_options(state: &mut AppState) {
    state.wheel.options.clear();
    state.wheel.rotation = 0.0;
    state.ui.last_result = None;
    log::info!("Alle Optionen gelöscht");
}
