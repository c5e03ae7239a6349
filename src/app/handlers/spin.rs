//! Handler für Spin-Start und Animations-Ticks.

use crate::app::AppState;
use crate::core::angles;

/// Startet einen Spin zum Zeitpunkt `now`.
///
/// Ablehnungen (`InsufficientOptions`, `AlreadySpinning`) landen als
/// Statusmeldung beim Nutzer — kein Retry, kein stiller Fallback.
pub fn start_spin(state: &mut AppState, now: f64) {
    let option_count = state.wheel.option_count();
    let rotation = state.wheel.rotation;
    let duration = state.options.spin_duration_secs;

    match state
        .wheel
        .spin
        .request_spin(&mut rand::rng(), option_count, rotation, now, duration)
    {
        Ok(job) => {
            log::info!(
                "Spin gestartet: Ziel-Segment {} von {}, Dauer {:.1}s",
                job.target_index,
                option_count,
                duration
            );
            state.ui.status_message = None;
            state.ui.last_result = None;
        }
        Err(rejection) => {
            log::warn!("Spin abgelehnt: {}", rejection);
            state.ui.status_message = Some(rejection.to_string());
        }
    }
}

/// Wertet einen Animations-Frame aus.
///
/// Am Spin-Ende wird die Rotation in `[0, 2π)` gefaltet (numerische
/// Hygiene; die Segment-Wahl hängt nur vom relativen Sweep ab) und das
/// Lande-Segment gemeldet. Die Listenlänge wird beim Nachschlagen erneut
/// geprüft — eine Mutation während des Spins darf nicht crashen.
pub fn advance_spin(state: &mut AppState, now: f64) {
    let Some(job) = state.wheel.spin.current_job().copied() else {
        return;
    };

    let Some(tick) = state.wheel.spin.tick(now) else {
        return;
    };

    state.wheel.rotation = tick.rotation;
    if !tick.done {
        return;
    }

    state.wheel.rotation = angles::normalize(tick.rotation);
    match state.wheel.options.get(job.target_index) {
        Some(option) => {
            log::info!("Rad gelandet auf '{}' (Segment {})", option, job.target_index);
            state.ui.last_result = Some(option.clone());
        }
        None => {
            log::warn!(
                "Ziel-Segment {} existiert nach Listen-Änderung nicht mehr",
                job.target_index
            );
        }
    }
}

/// Setzt die Rotation auf die Ausgangslage zurück — nur im Stillstand.
pub fn reset_rotation(state: &mut AppState) {
    if state.wheel.spin.is_spinning() {
        log::debug!("ResetRotation während eines Spins ignoriert");
        return;
    }
    state.wheel.rotation = 0.0;
}
