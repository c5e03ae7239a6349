use gluecksrad::{AppCommand, AppController, AppIntent, AppState, SnapshotStore};
use std::f32::consts::TAU;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static TEST_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// App-State über einem Temp-Store; Verzeichnis wird am Test-Ende abgeräumt.
struct TestApp {
    controller: AppController,
    state: AppState,
    store_dir: PathBuf,
}

impl TestApp {
    fn new() -> Self {
        let store_dir = std::env::temp_dir().join(format!(
            "gluecksrad_flow_test_{}_{}",
            std::process::id(),
            TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        Self {
            controller: AppController::new(),
            state: AppState::with_store(SnapshotStore::new(&store_dir)),
            store_dir,
        }
    }

    fn handle(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn add_options(&mut self, labels: &[&str]) {
        for label in labels {
            self.handle(AppIntent::OptionSubmitted {
                label: label.to_string(),
            });
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.store_dir);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Optionsliste: Hinzufügen, Entfernen, Leeren
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_option_submitted_adds_trimmed_option() {
    let mut app = TestApp::new();

    app.handle(AppIntent::OptionSubmitted {
        label: "  Pizza  ".to_string(),
    });

    assert_eq!(app.state.wheel.options, vec!["Pizza".to_string()]);
    assert!(app.state.ui.status_message.is_none());
}

#[test]
fn test_empty_option_is_rejected_with_status_message() {
    let mut app = TestApp::new();

    app.handle(AppIntent::OptionSubmitted {
        label: "   ".to_string(),
    });

    assert!(app.state.wheel.options.is_empty());
    assert_eq!(
        app.state.ui.status_message.as_deref(),
        Some("Option darf nicht leer sein")
    );
}

#[test]
fn test_duplicate_options_are_allowed() {
    let mut app = TestApp::new();

    app.add_options(&["Pizza", "Pizza"]);

    // Der Listen-Index identifiziert das Segment, nicht der Text.
    assert_eq!(app.state.option_count(), 2);
}

#[test]
fn test_remove_option_by_index() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B", "C"]);

    app.handle(AppIntent::OptionRemoveRequested { index: 1 });

    assert_eq!(
        app.state.wheel.options,
        vec!["A".to_string(), "C".to_string()]
    );
}

#[test]
fn test_remove_with_stale_index_is_ignored() {
    let mut app = TestApp::new();
    app.add_options(&["A"]);

    app.handle(AppIntent::OptionRemoveRequested { index: 5 });

    assert_eq!(app.state.option_count(), 1);
}

#[test]
fn test_clear_flow_requires_confirmation() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);
    app.state.wheel.rotation = 3.0;

    app.handle(AppIntent::ClearAllRequested);
    assert!(app.state.ui.show_clear_confirm);
    assert_eq!(app.state.option_count(), 2);

    app.handle(AppIntent::ClearConfirmed);
    assert!(!app.state.ui.show_clear_confirm);
    assert!(app.state.wheel.options.is_empty());
    assert_eq!(app.state.wheel.rotation, 0.0);
}

#[test]
fn test_clear_cancelled_keeps_options() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);

    app.handle(AppIntent::ClearAllRequested);
    app.handle(AppIntent::ClearCancelled);

    assert!(!app.state.ui.show_clear_confirm);
    assert_eq!(app.state.option_count(), 2);

    let last = app
        .state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::CloseClearConfirmDialog));
}

// ═══════════════════════════════════════════════════════════════════
// Spin: Start, Ablehnung, Ticks, Abschluss
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_spin_with_too_few_options_sets_status_message() {
    let mut app = TestApp::new();
    app.add_options(&["Allein"]);

    app.handle(AppIntent::SpinRequested { now: 0.0 });

    assert!(!app.state.is_spinning());
    assert_eq!(
        app.state.ui.status_message.as_deref(),
        Some("Mindestens 2 Optionen nötig, um das Rad zu drehen")
    );
}

#[test]
fn test_spin_request_starts_animation() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B", "C"]);

    app.handle(AppIntent::SpinRequested { now: 100.0 });

    assert!(app.state.is_spinning());
    assert!(app.state.ui.status_message.is_none());
}

#[test]
fn test_second_spin_request_is_rejected() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);

    app.handle(AppIntent::SpinRequested { now: 100.0 });
    let job = *app
        .state
        .wheel
        .spin
        .current_job()
        .expect("Job sollte laufen");

    app.handle(AppIntent::SpinRequested { now: 101.0 });

    assert_eq!(
        app.state.ui.status_message.as_deref(),
        Some("Das Rad dreht sich bereits")
    );
    // Der laufende Job bleibt unangetastet.
    let unchanged = app.state.wheel.spin.current_job().unwrap();
    assert_eq!(unchanged.start_time, job.start_time);
    assert_eq!(unchanged.target_angle, job.target_angle);
}

#[test]
fn test_animation_ticks_advance_and_complete() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B", "C", "D"]);

    app.handle(AppIntent::SpinRequested { now: 100.0 });
    let job = *app.state.wheel.spin.current_job().unwrap();
    let duration = f64::from(app.state.options.spin_duration_secs);

    app.handle(AppIntent::AnimationTick { now: 100.0 });
    assert_eq!(app.state.wheel.rotation, job.start_angle);

    app.handle(AppIntent::AnimationTick {
        now: 100.0 + duration / 2.0,
    });
    assert!(app.state.is_spinning());
    let midway = app.state.wheel.rotation;
    assert!(midway > job.start_angle);
    assert!(midway < job.target_angle);

    app.handle(AppIntent::AnimationTick {
        now: 100.0 + duration,
    });
    assert!(!app.state.is_spinning());
    assert_eq!(
        app.state.ui.last_result.as_deref(),
        Some(["A", "B", "C", "D"][job.target_index])
    );
}

#[test]
fn test_rotation_is_normalized_after_spin() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B", "C"]);

    app.handle(AppIntent::SpinRequested { now: 0.0 });
    app.handle(AppIntent::AnimationTick { now: 60.0 });

    // Mindestens 5 Umdrehungen gedreht, aber in [0, 2π) gefaltet.
    assert!(!app.state.is_spinning());
    assert!(app.state.wheel.rotation >= 0.0);
    assert!(app.state.wheel.rotation < TAU);
}

#[test]
fn test_list_mutation_during_spin_does_not_crash() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);

    app.handle(AppIntent::SpinRequested { now: 0.0 });
    // Beide Optionen während des Spins entfernen — das Ziel-Segment
    // existiert am Ende garantiert nicht mehr.
    app.handle(AppIntent::OptionRemoveRequested { index: 1 });
    app.handle(AppIntent::OptionRemoveRequested { index: 0 });

    app.handle(AppIntent::AnimationTick { now: 2.0 });
    app.handle(AppIntent::AnimationTick { now: 60.0 });

    assert!(!app.state.is_spinning());
    assert!(app.state.ui.last_result.is_none());
}

#[test]
fn test_reset_rotation_only_when_idle() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);
    app.state.wheel.rotation = 1.5;

    app.handle(AppIntent::ResetRotationRequested);
    assert_eq!(app.state.wheel.rotation, 0.0);

    app.handle(AppIntent::SpinRequested { now: 0.0 });
    app.handle(AppIntent::AnimationTick { now: 1.0 });
    let mid_spin = app.state.wheel.rotation;

    app.handle(AppIntent::ResetRotationRequested);
    assert_eq!(app.state.wheel.rotation, mid_spin);
}

// ═══════════════════════════════════════════════════════════════════
// Snapshots: Speichern, Laden, Löschen über den Dokument-Store
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_save_and_load_wheel_roundtrip() {
    let mut app = TestApp::new();
    app.add_options(&["Pizza", "Ramen", "Salat"]);

    app.handle(AppIntent::SaveWheelRequested);
    assert!(app.state.ui.save_dialog.visible);

    app.handle(AppIntent::SaveWheelConfirmed {
        name: "Mittagessen".to_string(),
    });
    assert!(!app.state.ui.save_dialog.visible);

    // Rad verändern, dann gespeicherten Stand zurückladen.
    app.handle(AppIntent::ClearAllRequested);
    app.handle(AppIntent::ClearConfirmed);
    app.state.wheel.rotation = 2.0;

    app.handle(AppIntent::LoadWheelRequested);
    assert!(app.state.ui.load_dialog.visible);
    assert_eq!(app.state.ui.load_dialog.wheels, vec!["Mittagessen"]);

    app.handle(AppIntent::LoadWheelSelected {
        name: "Mittagessen".to_string(),
    });
    assert!(!app.state.ui.load_dialog.visible);
    assert_eq!(
        app.state.wheel.options,
        vec!["Pizza".to_string(), "Ramen".to_string(), "Salat".to_string()]
    );
    assert_eq!(app.state.wheel.rotation, 0.0);
}

#[test]
fn test_save_with_invalid_name_keeps_dialog_open() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);

    app.handle(AppIntent::SaveWheelRequested);
    app.handle(AppIntent::SaveWheelConfirmed {
        name: "a/b".to_string(),
    });

    assert!(app.state.ui.save_dialog.visible);
    let status = app.state.ui.status_message.as_deref().unwrap_or_default();
    assert!(
        status.contains("Speichern fehlgeschlagen"),
        "Unerwartete Statusmeldung: {status}"
    );
}

#[test]
fn test_delete_saved_wheel_updates_dialog_list() {
    let mut app = TestApp::new();
    app.add_options(&["A", "B"]);

    app.handle(AppIntent::SaveWheelConfirmed {
        name: "Eins".to_string(),
    });
    app.handle(AppIntent::SaveWheelConfirmed {
        name: "Zwei".to_string(),
    });

    app.handle(AppIntent::LoadWheelRequested);
    assert_eq!(app.state.ui.load_dialog.wheels, vec!["Eins", "Zwei"]);

    app.handle(AppIntent::DeleteSavedWheelRequested {
        name: "Eins".to_string(),
    });
    assert_eq!(app.state.ui.load_dialog.wheels, vec!["Zwei"]);

    // Store-Inhalt prüfen: nur „Zwei" übrig.
    assert_eq!(app.state.store.list().unwrap(), vec!["Zwei"]);
}

#[test]
fn test_load_missing_wheel_reports_error() {
    let mut app = TestApp::new();

    app.handle(AppIntent::LoadWheelSelected {
        name: "Gibt es nicht".to_string(),
    });

    let status = app.state.ui.status_message.as_deref().unwrap_or_default();
    assert!(
        status.contains("Laden fehlgeschlagen"),
        "Unerwartete Statusmeldung: {status}"
    );
}

// ═══════════════════════════════════════════════════════════════════
// Anwendungssteuerung
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut app = TestApp::new();

    assert!(!app.state.should_exit);

    app.handle(AppIntent::ExitRequested);

    assert!(app.state.should_exit);

    let last = app
        .state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::RequestExit));
}
