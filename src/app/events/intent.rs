use crate::shared::WheelOptions;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Option aus dem Eingabefeld übernehmen
    OptionSubmitted { label: String },
    /// Option an Listen-Index entfernen
    OptionRemoveRequested { index: usize },
    /// Alle Optionen löschen (zeigt Bestätigungsdialog)
    ClearAllRequested,
    /// Löschen aller Optionen bestätigt
    ClearConfirmed,
    /// Löschen aller Optionen abgebrochen
    ClearCancelled,

    /// Rad drehen
    SpinRequested { now: f64 },
    /// Animations-Frame mit monotonem Zeitstempel
    AnimationTick { now: f64 },
    /// Rotation auf Ausgangslage zurücksetzen
    ResetRotationRequested,

    /// Speichern-Dialog öffnen
    SaveWheelRequested,
    /// Rad unter Namen speichern
    SaveWheelConfirmed { name: String },
    /// Speichern-Dialog abgebrochen
    SaveWheelCancelled,
    /// Laden-Dialog öffnen (liest die Store-Liste)
    LoadWheelRequested,
    /// Gespeichertes Rad laden
    LoadWheelSelected { name: String },
    /// Gespeichertes Rad löschen
    DeleteSavedWheelRequested { name: String },
    /// Laden-Dialog geschlossen
    LoadWheelCancelled,

    /// Options-Dialog öffnen
    OptionsDialogRequested,
    /// Geänderte Optionen übernehmen und persistieren
    OptionsApplied { options: WheelOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
    /// Options-Dialog schließen
    OptionsDialogClosed,

    /// Anwendung beenden
    ExitRequested,
}
