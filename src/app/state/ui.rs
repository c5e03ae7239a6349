/// Zustand des Speichern-Dialogs.
#[derive(Default)]
pub struct SaveDialogState {
    pub visible: bool,
    /// Eingabefeld für den Rad-Namen.
    pub name: String,
}

/// Zustand des Laden-Dialogs.
#[derive(Default)]
pub struct LoadDialogState {
    pub visible: bool,
    /// Namen aller gespeicherten Räder, beim Öffnen aus dem Store gelesen.
    pub wheels: Vec<String>,
}

/// UI-Zustand: Eingabepuffer, Dialoge, Statusmeldung.
#[derive(Default)]
pub struct UiState {
    /// Eingabefeld für neue Optionen.
    pub option_input: String,
    /// Statusmeldung in der Status-Bar (Validierung, Spin-Ablehnung, I/O).
    pub status_message: Option<String>,
    /// Option, auf der das Rad zuletzt gelandet ist.
    pub last_result: Option<String>,
    /// Bestätigungsdialog „Alle Optionen löschen".
    pub show_clear_confirm: bool,
    pub save_dialog: SaveDialogState,
    pub load_dialog: LoadDialogState,
    /// Ob der Options-Dialog angezeigt wird.
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}
