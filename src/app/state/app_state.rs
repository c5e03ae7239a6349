use crate::app::CommandLog;
use crate::shared::WheelOptions;
use crate::store::SnapshotStore;

use super::{UiState, WheelState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Rad-Zustand (Optionen, Rotation, Spin)
    pub wheel: WheelState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Dauer, Ränder, Tooltip)
    pub options: WheelOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Dokument-Store für benannte Räder
    pub store: SnapshotStore,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Store.
    pub fn new() -> Self {
        Self::with_store(SnapshotStore::new(SnapshotStore::default_dir()))
    }

    /// Erstellt einen App-State über einem bestimmten Store
    /// (Tests injizieren hier ein Temp-Verzeichnis).
    pub fn with_store(store: SnapshotStore) -> Self {
        Self {
            wheel: WheelState::new(),
            ui: UiState::new(),
            options: WheelOptions::default(),
            command_log: CommandLog::new(),
            store,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Optionen zurück (für UI-Anzeige)
    pub fn option_count(&self) -> usize {
        self.wheel.option_count()
    }

    /// Gibt zurück, ob gerade eine Spin-Animation läuft.
    pub fn is_spinning(&self) -> bool {
        self.wheel.spin.is_spinning()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
