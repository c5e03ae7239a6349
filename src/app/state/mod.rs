/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Rad, UI, Optionen).
mod app_state;
mod ui;
mod wheel;

pub use app_state::AppState;
pub use ui::{LoadDialogState, SaveDialogState, UiState};
pub use wheel::WheelState;
