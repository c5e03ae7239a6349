//! Glücksrad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, WheelState};
pub use core::{
    render_frame, segment_at, SpinController, SpinJob, SpinRejection, SpinTick, WheelFrame,
};
pub use shared::WheelOptions;
pub use store::{SnapshotStore, WheelSnapshot};
