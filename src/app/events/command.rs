use crate::shared::WheelOptions;

/// Mutierende App-Commands, erzeugt durch das Intent→Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Optionsliste ────────────────────────────────────────────
    AddOption { label: String },
    RemoveOption { index: usize },
    OpenClearConfirmDialog,
    CloseClearConfirmDialog,
    ClearOptions,

    // ── Spin ────────────────────────────────────────────────────
    StartSpin { now: f64 },
    AdvanceSpin { now: f64 },
    ResetRotation,

    // ── Snapshots ───────────────────────────────────────────────
    OpenSaveDialog,
    CloseSaveDialog,
    SaveSnapshot { name: String },
    OpenLoadDialog,
    CloseLoadDialog,
    LoadSnapshot { name: String },
    DeleteSnapshot { name: String },

    // ── Dialoge & Anwendungssteuerung ───────────────────────────
    OpenOptionsDialog,
    CloseOptionsDialog,
    ApplyOptions { options: WheelOptions },
    ResetOptions,
    RequestExit,
}
