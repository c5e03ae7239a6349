//! Geteilte Konfiguration zwischen App-, UI- und Core-Schicht.

pub mod options;

pub use options::WheelOptions;
