use crate::core::SpinController;

/// Zustand des Rads: Optionsliste, akkumulierte Rotation, Spin-Maschine.
///
/// Ersetzt die Modul-Globals des ursprünglichen Designs durch eine explizit
/// besessene Struktur, die an Geometrie, Spin und Hit-Test übergeben wird.
pub struct WheelState {
    /// Geordnete Optionsliste; Listen-Index = Segment-Index.
    /// Duplikate sind erlaubt, leere Einträge nicht.
    pub options: Vec<String>,
    /// Akkumulierte Rotation in Radiant. Wird nur während eines Spins
    /// fortgeschrieben und am Spin-Ende in `[0, 2π)` gefaltet.
    pub rotation: f32,
    /// Spin-Zustandsmaschine (`Idle`/`Spinning`).
    pub spin: SpinController,
}

impl WheelState {
    /// Erstellt ein leeres, stehendes Rad.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            rotation: 0.0,
            spin: SpinController::new(),
        }
    }

    /// Anzahl der Optionen (= Segmente).
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}
