//! Winkel-Konvention des Rads.
//!
//! Geometrie und Hit-Test müssen denselben Null-Punkt und dieselbe
//! Segment-Richtung verwenden — jede Abweichung ist ein Korrektheitsfehler,
//! kein kosmetischer. Deshalb lebt die Konvention genau hier.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Winkel-Offset des nullten Segments, zusätzlich zur aktuellen Rotation.
///
/// Bei genau einer Option liegt der Referenzwinkel auf 0 (3-Uhr-Richtung),
/// damit das einzelne Label aufrecht nach außen zeigt. Ab zwei Optionen
/// beginnt das nullte Segment bei −π/2 (12-Uhr-Richtung).
pub fn initial_offset(option_count: usize) -> f32 {
    if option_count <= 1 {
        0.0
    } else {
        -FRAC_PI_2
    }
}

/// Winkelbreite eines Segments bei `option_count` Optionen.
///
/// Für `option_count == 0` nicht definiert; Aufrufer behandeln die leere
/// Liste vorher (leerer Frame bzw. `None`).
pub fn segment_span(option_count: usize) -> f32 {
    TAU / option_count as f32
}

/// Normalisiert einen Winkel in `[0, 2π)` durch wiederholte Addition von 2π.
///
/// Der Eingabewinkel kann beliebig negativ sein (akkumulierte Rotation).
pub fn normalize(mut angle: f32) -> f32 {
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}
