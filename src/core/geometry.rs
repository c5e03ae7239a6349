//! Rad-Geometrie: Segmente, Farben, Label-Platzierung.
//!
//! `render_frame` ist eine reine Funktion von (Optionen, Rotation, Radius,
//! Text-Messung) und damit ohne Display-Oberfläche testbar. Die Text-Messung
//! wird als Closure injiziert; im UI misst egui, in Tests eine Fake-Breite.

use glam::Vec2;
use std::f32::consts::PI;

use super::angles::{initial_offset, segment_span};

// ── Label ───────────────────────────────────────────────────────────

/// Anker-Abstand des Labels vom Zentrum, als Bruchteil des Radius.
pub const LABEL_ANCHOR_FRACTION: f32 = 0.2;
/// Maximale Label-Breite, als Bruchteil des Radius.
pub const LABEL_MAX_WIDTH_FRACTION: f32 = 0.8;
/// Kürzungs-Markierung am Ende abgeschnittener Labels.
pub const ELLIPSIS: char = '…';
/// Label-Textfarbe (RGBA: Dunkelblau-Grau).
pub const LABEL_COLOR: [f32; 4] = [0.173, 0.243, 0.314, 1.0];

// ── Segmente ────────────────────────────────────────────────────────

/// Sättigung der Segmentfarben (HSL).
pub const SEGMENT_SATURATION: f32 = 0.7;
/// Helligkeit gerader Segmente (HSL).
pub const SEGMENT_LIGHTNESS_EVEN: f32 = 0.7;
/// Helligkeit ungerader Segmente (HSL).
pub const SEGMENT_LIGHTNESS_ODD: f32 = 0.6;

// ── Nabe ────────────────────────────────────────────────────────────

/// Radius der Nabe in Pixeln.
pub const HUB_RADIUS: f32 = 10.0;
/// Füllfarbe der Nabe (RGBA: Weiß).
pub const HUB_FILL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Outline-Farbe der Nabe (RGBA: Dunkelblau-Grau).
pub const HUB_STROKE: [f32; 4] = [0.173, 0.243, 0.314, 1.0];
/// Outline-Breite der Nabe in Pixeln.
pub const HUB_STROKE_WIDTH: f32 = 3.0;

/// Ein Winkel-Sektor des Rads mit fertig platziertem Label.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Listen-Index der zugehörigen Option (= Zeichenreihenfolge).
    pub index: usize,
    /// Startwinkel in Radiant (inklusive Rotation und Offset).
    pub start_angle: f32,
    /// Endwinkel in Radiant.
    pub end_angle: f32,
    /// Füllfarbe (RGBA).
    pub fill: [f32; 4],
    /// Ggf. gekürzter Label-Text.
    pub label: String,
    /// Label-Anker relativ zum Rad-Zentrum.
    pub label_anchor: Vec2,
    /// Leserichtung des Labels in Radiant.
    pub label_angle: f32,
}

impl Segment {
    /// Winkel der Segment-Mitte (Halbierende).
    pub fn bisector(&self) -> f32 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }
}

/// Naben-Marker im Zentrum, wird zuletzt (über den Segmenten) gezeichnet.
#[derive(Debug, Clone, Copy)]
pub struct HubMarker {
    pub radius: f32,
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub stroke_width: f32,
}

/// Zeichenbares Ergebnis einer Geometrie-Auswertung.
#[derive(Debug, Clone, Default)]
pub struct WheelFrame {
    pub segments: Vec<Segment>,
    /// `None` bei leerer Optionsliste (nur leere Fläche zeichnen).
    pub hub: Option<HubMarker>,
}

/// Berechnet die komplette Rad-Geometrie für einen Frame.
///
/// Leere Optionsliste liefert einen leeren Frame — kein Fehler.
/// `measure` liefert die gerenderte Breite eines Textes in Pixeln.
pub fn render_frame(
    options: &[String],
    rotation: f32,
    radius: f32,
    measure: &dyn Fn(&str) -> f32,
) -> WheelFrame {
    let count = options.len();
    if count == 0 {
        return WheelFrame::default();
    }

    let span = segment_span(count);
    let offset = rotation + initial_offset(count);
    let max_label_width = radius * LABEL_MAX_WIDTH_FRACTION;

    let segments = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let start_angle = offset + index as f32 * span;
            let end_angle = start_angle + span;
            let bisector = start_angle + span / 2.0;

            let hue = index as f32 * 360.0 / count as f32;
            let lightness = if index % 2 == 0 {
                SEGMENT_LIGHTNESS_EVEN
            } else {
                SEGMENT_LIGHTNESS_ODD
            };

            let label_anchor =
                Vec2::new(bisector.cos(), bisector.sin()) * (radius * LABEL_ANCHOR_FRACTION);
            // Einzelnes Segment: Leserichtung um π drehen, damit der Text
            // aufrecht bleibt. Zusätzlich zum Positions-Offset, nicht statt.
            let label_angle = if count == 1 { bisector + PI } else { bisector };

            Segment {
                index,
                start_angle,
                end_angle,
                fill: hsl_to_rgba(hue, SEGMENT_SATURATION, lightness),
                label: fit_label(option, max_label_width, measure),
                label_anchor,
                label_angle,
            }
        })
        .collect();

    WheelFrame {
        segments,
        hub: Some(HubMarker {
            radius: HUB_RADIUS,
            fill: HUB_FILL,
            stroke: HUB_STROKE,
            stroke_width: HUB_STROKE_WIDTH,
        }),
    }
}

/// Kürzt ein Label zeichenweise von hinten, bis es (mit Ellipse) in
/// `max_width` passt.
///
/// Kürzt nie unter 1 sichtbares Zeichen; passt selbst „1 Zeichen + Ellipse"
/// nicht, wird der Überlauf akzeptiert statt endlos zu schleifen.
fn fit_label(label: &str, max_width: f32, measure: &dyn Fn(&str) -> f32) -> String {
    if measure(label) <= max_width {
        return label.to_owned();
    }

    let mut chars: Vec<char> = label.chars().collect();
    if chars.len() <= 1 {
        return label.to_owned();
    }

    loop {
        chars.pop();
        let mut candidate: String = chars.iter().collect();
        candidate.push(ELLIPSIS);
        if measure(&candidate) <= max_width || chars.len() == 1 {
            return candidate;
        }
    }
}

/// Konvertiert HSL (Hue in Grad, S/L in `[0, 1]`) nach RGBA.
pub fn hsl_to_rgba(hue_degrees: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let hue = hue_degrees.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let second = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let base = lightness - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, second, 0.0),
        h if h < 120.0 => (second, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, second),
        h if h < 240.0 => (0.0, second, chroma),
        h if h < 300.0 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    [r + base, g + base, b + base, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, TAU};

    /// Fake-Messung: 10 Pixel pro Zeichen.
    fn char_width(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_options_produce_empty_frame() {
        let frame = render_frame(&[], 1.3, 200.0, &char_width);
        assert!(frame.segments.is_empty());
        assert!(frame.hub.is_none());
    }

    #[test]
    fn test_segments_cover_full_circle_without_gaps() {
        for n in 1..=13 {
            let options: Vec<String> = (0..n).map(|i| format!("O{i}")).collect();
            let frame = render_frame(&options, 0.7, 200.0, &char_width);
            assert_eq!(frame.segments.len(), n);

            let span_sum: f32 = frame
                .segments
                .iter()
                .map(|s| s.end_angle - s.start_angle)
                .sum();
            assert_relative_eq!(span_sum, TAU, epsilon = 1e-4);

            for pair in frame.segments.windows(2) {
                assert_relative_eq!(pair[0].end_angle, pair[1].start_angle, epsilon = 1e-5);
                assert_relative_eq!(
                    pair[0].end_angle - pair[0].start_angle,
                    TAU / n as f32,
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn test_zero_segment_starts_at_twelve_o_clock_for_multiple_options() {
        let frame = render_frame(&labels(&["A", "B", "C", "D"]), 0.0, 200.0, &char_width);
        assert_relative_eq!(frame.segments[0].start_angle, -FRAC_PI_2);
    }

    #[test]
    fn test_single_segment_reference_angle_is_three_o_clock() {
        let frame = render_frame(&labels(&["Solo"]), 0.0, 200.0, &char_width);
        assert_relative_eq!(frame.segments[0].start_angle, 0.0);
        assert_relative_eq!(frame.segments[0].end_angle, TAU);
    }

    #[test]
    fn test_rotation_shifts_all_boundaries() {
        let rotation = 1.25;
        let still = render_frame(&labels(&["A", "B", "C"]), 0.0, 200.0, &char_width);
        let turned = render_frame(&labels(&["A", "B", "C"]), rotation, 200.0, &char_width);
        for (a, b) in still.segments.iter().zip(turned.segments.iter()) {
            assert_relative_eq!(b.start_angle - a.start_angle, rotation, epsilon = 1e-5);
            assert_relative_eq!(b.end_angle - a.end_angle, rotation, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_adjacent_segments_alternate_lightness() {
        let frame = render_frame(&labels(&["A", "B"]), 0.0, 200.0, &char_width);
        assert_eq!(
            frame.segments[0].fill,
            hsl_to_rgba(0.0, SEGMENT_SATURATION, SEGMENT_LIGHTNESS_EVEN)
        );
        assert_eq!(
            frame.segments[1].fill,
            hsl_to_rgba(180.0, SEGMENT_SATURATION, SEGMENT_LIGHTNESS_ODD)
        );
        assert_ne!(frame.segments[0].fill, frame.segments[1].fill);
    }

    #[test]
    fn test_label_anchor_lies_on_bisector_at_fixed_fraction() {
        let radius = 200.0;
        let frame = render_frame(&labels(&["A", "B", "C", "D"]), 0.4, radius, &char_width);
        for segment in &frame.segments {
            let bisector = segment.bisector();
            let expected = Vec2::new(bisector.cos(), bisector.sin()) * radius * 0.2;
            assert_relative_eq!(segment.label_anchor.x, expected.x, epsilon = 1e-4);
            assert_relative_eq!(segment.label_anchor.y, expected.y, epsilon = 1e-4);
            assert_relative_eq!(segment.label_angle, bisector, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_single_label_reading_direction_is_flipped() {
        let frame = render_frame(&labels(&["Solo"]), 0.6, 200.0, &char_width);
        let segment = &frame.segments[0];
        // Anker bleibt auf der Halbierenden, nur die Leserichtung dreht um π.
        let bisector = segment.bisector();
        let expected = Vec2::new(bisector.cos(), bisector.sin()) * 200.0 * 0.2;
        assert_relative_eq!(segment.label_anchor.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(segment.label_angle, bisector + PI, epsilon = 1e-4);
    }

    #[test]
    fn test_long_label_is_truncated_with_ellipsis() {
        // Radius 100 → Kappe 80 Pixel → 8 Zeichen à 10 Pixel.
        let frame = render_frame(&labels(&["Zwölfzeichenlang", "B"]), 0.0, 100.0, &char_width);
        let label = &frame.segments[0].label;
        assert!(label.chars().count() < "Zwölfzeichenlang".chars().count());
        assert!(label.ends_with(ELLIPSIS));
        assert!(char_width(label) <= 80.0);
    }

    #[test]
    fn test_fitting_label_is_untouched() {
        let frame = render_frame(&labels(&["Kurz", "B"]), 0.0, 100.0, &char_width);
        assert_eq!(frame.segments[0].label, "Kurz");
    }

    #[test]
    fn test_truncation_accepts_overflow_at_one_char_plus_ellipsis() {
        // Kappe 8 Pixel: nicht mal „X…" (20 Pixel) passt → Überlauf akzeptiert.
        let frame = render_frame(&labels(&["XYZQ", "B"]), 0.0, 10.0, &char_width);
        let label = &frame.segments[0].label;
        assert_eq!(label.chars().count(), 2);
        assert!(label.starts_with('X'));
        assert!(label.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_hub_is_present_for_nonempty_wheel() {
        let frame = render_frame(&labels(&["A"]), 0.0, 200.0, &char_width);
        let hub = frame.hub.expect("Nabe erwartet");
        assert_relative_eq!(hub.radius, HUB_RADIUS);
        assert_eq!(hub.fill, HUB_FILL);
    }

    #[test]
    fn test_hsl_primary_colors() {
        let red = hsl_to_rgba(0.0, 1.0, 0.5);
        assert_relative_eq!(red[0], 1.0, epsilon = 1e-5);
        assert_relative_eq!(red[1], 0.0, epsilon = 1e-5);

        let green = hsl_to_rgba(120.0, 1.0, 0.5);
        assert_relative_eq!(green[1], 1.0, epsilon = 1e-5);

        let blue = hsl_to_rgba(240.0, 1.0, 0.5);
        assert_relative_eq!(blue[2], 1.0, epsilon = 1e-5);

        let white = hsl_to_rgba(77.0, 0.3, 1.0);
        assert_relative_eq!(white[0], 1.0, epsilon = 1e-5);
        assert_relative_eq!(white[1], 1.0, epsilon = 1e-5);
        assert_relative_eq!(white[2], 1.0, epsilon = 1e-5);
    }
}
