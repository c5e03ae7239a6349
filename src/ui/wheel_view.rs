//! Zentraler Rad-Viewport.
//!
//! Konsumiert den `WheelFrame` der Geometrie und zeichnet ihn über den
//! egui-Painter: Sektor-Füllung, rotierte Labels, Nabe. Der Hover-Tooltip
//! läuft unabhängig vom Spin-Zustand über den Hit-Test.

use crate::app::AppState;
use crate::core::geometry::{self, HubMarker, WheelFrame};
use crate::core::{render_frame, segment_at};

/// Rendert den Rad-Viewport inklusive Hover-Tooltip.
pub fn render_wheel_view(ctx: &egui::Context, state: &AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = (rect.width().min(rect.height()) / 2.0
                - state.options.wheel_margin_px)
                .max(1.0);

            if state.wheel.options.is_empty() {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "Keine Optionen. Links eine Option hinzufügen",
                    egui::FontId::proportional(20.0),
                    egui::Color32::GRAY,
                );
                return;
            }

            let font_id = egui::FontId::proportional(state.options.label_font_size(radius));
            let label_color = color32(geometry::LABEL_COLOR);
            let measure = |text: &str| {
                painter
                    .layout_no_wrap(text.to_owned(), font_id.clone(), label_color)
                    .size()
                    .x
            };

            let frame = render_frame(
                &state.wheel.options,
                state.wheel.rotation,
                radius,
                &measure,
            );

            draw_segments(&painter, center, radius, &frame);
            draw_labels(&painter, center, &frame, &font_id, label_color);
            if let Some(hub) = frame.hub {
                draw_hub(&painter, center, &hub);
            }

            if state.options.show_tooltip {
                show_segment_tooltip(state, center, radius, response);
            }
        });
}

/// Zeichnet die Sektor-Füllungen.
/// Der Vollkreis (eine Option) wird separat gezeichnet — der Polygon-Fächer
/// ist nur für echte Sektoren bis π konvex.
fn draw_segments(painter: &egui::Painter, center: egui::Pos2, radius: f32, frame: &WheelFrame) {
    if let [segment] = frame.segments.as_slice() {
        painter.circle_filled(center, radius, color32(segment.fill));
        return;
    }

    for segment in &frame.segments {
        let points = wedge_points(center, radius, segment.start_angle, segment.end_angle);
        painter.add(egui::Shape::convex_polygon(
            points,
            color32(segment.fill),
            egui::Stroke::NONE,
        ));
    }
}

/// Punkt-Fächer eines Sektors: Zentrum plus Bogen in ~4°-Schritten.
fn wedge_points(
    center: egui::Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
) -> Vec<egui::Pos2> {
    let span = end_angle - start_angle;
    let steps = ((span.to_degrees() / 4.0).ceil() as usize).max(2);

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start_angle + span * step as f32 / steps as f32;
        points.push(center + egui::vec2(angle.cos(), angle.sin()) * radius);
    }
    points
}

/// Zeichnet die Labels entlang der Segment-Halbierenden, nach außen lesend.
fn draw_labels(
    painter: &egui::Painter,
    center: egui::Pos2,
    frame: &WheelFrame,
    font_id: &egui::FontId,
    color: egui::Color32,
) {
    for segment in &frame.segments {
        if segment.label.is_empty() {
            continue;
        }

        let galley = painter.layout_no_wrap(segment.label.clone(), font_id.clone(), color);
        let anchor = center + egui::vec2(segment.label_anchor.x, segment.label_anchor.y);

        // Vertikal auf die Halbierende zentrieren (Baseline-Mitte),
        // halbe Galley-Höhe senkrecht zur Leserichtung.
        let half_height = galley.size().y * 0.5;
        let pos = anchor
            + egui::vec2(segment.label_angle.sin(), -segment.label_angle.cos()) * half_height;

        painter.add(
            egui::epaint::TextShape::new(pos, galley, color).with_angle(segment.label_angle),
        );
    }
}

/// Zeichnet die Nabe zuletzt, über den Segmenten.
fn draw_hub(painter: &egui::Painter, center: egui::Pos2, hub: &HubMarker) {
    painter.circle(
        center,
        hub.radius,
        color32(hub.fill),
        egui::Stroke::new(hub.stroke_width, color32(hub.stroke)),
    );
}

/// Zeigt den Tooltip für das Segment unter dem Mauszeiger.
fn show_segment_tooltip(
    state: &AppState,
    center: egui::Pos2,
    radius: f32,
    response: egui::Response,
) {
    let Some(pointer) = response.hover_pos() else {
        return;
    };

    let index = segment_at(
        glam::Vec2::new(pointer.x, pointer.y),
        glam::Vec2::new(center.x, center.y),
        radius,
        state.wheel.option_count(),
        state.wheel.rotation,
    );

    if let Some(label) = index.and_then(|i| state.wheel.options.get(i)) {
        response.on_hover_text(label.clone());
    }
}

/// Konvertiert eine RGBA-Farbe des Kerns in `egui::Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0).round() as u8,
        (rgba[1] * 255.0).round() as u8,
        (rgba[2] * 255.0).round() as u8,
        (rgba[3] * 255.0).round() as u8,
    )
}
