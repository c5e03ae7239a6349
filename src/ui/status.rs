//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Optionen: {}", state.option_count()));

            ui.separator();

            ui.label(format!(
                "Rotation: {:.1}°",
                state.wheel.rotation.to_degrees()
            ));

            ui.separator();

            if state.is_spinning() {
                ui.label("Dreht...");
            } else {
                ui.label("Bereit");
            }

            if let Some(ref result) = state.ui.last_result {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Ergebnis: {}", result))
                        .color(egui::Color32::LIGHT_GREEN),
                );
            }

            // Statusnachricht (Validierung, Spin-Ablehnung, Store-Fehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
