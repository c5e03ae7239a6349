//! Optionen-Dialog für Animation und Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Animation ───────────────────────────────────────
            ui.collapsing("Animation", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Spin-Dauer (s):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.spin_duration_secs)
                                .range(0.5..=15.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            // ── Darstellung ─────────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Rand (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.wheel_margin_px)
                                .range(0.0..=100.0)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Schrift min (pt):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.label_font_min_pt)
                                .range(6.0..=24.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Schrift max (pt):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.label_font_max_pt)
                                .range(8.0..=48.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.show_tooltip, "Tooltip unter dem Mauszeiger")
                    .changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::OptionsResetRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::OptionsDialogClosed);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsApplied { options: opts });
    }

    events
}
