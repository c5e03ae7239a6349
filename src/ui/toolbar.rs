//! Toolbar mit Spin- und Lösch-Aktion.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let spinning = state.is_spinning();
    let option_count = state.option_count();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Der Button ist reine UI-Bequemlichkeit — der Spin-Controller
            // lehnt ein zweites Drehen ohnehin mit `AlreadySpinning` ab.
            let spin_label = if spinning {
                "Dreht..."
            } else {
                "Drehen! (Leertaste)"
            };
            let can_spin = !spinning && option_count >= 2;

            if ui
                .add_enabled(can_spin, egui::Button::new(spin_label))
                .clicked()
            {
                events.push(AppIntent::SpinRequested {
                    now: ctx.input(|i| i.time),
                });
            }

            if option_count > 0 && option_count < 2 {
                ui.label("Mindestens 2 Optionen nötig");
            }

            ui.separator();

            if ui
                .add_enabled(option_count > 0, egui::Button::new("Alle löschen..."))
                .clicked()
            {
                events.push(AppIntent::ClearAllRequested);
            }
        });
    });

    events
}
