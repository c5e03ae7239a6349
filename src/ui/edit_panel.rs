//! Seitenpanel zur Pflege der Optionsliste.

use crate::app::{AppIntent, AppState};

/// Rendert das Options-Panel (Eingabe + Liste) und gibt Events zurück.
pub fn render_edit_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("edit_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Optionen");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.ui.option_input)
                        .hint_text("Neue Option")
                        .desired_width(150.0),
                );

                let enter_submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("+").clicked() || enter_submitted {
                    events.push(AppIntent::OptionSubmitted {
                        label: state.ui.option_input.clone(),
                    });
                    // Fokus behalten, damit mehrere Optionen zügig
                    // nacheinander eingegeben werden können.
                    response.request_focus();
                }
            });

            ui.add_space(8.0);
            ui.separator();

            if state.wheel.options.is_empty() {
                ui.label("Noch keine Optionen");
            } else {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (index, option) in state.wheel.options.iter().enumerate() {
                        ui.horizontal(|ui| {
                            if ui.small_button("✖").clicked() {
                                events.push(AppIntent::OptionRemoveRequested { index });
                            }
                            ui.label(option);
                        });
                    }
                });

                ui.add_space(6.0);
                ui.label(format!("{} Optionen", state.wheel.option_count()));
            }
        });

    events
}
