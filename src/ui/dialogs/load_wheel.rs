use crate::app::{AppIntent, UiState};

/// Zeigt den Laden-Dialog mit allen gespeicherten Rädern.
pub fn show_load_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.load_dialog.visible {
        return events;
    }

    egui::Window::new("Rad laden")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            if ui_state.load_dialog.wheels.is_empty() {
                ui.label("Keine gespeicherten Räder");
            } else {
                egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                    for name in &ui_state.load_dialog.wheels {
                        ui.horizontal(|ui| {
                            if ui.button("Laden").clicked() {
                                events.push(AppIntent::LoadWheelSelected { name: name.clone() });
                            }
                            if ui.small_button("✖").clicked() {
                                events.push(AppIntent::DeleteSavedWheelRequested {
                                    name: name.clone(),
                                });
                            }
                            ui.label(name);
                        });
                    }
                });
            }

            ui.add_space(10.0);

            if ui.button("Schließen").clicked() {
                events.push(AppIntent::LoadWheelCancelled);
            }
        });

    events
}
