use crate::app::{AppIntent, UiState};

/// Zeigt den Speichern-Dialog (Rad-Name) als modales Fenster.
pub fn show_save_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.save_dialog.visible {
        return events;
    }

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Rad speichern")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut ui_state.save_dialog.name);
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let name_valid = !ui_state.save_dialog.name.trim().is_empty();

                ui.add_enabled_ui(name_valid, |ui| {
                    if ui.button("Speichern").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::SaveWheelConfirmed {
            name: ui_state.save_dialog.name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::SaveWheelCancelled);
    }

    events
}
