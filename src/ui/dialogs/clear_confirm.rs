use crate::app::{AppIntent, AppState};

/// Zeigt den Bestätigungsdialog „Alle Optionen löschen" als modales Fenster.
pub fn show_clear_confirm_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_clear_confirm {
        return events;
    }

    egui::Window::new("Alle Optionen löschen?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            ui.label(format!(
                "Sollen wirklich alle {} Optionen gelöscht werden?",
                state.option_count()
            ));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Löschen").clicked() {
                    events.push(AppIntent::ClearConfirmed);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::ClearCancelled);
                }
            });
        });

    events
}
