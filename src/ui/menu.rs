//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                let has_options = !state.wheel.options.is_empty();

                if ui
                    .add_enabled(has_options, egui::Button::new("Rad speichern... (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveWheelRequested);
                    ui.close();
                }

                if ui.button("Rad laden... (Ctrl+O)").clicked() {
                    events.push(AppIntent::LoadWheelRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let can_reset = !state.is_spinning() && state.wheel.rotation != 0.0;

                if ui
                    .add_enabled(can_reset, egui::Button::new("Rotation zurücksetzen"))
                    .clicked()
                {
                    events.push(AppIntent::ResetRotationRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
