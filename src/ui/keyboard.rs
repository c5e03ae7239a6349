//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Solange ein Textfeld den Fokus hat, gehören die Tasten dem Feld.
    if ctx.wants_keyboard_input() {
        return events;
    }

    let (modifiers, space_pressed, s_pressed, o_pressed, now) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::O),
            i.time,
        )
    });

    // Leertaste: Rad drehen
    if space_pressed && modifiers.is_none() {
        events.push(AppIntent::SpinRequested { now });
    }

    // Ctrl+S (Rad speichern), Ctrl+O (Rad laden)
    if modifiers.command && s_pressed {
        events.push(AppIntent::SaveWheelRequested);
    }

    if modifiers.command && o_pressed {
        events.push(AppIntent::LoadWheelRequested);
    }

    events
}
