//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Optionsliste ===
            AppCommand::AddOption { label } => handlers::editing::add_option(state, &label),
            AppCommand::RemoveOption { index } => handlers::editing::remove_option(state, index),
            AppCommand::ClearOptions => handlers::editing::clear_options(state),
            AppCommand::OpenClearConfirmDialog => handlers::dialog::open_clear_confirm(state),
            AppCommand::CloseClearConfirmDialog => handlers::dialog::close_clear_confirm(state),

            // === Spin ===
            AppCommand::StartSpin { now } => handlers::spin::start_spin(state, now),
            AppCommand::AdvanceSpin { now } => handlers::spin::advance_spin(state, now),
            AppCommand::ResetRotation => handlers::spin::reset_rotation(state),

            // === Snapshots ===
            AppCommand::OpenSaveDialog => handlers::dialog::open_save_dialog(state),
            AppCommand::CloseSaveDialog => handlers::dialog::close_save_dialog(state),
            AppCommand::SaveSnapshot { name } => handlers::snapshot::save_snapshot(state, &name),
            AppCommand::OpenLoadDialog => handlers::dialog::open_load_dialog(state),
            AppCommand::CloseLoadDialog => handlers::dialog::close_load_dialog(state),
            AppCommand::LoadSnapshot { name } => handlers::snapshot::load_snapshot(state, &name),
            AppCommand::DeleteSnapshot { name } => {
                handlers::snapshot::delete_snapshot(state, &name)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
