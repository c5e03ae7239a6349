//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OptionSubmitted { label } => vec![AppCommand::AddOption { label }],
        AppIntent::OptionRemoveRequested { index } => vec![AppCommand::RemoveOption { index }],
        AppIntent::ClearAllRequested => vec![AppCommand::OpenClearConfirmDialog],
        AppIntent::ClearConfirmed => vec![
            AppCommand::ClearOptions,
            AppCommand::CloseClearConfirmDialog,
        ],
        AppIntent::ClearCancelled => vec![AppCommand::CloseClearConfirmDialog],

        AppIntent::SpinRequested { now } => vec![AppCommand::StartSpin { now }],
        AppIntent::AnimationTick { now } => vec![AppCommand::AdvanceSpin { now }],
        AppIntent::ResetRotationRequested => vec![AppCommand::ResetRotation],

        AppIntent::SaveWheelRequested => vec![AppCommand::OpenSaveDialog],
        AppIntent::SaveWheelConfirmed { name } => vec![AppCommand::SaveSnapshot { name }],
        AppIntent::SaveWheelCancelled => vec![AppCommand::CloseSaveDialog],
        AppIntent::LoadWheelRequested => vec![AppCommand::OpenLoadDialog],
        AppIntent::LoadWheelSelected { name } => vec![AppCommand::LoadSnapshot { name }],
        AppIntent::DeleteSavedWheelRequested { name } => {
            vec![AppCommand::DeleteSnapshot { name }]
        }
        AppIntent::LoadWheelCancelled => vec![AppCommand::CloseLoadDialog],

        AppIntent::OptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
        AppIntent::OptionsDialogClosed => vec![AppCommand::CloseOptionsDialog],

        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
