//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Während der Kollaps-Animation werden Zeichen-Intents verworfen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let collapsing = state.is_collapsing();
    let drawing = state.segments.is_drawing() && !collapsing;

    match intent {
        // === Zeichnen ===
        AppIntent::PrimaryActivation { .. } if collapsing => vec![],
        AppIntent::PrimaryActivation { pos } if drawing => {
            vec![AppCommand::FinishSegment { pos }]
        }
        AppIntent::PrimaryActivation { pos } => vec![AppCommand::BeginSegment { pos }],
        AppIntent::PointerMoved { pos } if drawing => {
            vec![AppCommand::UpdateInProgressEnd { pos }]
        }
        AppIntent::PointerMoved { .. } => vec![],
        AppIntent::SecondaryActivation { .. } | AppIntent::CancelDrawingRequested if drawing => {
            vec![AppCommand::CancelInProgressSegment]
        }
        AppIntent::SecondaryActivation { .. } | AppIntent::CancelDrawingRequested => vec![],

        // === Kollaps ===
        AppIntent::CollapseRequested => vec![AppCommand::StartCollapse],
        AppIntent::CollapseTickElapsed => vec![AppCommand::AdvanceCollapse],

        // === Dialoge & Anwendungssteuerung ===
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
