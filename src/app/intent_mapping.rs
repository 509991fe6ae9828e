//! Mapping von UI-Intents auf mutierende App-Commands.

use super::selection::SelectionState;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenImageRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::ImageFileSelected { path } => vec![AppCommand::LoadImage { path }],
        AppIntent::SaveRequested => vec![AppCommand::RequestSaveDialog],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveImage { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetSelectionRequested => vec![AppCommand::ResetSelection],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { pos, inside_image } => {
            if delivers_pointer(state, inside_image) {
                vec![AppCommand::PointerDown { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { pos, inside_image } => {
            if delivers_pointer(state, inside_image) {
                vec![AppCommand::PointerMove { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pos, inside_image } => {
            if delivers_pointer(state, inside_image) {
                vec![AppCommand::PointerUp { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::RepeatCountChanged { value } => vec![AppCommand::SetRepeatCount { value }],
        AppIntent::OverlayAlphaChanged { value } => vec![AppCommand::SetOverlayAlpha { value }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::ClearStatusMessage],
    }
}

/// Zeigerereignisse außerhalb des Bildes werden verworfen,
/// außer während die Selektion gezogen wird.
fn delivers_pointer(state: &AppState, inside_image: bool) -> bool {
    inside_image || state.selection.state() == SelectionState::SelectionDragging
}
