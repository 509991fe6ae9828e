//! Use-Case: Zeigerereignisse und Einstellungen der Selektions-Engine.

use crate::app::selection::SelectionNotification;
use crate::app::AppState;
use crate::core::Point;

/// Leitet einen Pointer-Down an die Engine weiter.
pub fn pointer_down(state: &mut AppState, pos: Point) {
    state.selection.pointer_down(pos);
    sync_notifications(state);
}

/// Leitet eine Pointer-Bewegung an die Engine weiter.
pub fn pointer_move(state: &mut AppState, pos: Point) {
    state.selection.pointer_move(pos);
    sync_notifications(state);
}

/// Leitet einen Pointer-Up an die Engine weiter.
pub fn pointer_up(state: &mut AppState, pos: Point) {
    state.selection.pointer_up(pos);
    sync_notifications(state);
}

/// Verwirft die aktuelle Selektion.
pub fn reset_selection(state: &mut AppState) {
    state.selection.reset();
    sync_notifications(state);
}

/// Setzt die Anzahl Kopien.
pub fn set_repeat_count(state: &mut AppState, value: i32) {
    state.selection.set_repeat_count(value);
}

/// Setzt die Deckkraft der Kopien.
pub fn set_overlay_alpha(state: &mut AppState, value: i32) {
    state.selection.set_overlay_alpha(value);
}

/// Überträgt ausstehende Engine-Benachrichtigungen in den UI-State.
///
/// Das Einstellungs-Panel ist genau zwischen `AreaSelected` und
/// `AreaReleased` sichtbar.
pub fn sync_notifications(state: &mut AppState) {
    for notification in state.selection.drain_notifications() {
        log::debug!("Benachrichtigung: {:?}", notification);
        state.ui.show_selection_settings = match notification {
            SelectionNotification::AreaSelected => true,
            SelectionNotification::AreaReleased => false,
        };
    }
}
