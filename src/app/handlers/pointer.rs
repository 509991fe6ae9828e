//! Handler für Zeigerereignisse und Selektions-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Pointer-Down im Bild.
pub fn down(state: &mut AppState, pos: Vec2) {
    use_cases::selection::pointer_down(state, pos);
}

/// Pointer-Bewegung im Bild.
pub fn move_to(state: &mut AppState, pos: Vec2) {
    use_cases::selection::pointer_move(state, pos);
}

/// Pointer-Up im Bild.
pub fn up(state: &mut AppState, pos: Vec2) {
    use_cases::selection::pointer_up(state, pos);
}

/// Verwirft die Selektion.
pub fn reset(state: &mut AppState) {
    use_cases::selection::reset_selection(state);
}

/// Setzt die Anzahl Kopien.
pub fn set_repeat_count(state: &mut AppState, value: i32) {
    use_cases::selection::set_repeat_count(state, value);
}

/// Setzt die Deckkraft der Kopien.
pub fn set_overlay_alpha(state: &mut AppState, value: i32) {
    use_cases::selection::set_overlay_alpha(state, value);
}
