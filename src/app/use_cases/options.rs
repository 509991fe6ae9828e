//! Use-Case: Laufzeit-Optionen übernehmen und persistieren.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen (geklemmt) und speichert sie in der Konfigurationsdatei.
///
/// Standard-Kopien und -Deckkraft wirken erst beim nächsten Start, die
/// Schieberegler behalten ihre aktuellen Werte.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
