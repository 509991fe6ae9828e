//! Zentrale Konfiguration für den MoveEffect-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte sind prozessweite Tuning-Parameter der Selektion.

use serde::{Deserialize, Serialize};

// ── Selektion / Snap ────────────────────────────────────────────────

/// Radius des Startpunkt-Markers in Pixeln.
pub const INITIAL_CIRCLE_RADIUS: f32 = 8.0;
/// Halbe Kantenlänge der Box für den Lazy-Match (2 × Marker-Radius).
pub const INTERSECT_DEVIATION: f32 = INITIAL_CIRCLE_RADIUS * 2.0;
/// Maximaler Abstand zum Startpunkt, ab dem ein Auto-Schließen versucht wird.
pub const SNAP_DISTANCE: f32 = INITIAL_CIRCLE_RADIUS * 5.0;
/// Mindestfläche (Durchschnittsformel) für ein Auto-Schließen.
pub const MIN_ALLOWED_SNAP_AREA: f32 = 30.0;

// ── Wiederholung ────────────────────────────────────────────────────

/// Minimale Anzahl Kopien.
pub const MIN_REP_COUNT: u32 = 3;
/// Maximale Anzahl Kopien.
pub const MAX_REP_COUNT: u32 = 50;
/// Standard-Anzahl Kopien.
pub const DEFAULT_REP_COUNT: u32 = 7;

// ── Deckkraft ───────────────────────────────────────────────────────

/// Minimaler Alpha-Wert der Kopien (8-Bit-Skala, 255 = opak).
pub const MIN_ALPHA: u8 = 1;
/// Maximaler Alpha-Wert der Kopien.
pub const MAX_ALPHA: u8 = 100;
/// Standard-Alpha der Kopien.
pub const DEFAULT_ALPHA: u8 = 47;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke des Selektionspfads in Pixeln.
pub const PATH_LINE_WIDTH: f32 = 9.0;
/// Farbe des Selektionspfads (RGBA: Grau).
pub const PATH_LINE_COLOR: [f32; 4] = [0.53, 0.53, 0.53, 1.0];
/// Farbe des Startpunkt-Markers (RGBA: Weiß).
pub const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Export ──────────────────────────────────────────────────────────

/// JPEG-Qualität beim Speichern des zusammengesetzten Bildes.
pub const JPEG_QUALITY: u8 = 80;

/// Klemmt einen Host-Wert auf `[MIN_REP_COUNT, MAX_REP_COUNT]` (nie 0).
pub fn clamp_repeat_count(value: i32) -> u32 {
    value.clamp(MIN_REP_COUNT as i32, MAX_REP_COUNT as i32) as u32
}

/// Klemmt einen Host-Wert auf `[MIN_ALPHA, MAX_ALPHA]`.
pub fn clamp_alpha(value: i32) -> u8 {
    value.clamp(MIN_ALPHA as i32, MAX_ALPHA as i32) as u8
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `move_effect_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Wiederholung ────────────────────────────────────────────
    /// Anzahl Kopien beim Laden eines Bildes
    pub default_repeat_count: u32,
    /// Alpha der Kopien beim Laden eines Bildes
    pub default_alpha: u8,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke des Selektionspfads
    pub path_line_width: f32,
    /// Farbe des Selektionspfads (RGBA)
    pub path_line_color: [f32; 4],
    /// Farbe des Startpunkt-Markers (RGBA)
    pub marker_color: [f32; 4],
    /// Abstand des Bildes zum Viewport-Rand in Pixeln
    #[serde(default = "default_viewport_padding")]
    pub viewport_padding: f32,

    // ── Export ──────────────────────────────────────────────────
    /// JPEG-Qualität (1–100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_repeat_count: DEFAULT_REP_COUNT,
            default_alpha: DEFAULT_ALPHA,
            path_line_width: PATH_LINE_WIDTH,
            path_line_color: PATH_LINE_COLOR,
            marker_color: MARKER_COLOR,
            viewport_padding: default_viewport_padding(),
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

/// Serde-Default für `viewport_padding` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_viewport_padding() -> f32 {
    8.0
}

/// Serde-Default für `jpeg_quality`.
fn default_jpeg_quality() -> u8 {
    JPEG_QUALITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("move_effect_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("move_effect_editor.toml")
    }

    /// Klemmt alle Werte in ihre gültigen Bereiche (handeditierte TOML-Dateien).
    pub fn sanitized(mut self) -> Self {
        self.default_repeat_count = clamp_repeat_count(self.default_repeat_count as i32);
        self.default_alpha = clamp_alpha(self.default_alpha as i32);
        self.path_line_width = self.path_line_width.clamp(1.0, 40.0);
        self.viewport_padding = self.viewport_padding.clamp(0.0, 200.0);
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_count_is_clamped_and_never_zero() {
        assert_eq!(clamp_repeat_count(0), MIN_REP_COUNT);
        assert_eq!(clamp_repeat_count(-12), MIN_REP_COUNT);
        assert_eq!(clamp_repeat_count(10), 10);
        assert_eq!(clamp_repeat_count(500), MAX_REP_COUNT);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(clamp_alpha(0), MIN_ALPHA);
        assert_eq!(clamp_alpha(47), 47);
        assert_eq!(clamp_alpha(255), MAX_ALPHA);
    }

    #[test]
    fn snap_constants_follow_marker_radius() {
        assert_eq!(INTERSECT_DEVIATION, 16.0);
        assert_eq!(SNAP_DISTANCE, 40.0);
    }

    #[test]
    fn toml_roundtrip_keeps_options() {
        let mut opts = EditorOptions::default();
        opts.default_repeat_count = 12;
        opts.jpeg_quality = 95;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn sanitized_clamps_hand_edited_values() {
        let opts = EditorOptions {
            default_repeat_count: 0,
            default_alpha: 250,
            jpeg_quality: 0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.default_repeat_count, MIN_REP_COUNT);
        assert_eq!(opts.default_alpha, MAX_ALPHA);
        assert_eq!(opts.jpeg_quality, 1);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let text = r#"
default_repeat_count = 9
default_alpha = 20
path_line_width = 4.0
path_line_color = [1.0, 0.0, 0.0, 1.0]
marker_color = [1.0, 1.0, 1.0, 1.0]
"#;
        let opts: EditorOptions = toml::from_str(text).expect("Deserialisierung");
        assert_eq!(opts.jpeg_quality, JPEG_QUALITY);
        assert_eq!(opts.default_repeat_count, 9);
    }
}
