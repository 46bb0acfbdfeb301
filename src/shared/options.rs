//! Zentrale Konfiguration für den Bézier-Zeichner.
//!
//! `CanvasOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster & Zeichenbereich ───────────────────────────────────────

/// Fensterbreite in Pixeln.
pub const WINDOW_WIDTH: i32 = 1024;
/// Fensterhöhe in Pixeln.
pub const WINDOW_HEIGHT: i32 = 768;
/// Breite des inneren Zeichenrechtecks.
pub const RECT_WIDTH: i32 = 800;
/// Höhe des inneren Zeichenrechtecks.
pub const RECT_HEIGHT: i32 = 500;
/// Radius der Punkt-Marker (gleichzeitig Mindestabstand zum Rahmen).
pub const POINT_RADIUS: i32 = 4;

// ── Sweep ──────────────────────────────────────────────────────────

/// Anzahl der Parameter-Schritte für t ∈ [0, 1] (Schrittweite 0.0000008).
pub const SWEEP_SAMPLES: u64 = 1_250_000;
/// Obergrenze für `sweep_samples`; darüber dauert ein Durchgang Minuten.
pub const MAX_SWEEP_SAMPLES: u64 = 100_000_000;
/// Samples pro Frame im Fenster-Betrieb (0 = synchron am Stück).
pub const SAMPLES_PER_FRAME: u64 = 25_000;

// ── Fortschrittsbalken ─────────────────────────────────────────────

/// Glyph eines Fortschritts-Ticks.
pub const PROGRESS_TICK: &str = "==";
/// Breite der Fortschrittsklammer in Zeichen.
pub const PROGRESS_BRACKET_CHARS: usize = 42;

// ── Farben (RGBA) ──────────────────────────────────────────────────

/// Rahmenfarbe (Blau).
pub const FRAME_COLOR: [f32; 4] = [0.0, 0.733, 1.0, 1.0];
/// Textfarbe (Schwarz).
pub const TEXT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Punkt-Marker (Rot).
pub const POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Kurvenfarbe (Grün).
pub const CURVE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Hintergrundfarbe (Weiß), zugleich Farbe des Radier-Stifts.
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Schrift ────────────────────────────────────────────────────────

/// Schriftgröße für Titel, Hinweis und Hilfetext.
pub const TITLE_FONT_SIZE: f32 = 18.0;
/// Schriftgröße für Punkt-Nummern.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Schriftgröße der Fortschrittsanzeige.
pub const PROGRESS_FONT_SIZE: f32 = 16.0;
/// Verhältnis Glyph-Breite zu Schriftgröße (Monospace).
pub const GLYPH_WIDTH_RATIO: f32 = 0.6;
/// Verhältnis Zeilenhöhe zu Schriftgröße.
pub const LINE_HEIGHT_RATIO: f32 = 1.25;

/// Umgebungsvariable, die optional auf eine TOML-Datei mit Optionen zeigt.
pub const CONFIG_ENV_VAR: &str = "BEZIER_CANVAS_CONFIG";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Zeichner-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    // ── Geometrie ──────────────────────────────────────────────
    /// Fenstergröße [Breite, Höhe]
    pub window_size: [i32; 2],
    /// Größe des inneren Zeichenrechtecks [Breite, Höhe]
    pub rect_size: [i32; 2],
    /// Radius der Punkt-Marker
    pub point_radius: i32,

    // ── Sweep ──────────────────────────────────────────────────
    /// Anzahl der Parameter-Schritte
    pub sweep_samples: u64,
    /// Samples pro Frame im Fenster-Betrieb
    pub samples_per_frame: u64,

    // ── Fortschritt ────────────────────────────────────────────
    /// Tick-Glyph
    pub progress_tick: String,
    /// Klammerbreite in Zeichen
    pub progress_bracket_chars: usize,

    // ── Farben ─────────────────────────────────────────────────
    pub frame_color: [f32; 4],
    pub text_color: [f32; 4],
    pub point_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub background_color: [f32; 4],

    // ── Schrift ────────────────────────────────────────────────
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub progress_font_size: f32,
    pub glyph_width_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            window_size: [WINDOW_WIDTH, WINDOW_HEIGHT],
            rect_size: [RECT_WIDTH, RECT_HEIGHT],
            point_radius: POINT_RADIUS,

            sweep_samples: SWEEP_SAMPLES,
            samples_per_frame: SAMPLES_PER_FRAME,

            progress_tick: PROGRESS_TICK.to_string(),
            progress_bracket_chars: PROGRESS_BRACKET_CHARS,

            frame_color: FRAME_COLOR,
            text_color: TEXT_COLOR,
            point_color: POINT_COLOR,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,

            title_font_size: TITLE_FONT_SIZE,
            label_font_size: LABEL_FONT_SIZE,
            progress_font_size: PROGRESS_FONT_SIZE,
            glyph_width_ratio: GLYPH_WIDTH_RATIO,
            line_height_ratio: LINE_HEIGHT_RATIO,
        }
    }
}

impl CanvasOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!(
                    "Optionen-Datei {} nicht lesbar, verwende Standardwerte: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Lädt Optionen nur dann aus einer Datei, wenn `BEZIER_CANVAS_CONFIG` gesetzt ist.
    pub fn load_from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_file(std::path::Path::new(&path)),
            None => Self::default(),
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft Werte, ohne die kein sinnvoller Zeichenbereich existiert.
    pub fn validate(&self) -> anyhow::Result<()> {
        let [win_w, win_h] = self.window_size;
        let [rect_w, rect_h] = self.rect_size;
        anyhow::ensure!(
            rect_w > 0 && rect_h > 0 && rect_w <= win_w && rect_h <= win_h,
            "Zeichenrechteck {}x{} passt nicht in Fenster {}x{}",
            rect_w,
            rect_h,
            win_w,
            win_h
        );
        anyhow::ensure!(self.point_radius >= 0, "point_radius darf nicht negativ sein");
        anyhow::ensure!(
            (1..=MAX_SWEEP_SAMPLES).contains(&self.sweep_samples),
            "sweep_samples muss zwischen 1 und {} liegen (ist {})",
            MAX_SWEEP_SAMPLES,
            self.sweep_samples
        );
        for (name, value) in [
            ("title_font_size", self.title_font_size),
            ("label_font_size", self.label_font_size),
            ("progress_font_size", self.progress_font_size),
            ("glyph_width_ratio", self.glyph_width_ratio),
            ("line_height_ratio", self.line_height_ratio),
        ] {
            anyhow::ensure!(value > 0.0, "{} muss > 0 sein (ist {})", name, value);
        }
        anyhow::ensure!(
            !self.progress_tick.is_empty(),
            "progress_tick darf nicht leer sein"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_window_layout() {
        let opts = CanvasOptions::default();
        assert_eq!(opts.window_size, [1024, 768]);
        assert_eq!(opts.rect_size, [800, 500]);
        assert_eq!(opts.point_radius, 4);
        assert_eq!(opts.sweep_samples, 1_250_000);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = CanvasOptions::from_toml_str("sweep_samples = 1000\n").expect("gültiges TOML");
        assert_eq!(opts.sweep_samples, 1000);
        assert_eq!(opts.rect_size, [RECT_WIDTH, RECT_HEIGHT]);
        assert_eq!(opts.progress_tick, "==");
    }

    #[test]
    fn test_rect_larger_than_window_is_rejected() {
        let err = CanvasOptions::from_toml_str("rect_size = [2000, 500]\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_sweep_samples_above_limit_are_rejected() {
        let too_many = format!("sweep_samples = {}\n", MAX_SWEEP_SAMPLES + 1);
        let err = CanvasOptions::from_toml_str(&too_many);
        assert!(err.is_err());
        let err = CanvasOptions::from_toml_str("sweep_samples = 0\n");
        assert!(err.is_err());
        let ok = CanvasOptions::from_toml_str(&format!("sweep_samples = {MAX_SWEEP_SAMPLES}\n"));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_non_positive_text_metrics_are_rejected() {
        for toml in [
            "title_font_size = 0.0\n",
            "label_font_size = -1.0\n",
            "progress_font_size = 0.0\n",
            "glyph_width_ratio = 0.0\n",
            "line_height_ratio = -0.5\n",
        ] {
            assert!(CanvasOptions::from_toml_str(toml).is_err(), "{toml}");
        }
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut opts = CanvasOptions::default();
        opts.samples_per_frame = 0;
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back = CanvasOptions::from_toml_str(&text).expect("parsebar");
        assert_eq!(back, opts);
    }
}
