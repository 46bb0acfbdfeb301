//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::CurveSession;
use crate::render::{CanvasLayout, CurveRenderJob, RenderReport, SweepSettings};
use crate::shared::CanvasOptions;
use std::time::Instant;

/// Modus des Hauptfensters. Genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keine Punkte gesammelt
    #[default]
    Idle,
    /// Mindestens ein Punkt gesammelt
    Collecting,
    /// Kurve wird gezeichnet, Eingaben werden verworfen
    Rendering,
    /// Modales Hilfe-Overlay, Hauptmodus ruht
    HelpOverlay,
}

/// Einmal-Hinweis "Press <h> for help".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintState {
    /// Noch nie gezeigt (vor dem ersten Expose)
    #[default]
    Pending,
    /// Sichtbar im Zeichenbereich
    Visible,
    /// Entfernt, erscheint nie wieder
    Consumed,
}

/// Laufender Render-Durchgang im Fenster-Betrieb.
pub struct PendingRender {
    pub job: CurveRenderJob,
    pub started: Instant,
    pub point_count: usize,
}

/// Zentraler Anwendungszustand, einmal beim Start erzeugt.
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: CanvasOptions,
    /// Aus den Optionen abgeleitete Positionen
    pub layout: CanvasLayout,
    /// Sweep-Parameter
    pub sweep: SweepSettings,
    /// Gesammelte Kontrollpunkte
    pub session: CurveSession,
    /// Aktueller Modus
    pub mode: UiMode,
    /// Während des Hilfe-Overlays ruhender Modus
    pub suspended_mode: Option<UiMode>,
    /// Zustand des Einmal-Hinweises
    pub hint: HintState,
    /// Noch nicht abgeschlossener Render-Durchgang
    pub pending_render: Option<PendingRender>,
    /// Ergebnis des letzten abgeschlossenen Durchgangs
    pub last_render: Option<RenderReport>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(CanvasOptions::default())
    }

    /// Erstellt den Startzustand mit den gegebenen Optionen.
    pub fn with_options(options: CanvasOptions) -> Self {
        Self {
            layout: CanvasLayout::from_options(&options),
            sweep: SweepSettings::from_options(&options),
            session: CurveSession::from_options(&options),
            mode: UiMode::Idle,
            suspended_mode: None,
            hint: HintState::Pending,
            pending_render: None,
            last_render: None,
            command_log: CommandLog::new(),
            should_exit: false,
            options,
        }
    }

    /// Modus, der sich allein aus der Session ergibt.
    pub fn primary_mode(&self) -> UiMode {
        if self.session.is_empty() {
            UiMode::Idle
        } else {
            UiMode::Collecting
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.pending_render.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
