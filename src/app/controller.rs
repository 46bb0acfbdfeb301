//! Application Controller für zentrale Event-Verarbeitung.

use super::handlers;
use super::{AppCommand, AppState, WindowEvent};
use crate::render::RenderSurface;

/// Orchestriert Fenster-Events und Handler auf den AppState.
///
/// Ohne Schritt-Budget läuft ein Render-Durchgang synchron innerhalb von
/// `StartRender` durch. Mit Budget führt `advance_render` pro Frame höchstens
/// so viele Abtastschritte aus.
#[derive(Debug, Default)]
pub struct AppController {
    frame_budget: Option<u64>,
}

impl AppController {
    /// Erstellt einen Controller mit synchronem Render-Durchgang.
    pub fn new() -> Self {
        Self { frame_budget: None }
    }

    /// Erstellt einen Controller, der Render-Durchgänge auf Frames verteilt.
    /// Ein Budget von 0 bedeutet synchron.
    pub fn with_frame_budget(samples_per_frame: u64) -> Self {
        Self {
            frame_budget: (samples_per_frame > 0).then_some(samples_per_frame),
        }
    }

    /// Verarbeitet ein Fenster-Event über Event->Command Mapping.
    pub fn handle_event<S: RenderSurface>(
        &mut self,
        state: &mut AppState,
        surface: &mut S,
        event: &WindowEvent,
    ) -> anyhow::Result<()> {
        let commands = self.map_event_to_commands(state, event);
        for command in commands {
            self.handle_command(state, surface, command)?;
        }

        Ok(())
    }

    fn map_event_to_commands(&self, state: &AppState, event: &WindowEvent) -> Vec<AppCommand> {
        super::intent_mapping::map_event_to_commands(state, event)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<S: RenderSurface>(
        &mut self,
        state: &mut AppState,
        surface: &mut S,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        state.command_log.record(&command);

        match command {
            // === Rahmen & Hinweis ===
            AppCommand::RedrawChrome => handlers::view::redraw_chrome(state, surface),
            AppCommand::DismissHint => handlers::view::dismiss_hint(state, surface),
            AppCommand::ClearCurve => handlers::view::clear_curve(state, surface),

            // === Punkte ===
            AppCommand::AddPoint { x, y } => handlers::editing::add_point(state, surface, x, y),

            // === Kurve ===
            AppCommand::StartRender => {
                handlers::curve::start(state, surface)?;
                if self.frame_budget.is_none() {
                    handlers::curve::advance(state, surface, u64::MAX);
                }
            }
            AppCommand::CancelRender => handlers::curve::cancel(state),

            // === Hilfe & Steuerung ===
            AppCommand::OpenHelp => handlers::dialog::open_help(state, surface),
            AppCommand::RedrawHelp => handlers::dialog::redraw_help(state, surface),
            AppCommand::CloseHelp => handlers::dialog::close_help(state, surface),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Setzt einen laufenden Render-Durchgang um ein Frame-Budget fort.
    ///
    /// Gibt `true` zurück, solange weitere Frames nötig sind.
    pub fn advance_render<S: RenderSurface>(
        &mut self,
        state: &mut AppState,
        surface: &mut S,
    ) -> bool {
        let budget = self.frame_budget.unwrap_or(u64::MAX);
        handlers::curve::advance(state, surface, budget)
    }
}
