//! Mapping von Fenster-Events auf mutierende App-Commands.
//!
//! Die Zuordnung hängt allein vom aktuellen `UiMode` ab; das Mapping selbst
//! verändert keinen State.

use super::state::{HintState, UiMode};
use super::{AppCommand, AppState, PointerButton, WindowEvent};

/// Taste zum Löschen aller Punkte.
pub const CLEAR_KEY: char = 'c';
/// Taste zum Öffnen der Hilfe.
pub const HELP_KEY: char = 'h';

/// Übersetzt ein `WindowEvent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_event_to_commands(state: &AppState, event: &WindowEvent) -> Vec<AppCommand> {
    match state.mode {
        UiMode::Rendering => map_rendering(event),
        UiMode::HelpOverlay => map_help_overlay(event),
        UiMode::Idle | UiMode::Collecting => map_primary(state, event),
    }
}

/// Während eines Sweeps wird nur das Schließen des Fensters beachtet.
fn map_rendering(event: &WindowEvent) -> Vec<AppCommand> {
    match event {
        WindowEvent::CloseRequested => vec![AppCommand::CancelRender, AppCommand::RequestExit],
        _ => {
            log::trace!("Event während Rendering verworfen: {:?}", event);
            Vec::new()
        }
    }
}

fn map_help_overlay(event: &WindowEvent) -> Vec<AppCommand> {
    match event {
        WindowEvent::Expose => vec![AppCommand::RedrawHelp],
        WindowEvent::KeyPress(_) => vec![AppCommand::CloseHelp],
        WindowEvent::CloseRequested => vec![AppCommand::CloseHelp, AppCommand::RequestExit],
        WindowEvent::ButtonPress { .. } => Vec::new(),
    }
}

fn map_primary(state: &AppState, event: &WindowEvent) -> Vec<AppCommand> {
    match event {
        WindowEvent::Expose => vec![AppCommand::RedrawChrome],
        WindowEvent::KeyPress(key) => match key.as_char() {
            Some(CLEAR_KEY) => vec![AppCommand::ClearCurve],
            Some(HELP_KEY) => vec![AppCommand::OpenHelp],
            _ => vec![AppCommand::RequestExit],
        },
        WindowEvent::ButtonPress {
            button: PointerButton::Primary,
            x,
            y,
        } => {
            let mut commands = Vec::with_capacity(2);
            // Erster Klick entfernt den Hinweis, auch außerhalb des Rechtecks
            if state.hint == HintState::Visible {
                commands.push(AppCommand::DismissHint);
            }
            commands.push(AppCommand::AddPoint { x: *x, y: *y });
            commands
        }
        WindowEvent::ButtonPress {
            button: PointerButton::Secondary,
            ..
        } => {
            if state.session.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::StartRender]
            }
        }
        WindowEvent::ButtonPress {
            button: PointerButton::Other,
            ..
        } => Vec::new(),
        WindowEvent::CloseRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
