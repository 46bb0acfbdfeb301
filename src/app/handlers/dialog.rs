//! Handler für das Hilfe-Overlay und die Anwendungssteuerung.

use crate::app::state::UiMode;
use crate::app::AppState;
use crate::render::RenderSurface;

/// Öffnet das Hilfe-Overlay; der Hauptmodus ruht bis zum Schließen.
pub fn open_help<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    state.suspended_mode = Some(state.mode);
    state.mode = UiMode::HelpOverlay;
    surface.open_overlay();
    draw_help(state, surface);
    log::info!("Hilfe geöffnet");
}

/// Zeichnet den Hilfetext erneut.
pub fn redraw_help<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    if surface.has_overlay() {
        draw_help(state, surface);
    }
}

/// Schließt das Overlay und stellt den ruhenden Modus wieder her.
///
/// Der Hauptinhalt wurde nie verändert und muss nicht neu gezeichnet werden.
pub fn close_help<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    surface.close_overlay();
    let restored = state.suspended_mode.take();
    state.mode = restored.unwrap_or_else(|| state.primary_mode());
    log::info!("Hilfe geschlossen");
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}

fn draw_help<S: RenderSurface>(state: &AppState, surface: &mut S) {
    surface.clear();
    state.layout.draw_help(surface);
}
