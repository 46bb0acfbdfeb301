//! Handler für Rahmen, Titel und Einmal-Hinweis.

use crate::app::state::{HintState, UiMode};
use crate::app::AppState;
use crate::render::RenderSurface;

/// Zeichnet Titel und Rahmen; beim ersten Mal zusätzlich den Hinweis.
pub fn redraw_chrome<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    state.layout.draw_chrome(surface);
    if state.hint == HintState::Pending {
        state.layout.draw_hint(surface);
        state.hint = HintState::Visible;
    }
}

/// Entfernt den sichtbaren Hinweis (Fenster leeren, Rahmen neu zeichnen).
pub fn dismiss_hint<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    if state.hint != HintState::Visible {
        return;
    }
    surface.clear();
    state.layout.draw_chrome(surface);
    state.hint = HintState::Consumed;
}

/// Verwirft alle Punkte und zeichnet einen leeren Rahmen.
pub fn clear_curve<S: RenderSurface>(state: &mut AppState, surface: &mut S) {
    let discarded = state.session.point_count();
    state.session.clear();
    surface.clear();
    state.layout.draw_chrome(surface);
    if state.hint == HintState::Visible {
        state.hint = HintState::Consumed;
    }
    state.mode = UiMode::Idle;
    log::debug!("Zeichenfläche geleert ({} Punkte verworfen)", discarded);
}
