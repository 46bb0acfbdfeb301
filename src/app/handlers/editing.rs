//! Handler für das Sammeln von Kontrollpunkten.

use crate::app::state::UiMode;
use crate::app::AppState;
use crate::render::RenderSurface;

/// Übernimmt einen Klick als Kontrollpunkt, falls er im Innenbereich liegt.
pub fn add_point<S: RenderSurface>(state: &mut AppState, surface: &mut S, x: i32, y: i32) {
    let Some(index) = state.session.add_point(x, y) else {
        log::trace!("Klick ({}, {}) außerhalb des Zeichenbereichs ignoriert", x, y);
        return;
    };
    let Some(point) = state.session.last_point() else {
        return;
    };
    let previous = index
        .checked_sub(2)
        .and_then(|i| state.session.point_at(i).ok());

    state
        .layout
        .draw_control_point(surface, point, index, previous);
    state.mode = UiMode::Collecting;
    log::debug!("Punkt {} bei ({}, {}) hinzugefügt", index, x, y);
}
