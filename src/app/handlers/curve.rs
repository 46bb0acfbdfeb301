//! Handler für den Render-Durchgang der Kurve.

use crate::app::state::{PendingRender, UiMode};
use crate::app::AppState;
use crate::render::{CurveRenderJob, RenderStatus, RenderSurface};
use anyhow::Context;
use std::time::Instant;

/// Startet einen Render-Durchgang mit einer Kopie der aktuellen Punkte.
///
/// Scheitert die Kurve (z.B. Koeffizienten-Überlauf), wird die Session wie
/// nach einem Durchgang verworfen und der Fehler weitergereicht.
pub fn start<S: RenderSurface>(state: &mut AppState, surface: &mut S) -> anyhow::Result<()> {
    let points = state.session.snapshot();
    let job = match CurveRenderJob::begin(&points, &state.layout, &state.sweep, surface) {
        Ok(job) => job,
        Err(e) => {
            state.session.clear();
            state.mode = UiMode::Idle;
            return Err(e).with_context(|| {
                format!("Kurve aus {} Punkten nicht darstellbar", points.len())
            });
        }
    };

    log::info!(
        "Zeichne Kurve vom Grad {} mit {} Schritten",
        points.len().saturating_sub(1),
        state.sweep.samples
    );
    state.pending_render = Some(PendingRender {
        job,
        started: Instant::now(),
        point_count: points.len(),
    });
    state.mode = UiMode::Rendering;
    Ok(())
}

/// Führt höchstens `budget` Schritte des laufenden Durchgangs aus.
///
/// Gibt `true` zurück, solange der Durchgang noch nicht abgeschlossen ist.
pub fn advance<S: RenderSurface>(state: &mut AppState, surface: &mut S, budget: u64) -> bool {
    let Some(pending) = state.pending_render.as_mut() else {
        return false;
    };
    match pending.job.advance(surface, budget) {
        RenderStatus::Running { .. } => true,
        RenderStatus::Finished(report) => {
            if let Some(done) = state.pending_render.take() {
                log::info!(
                    "Kurve aus {} Punkten fertig: {} Schritte, {} Ticks in {:.2?}",
                    done.point_count,
                    report.samples,
                    report.ticks,
                    done.started.elapsed()
                );
            }
            state.last_render = Some(report);
            state.session.clear();
            state.mode = UiMode::Idle;
            false
        }
    }
}

/// Bricht einen laufenden Durchgang ab; die Punkte werden verworfen.
pub fn cancel(state: &mut AppState) {
    if let Some(pending) = state.pending_render.take() {
        log::info!(
            "Render-Durchgang bei {}% abgebrochen",
            pending.job.percent()
        );
        state.session.clear();
        state.mode = UiMode::Idle;
    }
}
