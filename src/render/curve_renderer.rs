//! Kurven-Renderer: Parameter-Sweep mit inkrementeller Fortschrittsanzeige.
//!
//! Ablauf eines Render-Durchgangs:
//! 1. Kontrollpunkte finalisieren (Nummern entfernen, kleine Marker) und
//!    Kontrollpolygon zeichnen
//! 2. Fortschrittszeile `Done   % [ … ]` aufbauen
//! 3. `t = k/N` für `k = 0..=N` abtasten, jeweils Segment vom vorherigen
//!    Kurvenpunkt zeichnen
//! 4. Bei jedem neuen ganzen Prozentwert die Anzeige ersetzen, bei
//!    Vielfachen von 5 einen Tick anhängen
//! 5. Abschluss: `100%` und Klammer bis zum Ende mit Ticks füllen
//!
//! `CurveRenderJob` zerlegt den Durchgang in Teilschritte, damit ein
//! Fenster-Backend zwischen Frames weiterzeichnen kann. `render_curve`
//! führt ihn am Stück aus; das Endbild ist in beiden Fällen identisch.

use super::layout::{text_above, CanvasLayout};
use super::surface::{FontRole, Pen, RenderSurface};
use crate::core::{BezierCurve, ControlPoint, CurveError};
use crate::shared::{CanvasOptions, MAX_SWEEP_SAMPLES};
use glam::IVec2;

/// Beschriftung vor der Prozentanzeige.
pub const DONE_LABEL: &str = "Done ";
/// Platzhalter der Prozentanzeige und öffnende Klammer.
pub const PERCENT_LABEL: &str = "  % [";
/// Anzeige nach Abschluss.
pub const COMPLETE_READOUT: &str = "100%";
/// Ticks werden bei Vielfachen dieses Prozentwerts angehängt.
const TICK_EVERY_PERCENT: u32 = 5;

/// Parameter eines Sweeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSettings {
    /// Anzahl der Schritte `N`; ausgewertet werden `N + 1` Parameterwerte
    pub samples: u64,
    pub tick: String,
    pub bracket_chars: usize,
}

impl SweepSettings {
    pub fn from_options(options: &CanvasOptions) -> Self {
        Self {
            samples: options.sweep_samples.clamp(1, MAX_SWEEP_SAMPLES),
            tick: options.progress_tick.clone(),
            bracket_chars: options.progress_bracket_chars,
        }
    }
}

/// Ergebnis eines abgeschlossenen Durchgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub degree: u32,
    pub samples: u64,
    /// Anzahl überschrittener Prozent-Meilensteine (1 … 99)
    pub milestones: u32,
    /// Anzahl gezeichneter Ticks inkl. Auffüllen
    pub ticks: u32,
    /// Letzter gezeichneter Kurvenpunkt
    pub end_point: IVec2,
}

/// Zustand nach einem Teilschritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Running { percent: u32 },
    Finished(RenderReport),
}

/// Fortschrittszeile unterhalb des Zeichenrechtecks.
#[derive(Debug, Clone)]
struct ProgressBar {
    readout_anchor: IVec2,
    ticks_anchor: IVec2,
    bracket_width: i32,
    tick_width: i32,
    tick_offset: i32,
    tick: String,
    readout: Option<String>,
    ticks: u32,
}

impl ProgressBar {
    /// Entfernt eine alte Zeile und zeichnet Beschriftung und leere Klammer.
    fn draw_frame<S: RenderSurface>(
        layout: &CanvasLayout,
        settings: &SweepSettings,
        surface: &mut S,
    ) -> Self {
        let anchor = layout.progress_anchor();
        let spaces = " ".repeat(settings.bracket_chars);
        let closing = format!("{spaces}]");

        text_above(
            surface,
            Pen::Erase,
            FontRole::Progress,
            anchor,
            &format!("{DONE_LABEL}{PERCENT_LABEL}{closing}"),
        );

        let done = text_above(surface, Pen::Text, FontRole::Progress, anchor, DONE_LABEL);
        let readout_anchor = anchor + IVec2::new(done.width, 0);
        let percent = text_above(
            surface,
            Pen::Text,
            FontRole::Progress,
            readout_anchor,
            PERCENT_LABEL,
        );
        let ticks_anchor = readout_anchor + IVec2::new(percent.width, 0);
        text_above(surface, Pen::Text, FontRole::Progress, ticks_anchor, &closing);

        Self {
            readout_anchor,
            ticks_anchor,
            bracket_width: surface.measure_text(FontRole::Progress, &spaces).width,
            tick_width: surface.measure_text(FontRole::Progress, &settings.tick).width,
            tick_offset: 0,
            tick: settings.tick.clone(),
            readout: None,
            ticks: 0,
        }
    }

    /// Ersetzt die Prozentanzeige (erst entfernen, dann neu zeichnen).
    fn replace_readout<S: RenderSurface>(&mut self, surface: &mut S, text: String) {
        if let Some(previous) = self.readout.take() {
            text_above(
                surface,
                Pen::Erase,
                FontRole::Progress,
                self.readout_anchor,
                &previous,
            );
        }
        text_above(
            surface,
            Pen::Text,
            FontRole::Progress,
            self.readout_anchor,
            &text,
        );
        self.readout = Some(text);
    }

    /// Hängt einen Tick an, solange er noch in die Klammer passt.
    fn push_tick<S: RenderSurface>(&mut self, surface: &mut S) -> bool {
        if self.tick_width <= 0 || self.tick_offset + self.tick_width > self.bracket_width {
            return false;
        }
        let extent = text_above(
            surface,
            Pen::Text,
            FontRole::Progress,
            self.ticks_anchor + IVec2::new(self.tick_offset, 0),
            &self.tick,
        );
        self.tick_offset += extent.width;
        self.ticks += 1;
        true
    }

    fn complete<S: RenderSurface>(&mut self, surface: &mut S) {
        self.replace_readout(surface, COMPLETE_READOUT.to_string());
        while self.push_tick(surface) {}
    }
}

/// Laufzeitzustand eines Sweeps; lebt nur für einen Durchgang.
#[derive(Debug, Clone, Copy)]
struct CurveRenderState {
    /// Nächster Index `k`, höchstens `samples`
    next_sample: u64,
    /// `k = samples` (also `t = 1`) wurde ausgewertet
    swept: bool,
    previous: IVec2,
    last_milestone: u32,
}

/// Schrittweise ausführbarer Render-Durchgang.
#[derive(Debug, Clone)]
pub struct CurveRenderJob {
    curve: BezierCurve,
    samples: u64,
    state: CurveRenderState,
    bar: ProgressBar,
    milestones: u32,
    report: Option<RenderReport>,
}

impl CurveRenderJob {
    /// Prüft die Kurve, zeichnet Kontrollpolygon und Fortschrittsrahmen.
    ///
    /// Bei einem Fehler (leere Kurve, Koeffizienten-Überlauf) wird nichts gezeichnet.
    pub fn begin<S: RenderSurface>(
        points: &[ControlPoint],
        layout: &CanvasLayout,
        settings: &SweepSettings,
        surface: &mut S,
    ) -> Result<Self, CurveError> {
        let curve = BezierCurve::new(points)?;
        let first = points.first().ok_or(CurveError::EmptyCurve)?.as_ivec2();

        for (i, point) in points.iter().enumerate() {
            layout.finalize_control_point(surface, *point, i + 1);
        }
        for pair in points.windows(2) {
            surface.draw_line(Pen::Polygon, pair[0].as_ivec2(), pair[1].as_ivec2());
        }

        let bar = ProgressBar::draw_frame(layout, settings, surface);

        Ok(Self {
            curve,
            samples: settings.samples.clamp(1, MAX_SWEEP_SAMPLES),
            state: CurveRenderState {
                next_sample: 0,
                swept: false,
                previous: first,
                last_milestone: 0,
            },
            bar,
            milestones: 0,
            report: None,
        })
    }

    /// Zuletzt angezeigter Prozentwert.
    pub fn percent(&self) -> u32 {
        if self.report.is_some() {
            100
        } else {
            self.state.last_milestone
        }
    }

    /// Anzahl der Schritte `N` dieses Durchgangs.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Tastet höchstens `budget` weitere Parameterwerte ab.
    pub fn advance<S: RenderSurface>(&mut self, surface: &mut S, budget: u64) -> RenderStatus {
        if let Some(report) = self.report {
            return RenderStatus::Finished(report);
        }

        let mut remaining = budget;
        while remaining > 0 && !self.state.swept {
            let k = self.state.next_sample;
            let t = k as f64 / self.samples as f64;
            let p = self.curve.point_at(t);
            // Abschneiden auf ganze Pixel
            let next = IVec2::new(p.x as i32, p.y as i32);
            surface.draw_line(Pen::Curve, self.state.previous, next);

            let percent = percent_of(k, self.samples);
            if percent > self.state.last_milestone && percent < 100 {
                self.report_milestone(surface, percent);
            }

            self.state.previous = next;
            if k == self.samples {
                self.state.swept = true;
            } else {
                self.state.next_sample += 1;
            }
            remaining -= 1;
        }

        if self.state.swept {
            RenderStatus::Finished(self.finish(surface))
        } else {
            RenderStatus::Running {
                percent: self.state.last_milestone,
            }
        }
    }

    fn report_milestone<S: RenderSurface>(&mut self, surface: &mut S, percent: u32) {
        for milestone in self.state.last_milestone + 1..=percent {
            if milestone % TICK_EVERY_PERCENT == 0 {
                self.bar.push_tick(surface);
            }
        }
        self.milestones += percent - self.state.last_milestone;
        self.state.last_milestone = percent;
        self.bar.replace_readout(surface, format!("{percent:2}"));
    }

    fn finish<S: RenderSurface>(&mut self, surface: &mut S) -> RenderReport {
        self.bar.complete(surface);
        let report = RenderReport {
            degree: self.curve.degree(),
            samples: self.samples,
            milestones: self.milestones,
            ticks: self.bar.ticks,
            end_point: self.state.previous,
        };
        self.report = Some(report);
        report
    }
}

/// `floor(100 · k / n)` ohne Gleitkomma-Drift.
fn percent_of(k: u64, n: u64) -> u32 {
    (u128::from(k) * 100 / u128::from(n)) as u32
}

/// Führt einen kompletten Render-Durchgang synchron aus.
pub fn render_curve<S: RenderSurface>(
    points: &[ControlPoint],
    layout: &CanvasLayout,
    settings: &SweepSettings,
    surface: &mut S,
) -> Result<RenderReport, CurveError> {
    let mut job = CurveRenderJob::begin(points, layout, settings, surface)?;
    loop {
        if let RenderStatus::Finished(report) = job.advance(surface, u64::MAX) {
            return Ok(report);
        }
    }
}
