//! Fenster-Layout: Rahmen, Titel, Hinweis, Punkt-Marker und Hilfetext.

use super::surface::{FontRole, Pen, RenderSurface};
use crate::core::{ControlPoint, InteriorRect};
use crate::shared::CanvasOptions;
use glam::IVec2;

/// Überschrift im oberen Rand.
pub const TITLE: &str = "Bezier Curve";
/// Titel des Fensters.
pub const WINDOW_TITLE: &str = "Bezier Curve Window";
/// Einmaliger Hinweis nach dem ersten Expose.
pub const HINT: &str = "Press <h> for help";

/// Hilfetext: (vertikaler Abstand zur Rechteck-Oberkante, Zeile).
pub const HELP_LINES: [(i32, &str); 6] = [
    (40, "* press <left mouse button> inside the rectangle"),
    (80, "  to generate points"),
    (160, "* press <right mouse button> to draw bezier curve"),
    (240, "* press <c> to erase all"),
    (320, "* press <h> for help"),
    (400, "* press <any key> to exit from this screen"),
];

/// Horizontaler Versatz des Hinweises links der Rechteck-Mitte.
const HINT_OFFSET_X: i32 = 180;
/// Horizontaler Versatz des Hilfetexts links vom Rechteck.
const HELP_OFFSET_X: i32 = 80;

/// Aus den Optionen abgeleitete Positionen aller statischen Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub window: IVec2,
    pub rect: InteriorRect,
    pub point_radius: i32,
}

impl CanvasLayout {
    pub fn from_options(options: &CanvasOptions) -> Self {
        Self {
            window: IVec2::new(options.window_size[0], options.window_size[1]),
            rect: InteriorRect::from_options(options),
            point_radius: options.point_radius,
        }
    }

    /// Zeichnet den Rahmen des Zeichenrechtecks.
    pub fn draw_frame<S: RenderSurface>(&self, surface: &mut S) {
        surface.draw_rect(
            Pen::Frame,
            IVec2::new(self.rect.x, self.rect.y),
            IVec2::new(self.rect.width, self.rect.height),
        );
    }

    /// Zeichnet die Überschrift zentriert im oberen Rand.
    pub fn draw_title<S: RenderSurface>(&self, surface: &mut S) {
        let extent = surface.measure_text(FontRole::Title, TITLE);
        let top_left = IVec2::new(
            (self.window.x - extent.width) / 2,
            (self.rect.y - extent.height) / 2,
        );
        surface.draw_text(Pen::Text, FontRole::Title, top_left, TITLE);
    }

    /// Überschrift und Rahmen, wie nach jedem Expose.
    pub fn draw_chrome<S: RenderSurface>(&self, surface: &mut S) {
        self.draw_title(surface);
        self.draw_frame(surface);
    }

    pub fn draw_hint<S: RenderSurface>(&self, surface: &mut S) {
        let anchor = IVec2::new(
            self.rect.x + self.rect.width / 2 - HINT_OFFSET_X,
            self.rect.y + self.rect.height / 2,
        );
        text_above(surface, Pen::Text, FontRole::Title, anchor, HINT);
    }

    /// Marker, Nummer und Kante zum Vorgänger eines neu angenommenen Punkts.
    pub fn draw_control_point<S: RenderSurface>(
        &self,
        surface: &mut S,
        point: ControlPoint,
        index: usize,
        previous: Option<ControlPoint>,
    ) {
        let center = point.as_ivec2();
        surface.fill_circle(Pen::Point, center, self.point_radius);
        text_above(
            surface,
            Pen::Text,
            FontRole::Label,
            center,
            &index.to_string(),
        );
        if let Some(prev) = previous {
            surface.draw_line(Pen::Polygon, prev.as_ivec2(), center);
        }
    }

    /// Ersetzt Nummer und großen Marker durch einen kleinen Marker.
    pub fn finalize_control_point<S: RenderSurface>(
        &self,
        surface: &mut S,
        point: ControlPoint,
        index: usize,
    ) {
        let center = point.as_ivec2();
        text_above(
            surface,
            Pen::Erase,
            FontRole::Label,
            center,
            &index.to_string(),
        );
        surface.fill_circle(Pen::Erase, center, self.point_radius);
        surface.fill_circle(Pen::Point, center, self.point_radius / 2);
    }

    /// Anker der Fortschrittszeile unterhalb des Rechtecks (x links, y Unterkante).
    pub fn progress_anchor(&self) -> IVec2 {
        IVec2::new(
            self.rect.x + self.rect.width / 4,
            self.rect.bottom() + (self.window.y - self.rect.height) / 4,
        )
    }

    /// Statischer Hilfetext des Overlays.
    pub fn draw_help<S: RenderSurface>(&self, surface: &mut S) {
        let x = self.rect.x - HELP_OFFSET_X;
        for (offset, line) in HELP_LINES {
            text_above(
                surface,
                Pen::Text,
                FontRole::Title,
                IVec2::new(x, self.rect.y + offset),
                line,
            );
        }
    }
}

/// Zeichnet Text so, dass seine Unterkante auf `anchor.y` liegt.
pub(crate) fn text_above<S: RenderSurface>(
    surface: &mut S,
    pen: Pen,
    font: FontRole,
    anchor: IVec2,
    text: &str,
) -> super::TextExtent {
    let extent = surface.measure_text(font, text);
    surface.draw_text(
        pen,
        font,
        IVec2::new(anchor.x, anchor.y - extent.height),
        text,
    )
}
