//! Retained Display-List als `RenderSurface`.
//!
//! Das Fenster-Backend zeichnet die Liste jeden Frame neu; Tests lesen sie
//! direkt aus.

use super::surface::{FontRole, Pen, RenderSurface, TextExtent};
use crate::shared::CanvasOptions;
use glam::IVec2;

/// Eine aufgezeichnete Zeichenoperation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        pen: Pen,
        from: IVec2,
        to: IVec2,
    },
    Rect {
        pen: Pen,
        origin: IVec2,
        size: IVec2,
    },
    Circle {
        pen: Pen,
        center: IVec2,
        radius: i32,
    },
    Text {
        pen: Pen,
        font: FontRole,
        top_left: IVec2,
        text: String,
        extent: TextExtent,
    },
}

impl DrawOp {
    pub fn pen(&self) -> Pen {
        match self {
            DrawOp::Line { pen, .. }
            | DrawOp::Rect { pen, .. }
            | DrawOp::Circle { pen, .. }
            | DrawOp::Text { pen, .. } => *pen,
        }
    }

    /// Text der Operation, falls es eine Text-Operation ist.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Monospace-Metrik für die Textmessung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    title_size: f32,
    label_size: f32,
    progress_size: f32,
    glyph_width_ratio: f32,
    line_height_ratio: f32,
}

impl TextMetrics {
    pub fn from_options(options: &CanvasOptions) -> Self {
        Self {
            title_size: FontRole::Title.size(options),
            label_size: FontRole::Label.size(options),
            progress_size: FontRole::Progress.size(options),
            glyph_width_ratio: options.glyph_width_ratio,
            line_height_ratio: options.line_height_ratio,
        }
    }

    fn font_size(&self, font: FontRole) -> f32 {
        match font {
            FontRole::Title => self.title_size,
            FontRole::Label => self.label_size,
            FontRole::Progress => self.progress_size,
        }
    }

    /// Ausdehnung von `text` in der Schriftrolle `font`.
    pub fn measure(&self, font: FontRole, text: &str) -> TextExtent {
        let size = self.font_size(font);
        let glyphs = text.chars().count() as f32;
        TextExtent {
            width: (glyphs * size * self.glyph_width_ratio).round() as i32,
            height: (size * self.line_height_ratio).round() as i32,
        }
    }
}

/// Display-List mit Hauptebene und optionalem Overlay.
#[derive(Debug, Clone)]
pub struct Canvas {
    metrics: TextMetrics,
    primary: Vec<DrawOp>,
    overlay: Option<Vec<DrawOp>>,
}

impl Canvas {
    pub fn new(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            primary: Vec::new(),
            overlay: None,
        }
    }

    pub fn from_options(options: &CanvasOptions) -> Self {
        Self::new(TextMetrics::from_options(options))
    }

    /// Operationen der Hauptebene.
    pub fn primary_ops(&self) -> &[DrawOp] {
        &self.primary
    }

    /// Operationen des Overlays, falls offen.
    pub fn overlay_ops(&self) -> Option<&[DrawOp]> {
        self.overlay.as_deref()
    }

    fn active_mut(&mut self) -> &mut Vec<DrawOp> {
        match self.overlay.as_mut() {
            Some(ops) => ops,
            None => &mut self.primary,
        }
    }

    fn push(&mut self, op: DrawOp) {
        self.active_mut().push(op);
    }
}

impl RenderSurface for Canvas {
    fn clear(&mut self) {
        self.active_mut().clear();
    }

    fn draw_line(&mut self, pen: Pen, from: IVec2, to: IVec2) {
        // Kurvensegmente der Länge 0 ändern kein Pixel
        if pen == Pen::Curve && from == to {
            return;
        }
        self.push(DrawOp::Line { pen, from, to });
    }

    fn draw_rect(&mut self, pen: Pen, origin: IVec2, size: IVec2) {
        self.push(DrawOp::Rect { pen, origin, size });
    }

    fn fill_circle(&mut self, pen: Pen, center: IVec2, radius: i32) {
        self.push(DrawOp::Circle {
            pen,
            center,
            radius,
        });
    }

    fn measure_text(&self, font: FontRole, text: &str) -> TextExtent {
        self.metrics.measure(font, text)
    }

    fn draw_text(
        &mut self,
        pen: Pen,
        font: FontRole,
        top_left: IVec2,
        text: &str,
    ) -> TextExtent {
        let extent = self.metrics.measure(font, text);
        self.push(DrawOp::Text {
            pen,
            font,
            top_left,
            text: text.to_string(),
            extent,
        });
        extent
    }

    fn open_overlay(&mut self) {
        if self.overlay.is_none() {
            self.overlay = Some(Vec::new());
        }
    }

    fn close_overlay(&mut self) {
        self.overlay = None;
    }

    fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}
