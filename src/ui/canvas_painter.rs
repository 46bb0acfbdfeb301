//! Zeichnet die Display-List eines `Canvas` mit dem egui-Painter.

use crate::render::{Canvas, DrawOp, FontRole, Pen};
use crate::shared::CanvasOptions;
use glam::IVec2;

/// Strichlänge des gestrichelten Kontrollpolygons.
const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 3.0;

/// Malt Hintergrund, Hauptebene und (falls offen) das Overlay.
///
/// Das Overlay deckt die Hauptebene vollständig ab, wie ein eigenes Fenster.
pub fn paint_canvas(
    painter: &egui::Painter,
    origin: egui::Pos2,
    canvas: &Canvas,
    options: &CanvasOptions,
) {
    let area = egui::Rect::from_min_size(
        origin,
        egui::vec2(options.window_size[0] as f32, options.window_size[1] as f32),
    );
    let background = to_color32(options.background_color);

    painter.rect_filled(area, 0.0, background);
    paint_ops(painter, origin, canvas.primary_ops(), options);

    if let Some(overlay) = canvas.overlay_ops() {
        painter.rect_filled(area, 0.0, background);
        paint_ops(painter, origin, overlay, options);
    }
}

fn paint_ops(painter: &egui::Painter, origin: egui::Pos2, ops: &[DrawOp], options: &CanvasOptions) {
    for op in ops {
        paint_op(painter, origin, op, options);
    }
}

fn paint_op(painter: &egui::Painter, origin: egui::Pos2, op: &DrawOp, options: &CanvasOptions) {
    match op {
        DrawOp::Line { pen, from, to } => {
            let points = [to_pos(origin, *from), to_pos(origin, *to)];
            let stroke = pen_stroke(*pen, options);
            if pen.is_dashed() {
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    stroke,
                    DASH_LENGTH,
                    GAP_LENGTH,
                ));
            } else {
                painter.line_segment(points, stroke);
            }
        }
        DrawOp::Rect { pen, origin: o, size } => {
            let rect = egui::Rect::from_min_size(
                to_pos(origin, *o),
                egui::vec2(size.x as f32, size.y as f32),
            );
            painter.rect_stroke(
                rect,
                0.0,
                pen_stroke(*pen, options),
                egui::StrokeKind::Middle,
            );
        }
        DrawOp::Circle {
            pen,
            center,
            radius,
        } => {
            painter.circle_filled(
                to_pos(origin, *center),
                *radius as f32,
                to_color32(pen.color(options)),
            );
        }
        DrawOp::Text {
            pen,
            font,
            top_left,
            text,
            extent,
        } => paint_text(painter, origin, options, *pen, *font, *top_left, text, *extent),
    }
}

/// Text im Image-String-Stil: erst Ausdehnung mit Hintergrund füllen.
#[allow(clippy::too_many_arguments)]
fn paint_text(
    painter: &egui::Painter,
    origin: egui::Pos2,
    options: &CanvasOptions,
    pen: Pen,
    font: FontRole,
    top_left: IVec2,
    text: &str,
    extent: crate::render::TextExtent,
) {
    let pos = to_pos(origin, top_left);
    let rect = egui::Rect::from_min_size(
        pos,
        egui::vec2(extent.width as f32, extent.height as f32),
    );
    painter.rect_filled(rect, 0.0, to_color32(options.background_color));

    if pen != Pen::Erase {
        painter.text(
            pos,
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::monospace(font.size(options)),
            to_color32(pen.color(options)),
        );
    }
}

fn pen_stroke(pen: Pen, options: &CanvasOptions) -> egui::Stroke {
    egui::Stroke::new(pen.line_width(), to_color32(pen.color(options)))
}

fn to_pos(origin: egui::Pos2, p: IVec2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// RGBA [0, 1] → egui-Farbe.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
