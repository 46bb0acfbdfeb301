//! Zeichen-Layer: Zeichenflächen-Vertrag, Display-List, Layout und Kurven-Renderer.

mod canvas;
pub mod curve_renderer;
pub mod layout;
mod surface;

pub use canvas::{Canvas, DrawOp, TextMetrics};
pub use curve_renderer::{
    render_curve, CurveRenderJob, RenderReport, RenderStatus, SweepSettings,
};
pub use layout::{CanvasLayout, HINT, TITLE, WINDOW_TITLE};
pub use surface::{FontRole, Pen, RenderSurface, TextExtent};
