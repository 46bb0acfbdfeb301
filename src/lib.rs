//! Bezier Canvas Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppState, HintState, UiMode, WindowEvent};
pub use core::{BezierCurve, ControlPoint, CurveError, CurveSession, InteriorRect};
pub use render::{render_curve, Canvas, CanvasLayout, RenderReport, RenderSurface};
pub use shared::CanvasOptions;
