//! UI-Layer mit egui
//!
//! Übersetzt egui-Input in `WindowEvent`s und malt die Display-List der
//! Zeichenfläche. Keine eigene Logik: alle Zustandsänderungen laufen über
//! den `AppController`.

mod canvas_painter;
pub mod input;

pub use canvas_painter::{paint_canvas, to_color32};
pub use input::collect_window_events;
