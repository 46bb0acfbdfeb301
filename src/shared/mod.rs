//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `core`, `render`, `app` und `ui`
//! gemeinsam lesen, ohne voneinander abzuhängen.

pub mod options;

pub use options::CanvasOptions;
pub use options::{CONFIG_ENV_VAR, MAX_SWEEP_SAMPLES, SWEEP_SAMPLES};
