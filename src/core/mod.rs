//! Core-Domänenmodelle: Kontrollpunkte, Kurven-Session und Geometrie-Kern.

pub mod bernstein;
pub mod bezier;
pub mod control_point;
pub mod error;
pub mod session;

pub use bernstein::{
    bernstein_weight, binomial_coefficient, evaluate_curve_point, MAX_EXACT_DEGREE,
};
pub use bezier::BezierCurve;
pub use control_point::ControlPoint;
pub use error::CurveError;
pub use session::{CurveSession, InteriorRect};
