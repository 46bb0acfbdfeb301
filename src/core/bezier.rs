//! Bézier-Kurve mit vorab berechneten Binomialkoeffizienten für den Sweep.

use super::bernstein::weight_with_coefficient;
use super::{binomial_coefficient, ControlPoint, CurveError};
use glam::DVec2;

/// Bézier-Kurve vom Grad `points.len() − 1`.
///
/// Die Koeffizienten werden einmal beim Erstellen geprüft und berechnet,
/// sodass die Auswertung im Sweep keine Fehlerpfade mehr hat.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    points: Vec<DVec2>,
    coefficients: Vec<f64>,
}

impl BezierCurve {
    /// Erstellt die Kurve aus geordneten Kontrollpunkten.
    pub fn new(points: &[ControlPoint]) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let degree = (points.len() - 1) as u32;
        let coefficients = (0..=degree)
            .map(|i| binomial_coefficient(degree, i).map(|c| c as f64))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            points: points.iter().map(ControlPoint::as_dvec2).collect(),
            coefficients,
        })
    }

    /// Grad der Kurve.
    pub fn degree(&self) -> u32 {
        (self.points.len() - 1) as u32
    }

    /// Wertet die Kurve bei `t` aus.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let degree = self.degree();
        self.points
            .iter()
            .zip(&self.coefficients)
            .enumerate()
            .fold(DVec2::ZERO, |sum, (i, (&point, &coefficient))| {
                sum + weight_with_coefficient(coefficient, degree, i as u32, t) * point
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_curve_point;
    use approx::assert_relative_eq;

    fn sample_points() -> Vec<ControlPoint> {
        vec![
            ControlPoint::new(120, 250),
            ControlPoint::new(300, 140),
            ControlPoint::new(480, 600),
            ControlPoint::new(800, 300),
        ]
    }

    #[test]
    fn test_matches_direct_evaluation() {
        let points = sample_points();
        let curve = BezierCurve::new(&points).expect("gültige Kurve");
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            let direct = evaluate_curve_point(&points, t).expect("gültige Kurve");
            let cached = curve.point_at(t);
            assert_relative_eq!(direct.x, cached.x, epsilon = 1e-9);
            assert_relative_eq!(direct.y, cached.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degree_follows_point_count() {
        let curve = BezierCurve::new(&sample_points()).expect("gültige Kurve");
        assert_eq!(curve.degree(), 3);
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(BezierCurve::new(&[]), Err(CurveError::EmptyCurve)));
    }

    #[test]
    fn test_degree_above_ceiling_is_rejected() {
        let points: Vec<_> = (0..69).map(|i| ControlPoint::new(100 + i, 200)).collect();
        assert!(matches!(
            BezierCurve::new(&points),
            Err(CurveError::CoefficientOverflow { n: 68, .. })
        ));
    }
}
