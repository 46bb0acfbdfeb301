use approx::assert_relative_eq;
use bezier_canvas::core::{binomial_coefficient, evaluate_curve_point, MAX_EXACT_DEGREE};
use bezier_canvas::{CanvasOptions, ControlPoint, CurveError, CurveSession};

fn scattered_points(count: u32) -> Vec<ControlPoint> {
    (0..count)
        .map(|i| ControlPoint::new(120 + (i * 53) % 780, 140 + (i * 29) % 480))
        .collect()
}

#[test]
fn test_curve_interpolates_first_and_last_point() {
    for count in [1, 2, 3, 5, 12, 30, MAX_EXACT_DEGREE + 1] {
        let points = scattered_points(count);
        let first = points[0].as_dvec2();
        let last = points[points.len() - 1].as_dvec2();

        let start = evaluate_curve_point(&points, 0.0).expect("gültige Kurve");
        let end = evaluate_curve_point(&points, 1.0).expect("gültige Kurve");

        assert_relative_eq!(start.x, first.x, epsilon = 1e-9);
        assert_relative_eq!(start.y, first.y, epsilon = 1e-9);
        assert_relative_eq!(end.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(end.y, last.y, epsilon = 1e-9);
    }
}

#[test]
fn test_binomial_is_symmetric_up_to_ceiling() {
    for n in 0..=MAX_EXACT_DEGREE {
        assert_eq!(binomial_coefficient(n, 0), Ok(1));
        assert_eq!(binomial_coefficient(n, n), Ok(1));
        for r in 0..=n {
            assert_eq!(binomial_coefficient(n, r), binomial_coefficient(n, n - r));
        }
    }
    assert_eq!(
        binomial_coefficient(4, 5),
        Err(CurveError::InvalidBinomial { n: 4, r: 5 })
    );
}

#[test]
fn test_session_accepts_strictly_inside_and_clears() {
    let mut session = CurveSession::from_options(&CanvasOptions::default());
    let bounds = session.bounds();
    let radius = CanvasOptions::default().point_radius;

    let inside = (bounds.x + radius + 1, bounds.y + radius + 1);
    let on_clearance = (bounds.x + radius, bounds.y + 200);

    assert_eq!(session.add_point(inside.0, inside.1), Some(1));
    assert_eq!(session.add_point(on_clearance.0, on_clearance.1), None);
    assert_eq!(session.point_count(), 1);

    session.clear();
    session.clear();
    assert_eq!(session.point_count(), 0);
    assert_eq!(
        session.point_at(0),
        Err(CurveError::PointOutOfRange { index: 0, len: 0 })
    );
}
