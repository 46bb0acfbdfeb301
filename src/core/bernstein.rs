//! Geometrie-Kern: Binomialkoeffizient, Bernstein-Gewicht, Bézier-Auswertung.
//!
//! Der Binomialkoeffizient wird als laufendes Produkt-Verhältnis berechnet
//! (`C = C·(n−k+1)/k`), nicht über Fakultäts-Tabellen. Zwischenwerte laufen
//! in 128 Bit; das exakte Ergebnis ist für alle `n ≤ 67` verfügbar.
//! Ab `C(68, 34)` übersteigt der Wert `u64::MAX` und es wird
//! [`CurveError::CoefficientOverflow`] geliefert statt still überzulaufen.

use super::{ControlPoint, CurveError};
use glam::DVec2;

/// Größtes `n`, für das jedes `C(n, r)` in 64 Bit passt.
pub const MAX_EXACT_DEGREE: u32 = 67;

/// Anzahl der Möglichkeiten, `r` aus `n` zu wählen.
///
/// Fehler bei `r > n` bzw. wenn das Ergebnis 64 Bit übersteigt.
pub fn binomial_coefficient(n: u32, r: u32) -> Result<u64, CurveError> {
    if r > n {
        return Err(CurveError::InvalidBinomial { n, r });
    }

    // Symmetrie C(n, r) == C(n, n−r): kürzere Schleife, gleiche Zwischenwerte
    let k = r.min(n - r);
    let mut acc: u128 = 1;
    for j in 1..=k {
        // acc == C(n−k+j−1, j−1), das Produkt ist stets durch j teilbar
        acc = acc * u128::from(n - k + j) / u128::from(j);
        if acc > u128::from(u64::MAX) {
            return Err(CurveError::CoefficientOverflow { n, r });
        }
    }

    Ok(acc as u64)
}

/// Bernstein-Gewicht `C(n,i) · (1−t)^(n−i) · t^i`.
pub fn bernstein_weight(n: u32, i: u32, t: f64) -> Result<f64, CurveError> {
    let coefficient = binomial_coefficient(n, i)?;
    Ok(weight_with_coefficient(coefficient as f64, n, i, t))
}

/// Bernstein-Gewicht mit bereits bekanntem Koeffizienten.
#[inline]
pub(crate) fn weight_with_coefficient(coefficient: f64, n: u32, i: u32, t: f64) -> f64 {
    coefficient * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32)
}

/// Gewichtete Summe aller Kontrollpunkte bei Parameter `t`.
///
/// Grad = `points.len() − 1`; bei einem einzelnen Punkt degeneriert die
/// Kurve zu diesem Punkt (Gewicht 1).
pub fn evaluate_curve_point(points: &[ControlPoint], t: f64) -> Result<DVec2, CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyCurve);
    }

    let degree = (points.len() - 1) as u32;
    let mut sum = DVec2::ZERO;
    for (i, point) in points.iter().enumerate() {
        let weight = bernstein_weight(degree, i as u32, t)?;
        sum += weight * point.as_dvec2();
    }
    Ok(sum)
}
