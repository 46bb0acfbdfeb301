//! Fehlertypen des Geometrie-Kerns.

use thiserror::Error;

/// Fehler bei Kurvenberechnung und Punktzugriff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// `C(n, r)` mit `r > n` angefragt.
    #[error("ungültiger Binomialkoeffizient C({n}, {r}): r > n")]
    InvalidBinomial { n: u32, r: u32 },
    /// Ergebnis von `C(n, r)` passt nicht in 64 Bit.
    #[error("Binomialkoeffizient C({n}, {r}) übersteigt u64")]
    CoefficientOverflow { n: u32, r: u32 },
    /// Kurve ohne Kontrollpunkte.
    #[error("Kurve ohne Kontrollpunkte")]
    EmptyCurve,
    /// Index außerhalb von `[0, len)`.
    #[error("Punkt-Index {index} außerhalb von 0..{len}")]
    PointOutOfRange { index: usize, len: usize },
}
