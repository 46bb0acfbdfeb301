//! Kontrollpunkt in Pixel-Koordinaten.

use glam::{DVec2, IVec2};

/// Unveränderlicher Kontrollpunkt (nicht-negative Pixel-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlPoint {
    x: u32,
    y: u32,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Erstellt einen Kontrollpunkt aus vorzeichenbehafteten Koordinaten.
    /// `None`, wenn eine Koordinate negativ ist.
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        Some(Self {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Position als Gleitkomma-Vektor für die Kurvenauswertung.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Position als Pixel-Vektor für Zeichenaufrufe.
    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }
}
