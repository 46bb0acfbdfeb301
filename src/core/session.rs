//! Kurven-Session: geordnete Kontrollpunkte mit Gültigkeitsregeln.

use super::{ControlPoint, CurveError};
use crate::shared::CanvasOptions;
use std::sync::Arc;

/// Inneres Zeichenrechteck, zentriert im Fenster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl InteriorRect {
    /// Zentriert ein Rechteck der Größe `rect_size` in `window_size`.
    pub fn centered(window_size: [i32; 2], rect_size: [i32; 2]) -> Self {
        Self {
            x: (window_size[0] - rect_size[0]) / 2,
            y: (window_size[1] - rect_size[1]) / 2,
            width: rect_size[0],
            height: rect_size[1],
        }
    }

    /// Rechteck aus den Laufzeit-Optionen.
    pub fn from_options(options: &CanvasOptions) -> Self {
        Self::centered(options.window_size, options.rect_size)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Ein Marker mit Radius `clearance` um `(x, y)` berührt den Rand nicht.
    pub fn contains_with_clearance(&self, x: i32, y: i32, clearance: i32) -> bool {
        x - clearance > self.x
            && x + clearance < self.right()
            && y - clearance > self.y
            && y + clearance < self.bottom()
    }
}

/// Geordnete, nur anhängbare Folge von Kontrollpunkten.
///
/// Die Reihenfolge ist die Eingabereihenfolge und bestimmt die Kurve.
#[derive(Debug, Clone)]
pub struct CurveSession {
    bounds: InteriorRect,
    clearance: i32,
    points: Vec<ControlPoint>,
}

impl CurveSession {
    /// Erstellt eine leere Session für den gegebenen Zeichenbereich.
    pub fn new(bounds: InteriorRect, clearance: i32) -> Self {
        Self {
            bounds,
            clearance,
            points: Vec::new(),
        }
    }

    /// Session aus den Laufzeit-Optionen.
    pub fn from_options(options: &CanvasOptions) -> Self {
        Self::new(InteriorRect::from_options(options), options.point_radius)
    }

    pub fn bounds(&self) -> InteriorRect {
        self.bounds
    }

    /// Hängt einen Punkt an und liefert seinen 1-basierten Index.
    ///
    /// Punkte außerhalb des Innenbereichs (inkl. Marker-Abstand) werden
    /// kommentarlos verworfen.
    pub fn add_point(&mut self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains_with_clearance(x, y, self.clearance) {
            return None;
        }
        let point = ControlPoint::from_signed(x, y)?;
        self.points.push(point);
        Some(self.points.len())
    }

    /// Leert die Session. Idempotent.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an Position `index` (0-basiert).
    pub fn point_at(&self, index: usize) -> Result<ControlPoint, CurveError> {
        self.points
            .get(index)
            .copied()
            .ok_or(CurveError::PointOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Der zuletzt hinzugefügte Punkt.
    pub fn last_point(&self) -> Option<ControlPoint> {
        self.points.last().copied()
    }

    /// Unveränderliche Kopie der aktuellen Punkte zur Übergabe an den Renderer.
    pub fn snapshot(&self) -> Arc<[ControlPoint]> {
        Arc::from(self.points.as_slice())
    }
}
