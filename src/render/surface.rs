//! Zeichenflächen-Vertrag zwischen App-Layer und Fenster-Backend.

use crate::shared::CanvasOptions;
use glam::IVec2;

/// Stift = Farbe + Linienstil, einmal beim Start konfiguriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pen {
    /// Rahmen des Zeichenrechtecks (2 px, blau)
    Frame,
    /// Text (schwarz auf Hintergrund)
    Text,
    /// Kontrollpolygon (1 px, gestrichelt, Textfarbe)
    Polygon,
    /// Punkt-Marker (2 px, rot)
    Point,
    /// Kurve (1 px, grün)
    Curve,
    /// Hintergrundfarbe zum Entfernen bereits gezeichneter Elemente
    Erase,
}

impl Pen {
    /// Linienbreite in Pixeln.
    pub fn line_width(self) -> f32 {
        match self {
            Pen::Frame | Pen::Point => 2.0,
            Pen::Text | Pen::Polygon | Pen::Curve | Pen::Erase => 1.0,
        }
    }

    /// Farbe des Stifts (RGBA).
    pub fn color(self, options: &CanvasOptions) -> [f32; 4] {
        match self {
            Pen::Frame => options.frame_color,
            Pen::Text | Pen::Polygon => options.text_color,
            Pen::Point => options.point_color,
            Pen::Curve => options.curve_color,
            Pen::Erase => options.background_color,
        }
    }

    pub fn is_dashed(self) -> bool {
        matches!(self, Pen::Polygon)
    }
}

/// Schriftrolle, bestimmt die Schriftgröße.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Titel, Hinweis, Hilfetext
    Title,
    /// Nummern an den Kontrollpunkten
    Label,
    /// Fortschrittsanzeige
    Progress,
}

impl FontRole {
    /// Schriftgröße in Pixeln.
    pub fn size(self, options: &CanvasOptions) -> f32 {
        match self {
            FontRole::Title => options.title_font_size,
            FontRole::Label => options.label_font_size,
            FontRole::Progress => options.progress_font_size,
        }
    }
}

/// Gemessene Textausdehnung in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Primitive Zeichenoperationen des Fenster-Backends.
///
/// Text wird wie ein X11-Image-String gezeichnet: die Textausdehnung wird
/// zuerst mit der Hintergrundfarbe gefüllt, `Pen::Erase` entfernt damit
/// früher gezeichneten Text gleicher Ausdehnung.
///
/// Solange ein Overlay offen ist, landen alle Zeichenaufrufe im Overlay.
/// `close_overlay` verwirft es und lässt den Hauptinhalt unverändert.
pub trait RenderSurface {
    /// Löscht die aktive Ebene.
    fn clear(&mut self);

    fn draw_line(&mut self, pen: Pen, from: IVec2, to: IVec2);

    /// Rechteck-Umriss ab `origin` mit Ausdehnung `size`.
    fn draw_rect(&mut self, pen: Pen, origin: IVec2, size: IVec2);

    fn fill_circle(&mut self, pen: Pen, center: IVec2, radius: i32);

    /// Misst Text ohne zu zeichnen.
    fn measure_text(&self, font: FontRole, text: &str) -> TextExtent;

    /// Zeichnet Text mit linker oberer Ecke `top_left` und liefert dessen Ausdehnung.
    fn draw_text(&mut self, pen: Pen, font: FontRole, top_left: IVec2, text: &str)
        -> TextExtent;

    fn open_overlay(&mut self);

    fn close_overlay(&mut self);

    fn has_overlay(&self) -> bool;
}
