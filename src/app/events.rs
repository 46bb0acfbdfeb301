//! Fenster-Events und App-Commands für den Event/Command-Datenfluss.

/// Maustaste eines Klick-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Punkt setzen
    Primary,
    /// Rechte Taste: Kurve zeichnen
    Secondary,
    /// Alle übrigen Tasten (werden ignoriert)
    Other,
}

/// Taste eines Tastatur-Events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Zeichentaste
    Char(char),
    /// Sonstige Taste (Escape, F1, Pfeiltasten, …)
    Named(String),
}

impl Key {
    /// Zeichen ohne Umschalt-Ebene, wie beim Keysym-Index 0.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(c.to_ascii_lowercase()),
            Key::Named(_) => None,
        }
    }
}

/// Roh-Events des Fenster-Backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// Fenster sichtbar geworden bzw. muss neu gezeichnet werden
    Expose,
    /// Taste gedrückt
    KeyPress(Key),
    /// Maustaste gedrückt (Fenster-Koordinaten in Pixeln)
    ButtonPress { button: PointerButton, x: i32, y: i32 },
    /// Fenster wird geschlossen
    CloseRequested,
}

/// Mutierende Commands auf dem `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Titel und Rahmen neu zeichnen (einmalig auch den Hinweis)
    RedrawChrome,
    /// Einmal-Hinweis entfernen
    DismissHint,
    /// Kontrollpunkt an Fensterposition hinzufügen
    AddPoint { x: i32, y: i32 },
    /// Kurve aus den gesammelten Punkten zeichnen
    StartRender,
    /// Laufenden Render-Durchgang abbrechen
    CancelRender,
    /// Alle Punkte verwerfen und leeren Rahmen zeichnen
    ClearCurve,
    /// Hilfe-Overlay öffnen
    OpenHelp,
    /// Hilfetext im Overlay neu zeichnen
    RedrawHelp,
    /// Hilfe-Overlay schließen
    CloseHelp,
    /// Anwendung beenden
    RequestExit,
}
