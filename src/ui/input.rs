//! Fenster-Input: egui-Events → `WindowEvent`.

use crate::app::{Key, PointerButton, WindowEvent};

/// Sammelt Tasten-, Klick- und Schließ-Events eines Frames.
///
/// `origin` ist die linke obere Ecke der Zeichenfläche; Klickpositionen
/// werden relativ dazu in ganze Pixel umgerechnet.
pub fn collect_window_events(ctx: &egui::Context, origin: egui::Pos2) -> Vec<WindowEvent> {
    ctx.input(|i| {
        let mut events: Vec<WindowEvent> = i
            .events
            .iter()
            .filter_map(|event| translate_event(event, origin))
            .collect();

        if i.viewport().close_requested() {
            events.push(WindowEvent::CloseRequested);
        }
        events
    })
}

/// Übersetzt ein einzelnes egui-Event. Loslassen und Tasten-Wiederholung
/// erzeugen kein `WindowEvent`.
pub fn translate_event(event: &egui::Event, origin: egui::Pos2) -> Option<WindowEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => Some(WindowEvent::KeyPress(translate_key(*key))),
        egui::Event::PointerButton {
            pos,
            button,
            pressed: true,
            ..
        } => {
            let local = *pos - origin;
            Some(WindowEvent::ButtonPress {
                button: translate_button(*button),
                x: local.x.floor() as i32,
                y: local.y.floor() as i32,
            })
        }
        _ => None,
    }
}

/// Buchstaben und Ziffern werden zu `Key::Char`, alles andere behält den egui-Namen.
pub fn translate_key(key: egui::Key) -> Key {
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Key::Char(c.to_ascii_lowercase()),
        _ => Key::Named(name.to_string()),
    }
}

fn translate_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}
