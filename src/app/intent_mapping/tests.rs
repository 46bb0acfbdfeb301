use crate::app::state::{HintState, UiMode};
use crate::app::{AppCommand, AppState, Key, PointerButton, WindowEvent};

use super::map_event_to_commands;

fn click(button: PointerButton, x: i32, y: i32) -> WindowEvent {
    WindowEvent::ButtonPress { button, x, y }
}

fn key(c: char) -> WindowEvent {
    WindowEvent::KeyPress(Key::Char(c))
}

#[test]
fn expose_in_idle_maps_to_redraw_chrome() {
    let state = AppState::new();

    let commands = map_event_to_commands(&state, &WindowEvent::Expose);

    assert_eq!(commands, vec![AppCommand::RedrawChrome]);
}

#[test]
fn first_primary_click_dismisses_visible_hint_before_adding() {
    let mut state = AppState::new();
    state.hint = HintState::Visible;

    let commands = map_event_to_commands(&state, &click(PointerButton::Primary, 10, 10));

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::DismissHint));
    assert!(matches!(commands[1], AppCommand::AddPoint { x: 10, y: 10 }));
}

#[test]
fn primary_click_after_hint_consumed_only_adds() {
    let mut state = AppState::new();
    state.hint = HintState::Consumed;

    let commands = map_event_to_commands(&state, &click(PointerButton::Primary, 300, 300));

    assert_eq!(commands, vec![AppCommand::AddPoint { x: 300, y: 300 }]);
}

#[test]
fn secondary_click_without_points_is_ignored() {
    let state = AppState::new();

    let commands = map_event_to_commands(&state, &click(PointerButton::Secondary, 300, 300));

    assert!(commands.is_empty());
}

#[test]
fn secondary_click_with_points_starts_render() {
    let mut state = AppState::new();
    state.session.add_point(300, 300);
    state.mode = UiMode::Collecting;

    let commands = map_event_to_commands(&state, &click(PointerButton::Secondary, 0, 0));

    assert_eq!(commands, vec![AppCommand::StartRender]);
}

#[test]
fn keys_map_case_insensitively() {
    let state = AppState::new();

    assert_eq!(map_event_to_commands(&state, &key('C')), vec![AppCommand::ClearCurve]);
    assert_eq!(map_event_to_commands(&state, &key('h')), vec![AppCommand::OpenHelp]);
    assert_eq!(map_event_to_commands(&state, &key('q')), vec![AppCommand::RequestExit]);
    assert_eq!(
        map_event_to_commands(&state, &WindowEvent::KeyPress(Key::Named("Escape".into()))),
        vec![AppCommand::RequestExit]
    );
}

#[test]
fn help_overlay_closes_on_any_key_and_redraws_on_expose() {
    let mut state = AppState::new();
    state.mode = UiMode::HelpOverlay;

    assert_eq!(map_event_to_commands(&state, &key('x')), vec![AppCommand::CloseHelp]);
    assert_eq!(map_event_to_commands(&state, &key('h')), vec![AppCommand::CloseHelp]);
    assert_eq!(
        map_event_to_commands(&state, &WindowEvent::Expose),
        vec![AppCommand::RedrawHelp]
    );
    assert!(map_event_to_commands(&state, &click(PointerButton::Primary, 300, 300)).is_empty());
}

#[test]
fn rendering_drops_everything_but_close() {
    let mut state = AppState::new();
    state.mode = UiMode::Rendering;

    assert!(map_event_to_commands(&state, &key('c')).is_empty());
    assert!(map_event_to_commands(&state, &WindowEvent::Expose).is_empty());
    assert!(map_event_to_commands(&state, &click(PointerButton::Primary, 300, 300)).is_empty());
    assert_eq!(
        map_event_to_commands(&state, &WindowEvent::CloseRequested),
        vec![AppCommand::CancelRender, AppCommand::RequestExit]
    );
}
