use bezier_canvas::app::{Key, PointerButton};
use bezier_canvas::render::{DrawOp, Pen, HINT};
use bezier_canvas::{
    AppCommand, AppController, AppState, Canvas, CanvasOptions, HintState, UiMode, WindowEvent,
};
use glam::IVec2;

fn setup_with(options: CanvasOptions) -> (AppController, AppState, Canvas) {
    let canvas = Canvas::from_options(&options);
    (AppController::new(), AppState::with_options(options), canvas)
}

fn setup() -> (AppController, AppState, Canvas) {
    let mut options = CanvasOptions::default();
    options.sweep_samples = 10_000;
    setup_with(options)
}

fn send(
    controller: &mut AppController,
    state: &mut AppState,
    canvas: &mut Canvas,
    event: WindowEvent,
) {
    controller
        .handle_event(state, canvas, &event)
        .expect("Event sollte ohne Fehler durchlaufen");
}

fn click(x: i32, y: i32) -> WindowEvent {
    WindowEvent::ButtonPress {
        button: PointerButton::Primary,
        x,
        y,
    }
}

fn right_click() -> WindowEvent {
    WindowEvent::ButtonPress {
        button: PointerButton::Secondary,
        x: 0,
        y: 0,
    }
}

fn key(c: char) -> WindowEvent {
    WindowEvent::KeyPress(Key::Char(c))
}

fn hint_count(canvas: &Canvas) -> usize {
    canvas
        .primary_ops()
        .iter()
        .filter(|op| op.text() == Some(HINT))
        .count()
}

#[test]
fn test_first_expose_draws_chrome_and_hint_once() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);

    assert_eq!(state.hint, HintState::Visible);
    assert_eq!(state.mode, UiMode::Idle);
    assert_eq!(hint_count(&canvas), 1);
}

#[test]
fn test_quadratic_curve_end_to_end() {
    // Kleines Fenster, damit (100,100), (200,50), (300,100) im Innenbereich liegen
    let mut options = CanvasOptions::default();
    options.window_size = [400, 150];
    options.rect_size = [300, 100];
    options.sweep_samples = 10_000;
    let (mut controller, mut state, mut canvas) = setup_with(options);

    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    for (x, y) in [(100, 100), (200, 50), (300, 100)] {
        send(&mut controller, &mut state, &mut canvas, click(x, y));
    }
    assert_eq!(state.session.point_count(), 3);
    assert_eq!(state.mode, UiMode::Collecting);

    send(&mut controller, &mut state, &mut canvas, right_click());

    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.mode, UiMode::Idle);
    let report = state.last_render.expect("Render-Ergebnis erwartet");
    assert_eq!(report.degree, 2);
    assert_eq!(report.end_point, IVec2::new(300, 100));

    let passes_midpoint = canvas.primary_ops().iter().any(|op| {
        matches!(
            op,
            DrawOp::Line { pen: Pen::Curve, to, .. } if *to == IVec2::new(200, 75)
        )
    });
    assert!(passes_midpoint);
}

#[test]
fn test_single_point_render_empties_session() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, click(400, 300));
    assert_eq!(state.session.point_count(), 1);
    send(&mut controller, &mut state, &mut canvas, right_click());

    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.mode, UiMode::Idle);
    let report = state.last_render.expect("Render-Ergebnis erwartet");
    assert_eq!(report.degree, 0);
    assert_eq!(report.end_point, IVec2::new(400, 300));
    let curve_lines = canvas
        .primary_ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { pen: Pen::Curve, .. }))
        .count();
    assert_eq!(curve_lines, 0);
}

#[test]
fn test_clear_with_two_points_does_not_bring_hint_back() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    send(&mut controller, &mut state, &mut canvas, click(300, 300));
    send(&mut controller, &mut state, &mut canvas, click(400, 350));
    assert_eq!(state.session.point_count(), 2);
    assert_eq!(state.hint, HintState::Consumed);

    send(&mut controller, &mut state, &mut canvas, key('c'));

    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.mode, UiMode::Idle);
    // Nur noch Titel und Rahmen
    assert_eq!(canvas.primary_ops().len(), 2);
    assert!(matches!(canvas.primary_ops()[1], DrawOp::Rect { pen: Pen::Frame, .. }));

    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    assert_eq!(hint_count(&canvas), 0);
}

#[test]
fn test_help_overlay_leaves_canvas_untouched() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    for (x, y) in [(200, 200), (400, 500), (700, 250)] {
        send(&mut controller, &mut state, &mut canvas, click(x, y));
    }
    send(&mut controller, &mut state, &mut canvas, right_click());
    send(&mut controller, &mut state, &mut canvas, click(500, 400));
    let before = canvas.primary_ops().to_vec();

    send(&mut controller, &mut state, &mut canvas, key('h'));
    assert_eq!(state.mode, UiMode::HelpOverlay);
    let help_lines = canvas.overlay_ops().map(<[DrawOp]>::len);
    assert_eq!(help_lines, Some(6));

    // Clicks im Overlay werden ignoriert, Expose zeichnet denselben Text
    send(&mut controller, &mut state, &mut canvas, click(300, 300));
    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    assert_eq!(canvas.overlay_ops().map(<[DrawOp]>::len), help_lines);
    assert_eq!(state.session.point_count(), 1);

    send(&mut controller, &mut state, &mut canvas, key('x'));

    assert!(canvas.overlay_ops().is_none());
    assert_eq!(canvas.primary_ops(), before.as_slice());
    assert_eq!(state.mode, UiMode::Collecting);
    assert!(!state.should_exit);
}

#[test]
fn test_other_key_requests_exit() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, key('q'));

    assert!(state.should_exit);
    assert_eq!(state.command_log.last(), Some(&AppCommand::RequestExit));
}

#[test]
fn test_rejected_clicks_still_consume_hint() {
    let (mut controller, mut state, mut canvas) = setup();
    send(&mut controller, &mut state, &mut canvas, WindowEvent::Expose);
    let bounds = state.session.bounds();

    send(&mut controller, &mut state, &mut canvas, click(5, 5));
    send(
        &mut controller,
        &mut state,
        &mut canvas,
        click(bounds.x + 2, bounds.y + 100),
    );

    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.mode, UiMode::Idle);
    assert_eq!(state.hint, HintState::Consumed);
    assert_eq!(hint_count(&canvas), 0);
    assert_eq!(canvas.primary_ops().len(), 2);
}

#[test]
fn test_secondary_click_without_points_does_nothing() {
    let (mut controller, mut state, mut canvas) = setup();

    send(&mut controller, &mut state, &mut canvas, right_click());

    assert!(state.command_log.is_empty());
    assert!(state.last_render.is_none());
}

#[test]
fn test_overflowing_curve_reports_error_and_discards_points() {
    let (mut controller, mut state, mut canvas) = setup();
    for i in 0..70 {
        send(&mut controller, &mut state, &mut canvas, click(150 + i * 5, 300));
    }
    assert_eq!(state.session.point_count(), 70);

    let result = controller.handle_event(&mut state, &mut canvas, &right_click());

    let err = result.expect_err("Überlauf sollte als Fehler gemeldet werden");
    assert!(format!("{err:#}").contains("übersteigt u64"));
    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.mode, UiMode::Idle);
    assert!(state.last_render.is_none());
}

#[test]
fn test_windowed_render_drops_input_until_finished() {
    let (_, mut state, mut canvas) = setup();
    let mut controller = AppController::with_frame_budget(1_000);

    send(&mut controller, &mut state, &mut canvas, click(300, 300));
    send(&mut controller, &mut state, &mut canvas, click(500, 400));
    send(&mut controller, &mut state, &mut canvas, right_click());
    assert_eq!(state.mode, UiMode::Rendering);

    send(&mut controller, &mut state, &mut canvas, click(600, 300));
    send(&mut controller, &mut state, &mut canvas, key('c'));
    assert_eq!(state.session.point_count(), 2);

    let mut frames = 0;
    while controller.advance_render(&mut state, &mut canvas) {
        frames += 1;
    }

    assert_eq!(frames, 10);
    assert_eq!(state.mode, UiMode::Idle);
    assert_eq!(state.session.point_count(), 0);
    assert_eq!(state.last_render.map(|r| r.samples), Some(10_000));
}

#[test]
fn test_close_during_render_cancels_and_exits() {
    let (_, mut state, mut canvas) = setup();
    let mut controller = AppController::with_frame_budget(100);

    send(&mut controller, &mut state, &mut canvas, click(300, 300));
    send(&mut controller, &mut state, &mut canvas, right_click());
    assert!(controller.advance_render(&mut state, &mut canvas));

    send(&mut controller, &mut state, &mut canvas, WindowEvent::CloseRequested);

    assert!(state.should_exit);
    assert!(!state.is_rendering());
    assert_eq!(state.mode, UiMode::Idle);
    assert!(state.last_render.is_none());
    assert!(!controller.advance_render(&mut state, &mut canvas));
}
