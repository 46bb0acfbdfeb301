//! Bezier Canvas.
//!
//! Kontrollpunkte per Maus setzen und die Bézier-Kurve mit
//! Fortschrittsanzeige zeichnen lassen.

use bezier_canvas::render::WINDOW_TITLE;
use bezier_canvas::{ui, AppController, AppState, Canvas, CanvasOptions, WindowEvent};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier Canvas v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen nur über die Umgebungsvariable überschreibbar
        let canvas_options = CanvasOptions::load_from_env();
        let size = [
            canvas_options.window_size[0] as f32,
            canvas_options.window_size[1] as f32,
        ];

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(size)
                .with_resizable(false)
                .with_title(WINDOW_TITLE),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(CanvasApp::new(canvas_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CanvasApp {
    state: AppState,
    controller: AppController,
    canvas: Canvas,
    /// Größe der Zeichenfläche beim letzten Frame (für Expose nach Größenänderung)
    last_size: Option<egui::Vec2>,
}

impl CanvasApp {
    fn new(options: CanvasOptions) -> Self {
        let controller = AppController::with_frame_budget(options.samples_per_frame);
        let canvas = Canvas::from_options(&options);

        Self {
            state: AppState::with_options(options),
            controller,
            canvas,
            last_size: None,
        }
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let mut events = Vec::new();
                if self.last_size != Some(rect.size()) {
                    self.last_size = Some(rect.size());
                    events.push(WindowEvent::Expose);
                }
                events.extend(ui::collect_window_events(ctx, rect.min));

                self.process_events(events);

                let rendering = self
                    .controller
                    .advance_render(&mut self.state, &mut self.canvas);

                ui::paint_canvas(ui.painter(), rect.min, &self.canvas, &self.state.options);

                if rendering {
                    ctx.request_repaint();
                }
            });

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl CanvasApp {
    fn process_events(&mut self, events: Vec<WindowEvent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_event(&mut self.state, &mut self.canvas, &event)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
