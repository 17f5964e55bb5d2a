//! Line Collapse Editor.
//!
//! Zeichenfläche für gerade Liniensegmente mit Live-Schnittpunkt-Markern
//! und animiertem Zusammenziehen aller Linien.

use eframe::egui;
use line_collapse_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use std::time::Instant;

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

        log::info!(
            "Line Collapse Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Line Collapse Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Line Collapse Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Fläche der Zeichenfläche im letzten Frame
    canvas_rect: egui::Rect,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;
        let controller = AppController::new();
        state.render_scene = controller.build_render_scene(&state);

        Self {
            state,
            controller,
            input: ui::InputState::new(),
            canvas_rect: egui::Rect::NOTHING,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Fällige Animations-Ticks zuerst, in Reihenfolge
        let due = self.state.scheduler.due_ticks(Instant::now());
        self.process_events((0..due).map(|_| AppIntent::CollapseTickElapsed).collect());

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();
        self.process_events(events);

        self.paint_canvas(ctx);

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
                self.canvas_rect = rect;
                events.extend(self.input.collect_canvas_events(ui, &response));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                self.state.ui.status_message = Some(format!("{:#}", e));
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Zeichnet die aktuelle Szene unterhalb der Panels.
    fn paint_canvas(&self, ctx: &egui::Context) {
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(self.canvas_rect);
        let mut renderer = render::CanvasRenderer::new(&painter, self.canvas_rect);
        self.controller.render(&self.state, &mut renderer);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events || self.state.ui.show_options_dialog {
            ctx.request_repaint();
        }
        // Nächsten Animations-Tick einplanen
        if let Some(delay) = self.state.scheduler.next_deadline(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
