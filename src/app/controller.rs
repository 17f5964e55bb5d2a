//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::Renderer;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Nach jeder sichtbaren Änderung wird die Render-Szene inkl.
    /// Schnittpunkt-Erkennung neu aufgebaut.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let result = match command {
            // === Zeichnen ===
            AppCommand::BeginSegment { pos } => {
                handlers::drawing::begin_segment(state, pos);
                Ok(())
            }
            AppCommand::UpdateInProgressEnd { pos } => {
                handlers::drawing::update_in_progress_end(state, pos);
                Ok(())
            }
            AppCommand::FinishSegment { pos } => {
                handlers::drawing::finish_segment(state, pos);
                Ok(())
            }
            AppCommand::CancelInProgressSegment => {
                handlers::drawing::cancel_in_progress_segment(state);
                Ok(())
            }

            // === Kollaps ===
            AppCommand::StartCollapse => {
                handlers::collapse::start(state);
                Ok(())
            }
            AppCommand::AdvanceCollapse => {
                handlers::collapse::advance(state);
                Ok(())
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => {
                handlers::dialog::request_exit(state);
                Ok(())
            }
            AppCommand::OpenOptionsDialog => {
                handlers::dialog::open_options_dialog(state);
                Ok(())
            }
            AppCommand::CloseOptionsDialog => {
                handlers::dialog::close_options_dialog(state);
                Ok(())
            }
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
        };

        // Szene auch bei Persistenz-Fehlern aktualisieren: der State ist bereits geändert
        if state.scene_dirty {
            state.render_scene = render_scene::build(state);
            state.scene_dirty = false;
        }

        result
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Übergibt die zuletzt gebaute Szene an einen Renderer.
    pub fn render(&self, state: &AppState, renderer: &mut dyn Renderer) {
        renderer.render(&state.render_scene);
    }
}
