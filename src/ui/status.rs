//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::shared::SceneMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let scene = &state.render_scene;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Segmente: {} | Schnittpunkte: {}",
                scene.segments.len(),
                scene.intersections.len()
            ));

            ui.separator();

            let mode = match scene.mode {
                SceneMode::Idle => "Bereit".to_string(),
                SceneMode::Drawing => "Zeichnen (Rechtsklick/Esc: abbrechen)".to_string(),
                SceneMode::Collapsing => match state.collapse_progress() {
                    Some((step, final_step)) => {
                        format!("Kollaps: Schritt {}/{}", step, final_step)
                    }
                    None => "Kollaps".to_string(),
                },
            };
            ui.label(format!("Modus: {}", mode));

            // Statusnachricht (z.B. Fehler beim Speichern)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
