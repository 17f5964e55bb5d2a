//! Toolbar mit Kollaps-Auslöser und Optionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Deaktiviert während der Animation oder ohne festgeschriebene Segmente
            let collapse_btn = egui::Button::new("Linien kollabieren")
                .selected(state.is_collapsing());
            if ui
                .add_enabled(state.can_collapse(), collapse_btn)
                .on_hover_text("Alle Linien zu ihrem Mittelpunkt zusammenziehen")
                .clicked()
            {
                events.push(AppIntent::CollapseRequested);
            }

            ui.separator();

            if ui.button("Optionen…").clicked() {
                events.push(AppIntent::OpenOptionsDialogRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
