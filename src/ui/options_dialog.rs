//! Optionen-Dialog für Animation, Erkennung, Farben und Größen.

use crate::app::{AppIntent, AppState};
use crate::shared::options::INTERSECTION_TOLERANCE_MAX;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Kollaps ─────────────────────────────────────────
            ui.collapsing("Kollaps-Animation", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Dauer (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.collapse_duration_ms)
                                .range(100..=60_000)
                                .speed(10),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Schritte:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.collapse_step_count)
                                .range(2..=10_000)
                                .speed(1),
                        )
                        .changed();
                });
                ui.label(format!(
                    "Tick-Periode: {:?}",
                    opts.collapse_config().tick_interval()
                ));
            });

            // ── Erkennung ───────────────────────────────────────
            ui.collapsing("Schnittpunkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Toleranz (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.intersection_tolerance)
                                .range(0.0..=INTERSECTION_TOLERANCE_MAX)
                                .speed(0.001),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Marker-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.marker_radius)
                                .range(1.0..=30.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Füllung:", &mut opts.marker_fill_color);
                changed |= color_edit(ui, "Umriss:", &mut opts.marker_outline_color);
            });

            // ── Linien ──────────────────────────────────────────
            ui.collapsing("Linien", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Breite (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.line_width)
                                .range(0.5..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.line_color);
                changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_background_color);
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
