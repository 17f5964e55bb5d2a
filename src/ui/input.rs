//! Zeichenflächen-Input: Maus- und Tastatur-Events → AppIntent.

use crate::app::AppIntent;
use crate::core::Point;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Zeigerposition (lokal), um doppelte Moves zu vermeiden
    last_pointer: Option<Point>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Sammelt Events der Zeichenfläche und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Ecke von `response.rect`
    /// geliefert. Die Reihenfolge ist Move vor Klick, damit der Endpunkt beim
    /// zweiten Klick der Klickposition entspricht.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let origin = response.rect.min;
        let to_local = |pos: egui::Pos2| -> Point {
            let local = pos - origin;
            Point::new(local.x as f64, local.y as f64)
        };

        if let Some(hover) = response.hover_pos() {
            let pos = to_local(hover);
            if self.last_pointer != Some(pos) {
                self.last_pointer = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        // Auslösung beim Drücken: kein Klick geht durch Zeigerbewegung verloren
        let (primary, secondary, pointer_pos) = ui.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_pressed(egui::PointerButton::Secondary),
                i.pointer.interact_pos(),
            )
        });
        // Fenster über der Zeichenfläche (z.B. Optionen) schlucken den Klick
        let on_canvas = pointer_pos.filter(|pos| {
            response.rect.contains(*pos)
                && ui
                    .ctx()
                    .layer_id_at(*pos)
                    .is_none_or(|layer| layer == ui.layer_id())
        });
        if let Some(pointer_pos) = on_canvas {
            if primary {
                events.push(AppIntent::PrimaryActivation {
                    pos: to_local(pointer_pos),
                });
            } else if secondary {
                events.push(AppIntent::SecondaryActivation {
                    pos: to_local(pointer_pos),
                });
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::CancelDrawingRequested);
        }

        events
    }
}
