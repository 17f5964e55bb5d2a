//! Zeichnen der Render-Szene auf die egui-Zeichenfläche.

pub use crate::shared::RenderScene;

use crate::core::Point;

/// Empfänger fertig aufgebauter Szenen.
///
/// Der Controller übergibt nur die Szene; der Renderer entscheidet selbst,
/// wohin gezeichnet wird.
pub trait Renderer {
    /// Zeichnet Segmente und Schnittpunkt-Marker der Szene.
    fn render(&mut self, scene: &RenderScene);
}

/// Renderer auf Basis des egui-Painters.
///
/// Szenen-Koordinaten sind lokal zur Zeichenfläche (Ursprung oben links).
pub struct CanvasRenderer<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> CanvasRenderer<'a> {
    /// Erstellt einen Renderer für die Fläche `rect`.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Point) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x as f32, p.y as f32)
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn render(&mut self, scene: &RenderScene) {
        let options = &scene.options;
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(options.canvas_background_color));

        let line_stroke = egui::Stroke::new(options.line_width, to_color32(options.line_color));
        for segment in scene.segments.iter() {
            let a = self.to_screen(segment.start);
            let b = self.to_screen(segment.end);
            if segment.is_degenerate() {
                // Punkt statt unsichtbarem Null-Segment
                self.painter
                    .circle_filled(a, options.line_width * 0.5, line_stroke.color);
            } else {
                self.painter.line_segment([a, b], line_stroke);
            }
        }

        let fill = to_color32(options.marker_fill_color);
        let outline = egui::Stroke::new(1.0, to_color32(options.marker_outline_color));
        for hit in scene.intersections.iter() {
            self.painter.circle(
                self.to_screen(hit.position),
                options.marker_radius,
                fill,
                outline,
            );
        }
    }
}

/// Konvertiert eine RGBA-Farbe `[0..1]` in `egui::Color32`.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::to_color32;

    #[test]
    fn test_to_color32_maps_unit_range() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(to_color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(to_color32([2.0, -1.0, 1.0, 1.0]), egui::Color32::from_rgb(255, 0, 255));
    }
}
