//! Liniensegment als persistente Zeicheneinheit.

use super::geometry::{BoundingBox, LineEquation, Point};
use serde::{Deserialize, Serialize};

/// Gerades Segment zwischen zwei Punkten.
///
/// Start == Ende ist erlaubt und steht für einen Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Erstellt ein Segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment der Länge 0 an `point` (Ausgangszustand beim Zeichnen).
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    /// `true`, wenn Start und Ende zusammenfallen.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn line_equation(&self) -> LineEquation {
        LineEquation::through(self)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of(self)
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}
