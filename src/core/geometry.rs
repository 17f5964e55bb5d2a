//! Reine Geometrie-Funktionen: Geradengleichung, Schnitt zweier Geraden, Bounding-Box.
//!
//! Alle Funktionen sind zustandslos. Punkte sind Pixel-Koordinaten der Zeichenfläche.

use super::Segment;

/// Punkt auf der Zeichenfläche (Pixel, ohne feste Einheit).
pub type Point = glam::DVec2;

/// Implizite Geradengleichung `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    /// Gerade durch Start- und Endpunkt eines Segments.
    ///
    /// Bei einem degenerierten Segment (Start == Ende) gilt `a = b = 0`;
    /// siehe [`LineEquation::is_degenerate`].
    pub fn through(segment: &Segment) -> Self {
        let (s, e) = (segment.start, segment.end);
        Self {
            a: e.y - s.y,
            b: s.x - e.x,
            c: -s.x * e.y + s.y * e.x,
        }
    }

    /// `true`, wenn keine eindeutige Gerade existiert (`a = b = 0`).
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Determinante `a1·b2 - a2·b1` des 2×2-Gleichungssystems.
    pub fn determinant(&self, other: &LineEquation) -> f64 {
        self.a * other.b - other.a * self.b
    }

    /// Schnittpunkt zweier unendlicher Geraden.
    ///
    /// `None` bei Determinante 0 (parallel oder identisch) oder wenn eine der
    /// beiden Geraden degeneriert ist. Kein NaN-Durchreichen.
    pub fn intersect(&self, other: &LineEquation) -> Option<Point> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        let d = self.determinant(other);
        if d == 0.0 {
            return None;
        }
        Some(Point::new(
            (self.b * other.c - other.b * self.c) / d,
            (other.a * self.c - self.a * other.c) / d,
        ))
    }

    /// Löst die Gleichung nach `y` auf. `None` bei senkrechter Gerade (`b = 0`).
    pub fn solve_y(&self, x: f64) -> Option<f64> {
        if self.b == 0.0 {
            return None;
        }
        Some((-self.a * x - self.c) / self.b)
    }

    /// Löst die Gleichung nach `x` auf. `None` bei waagerechter Gerade (`a = 0`).
    pub fn solve_x(&self, y: f64) -> Option<f64> {
        if self.a == 0.0 {
            return None;
        }
        Some((-self.b * y - self.c) / self.a)
    }
}

/// Achsenparalleles Rechteck, aufgespannt von den Endpunkten eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Bounding-Box eines Segments.
    pub fn of(segment: &Segment) -> Self {
        Self {
            min: segment.start.min(segment.end),
            max: segment.start.max(segment.end),
        }
    }

    /// Inklusiver Enthaltensein-Test pro Achse.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_with_tolerance(point, 0.0)
    }

    /// Wie [`BoundingBox::contains`], die Box wird aber auf jeder Seite um
    /// `tolerance` erweitert (fängt Rundungsrauschen bei achsenparallelen Segmenten ab).
    pub fn contains_with_tolerance(&self, point: Point, tolerance: f64) -> bool {
        point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_line_coefficients() {
        let line = LineEquation::through(&seg(1.0, 2.0, 4.0, 6.0));
        assert_relative_eq!(line.a, 4.0);
        assert_relative_eq!(line.b, -3.0);
        assert_relative_eq!(line.c, -1.0 * 6.0 + 2.0 * 4.0);
        // Beide Endpunkte liegen auf der Geraden
        assert_relative_eq!(line.a * 1.0 + line.b * 2.0 + line.c, 0.0);
        assert_relative_eq!(line.a * 4.0 + line.b * 6.0 + line.c, 0.0);
    }

    #[test]
    fn test_degenerate_segment_has_no_line() {
        let line = LineEquation::through(&seg(3.0, 3.0, 3.0, 3.0));
        assert!(line.is_degenerate());
        let other = LineEquation::through(&seg(0.0, 0.0, 10.0, 10.0));
        assert_eq!(line.intersect(&other), None);
        assert_eq!(other.intersect(&line), None);
    }

    #[test]
    fn test_intersect_crossing_lines() {
        let l1 = LineEquation::through(&seg(0.0, 0.0, 10.0, 10.0));
        let l2 = LineEquation::through(&seg(0.0, 10.0, 10.0, 0.0));
        let p = l1.intersect(&l2).expect("Schnittpunkt erwartet");
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn test_intersect_parallel_is_none() {
        let l1 = LineEquation::through(&seg(0.0, 0.0, 10.0, 0.0));
        let l2 = LineEquation::through(&seg(0.0, 5.0, 10.0, 5.0));
        assert_eq!(l1.determinant(&l2), 0.0);
        assert_eq!(l1.intersect(&l2), None);
    }

    #[test]
    fn test_intersect_coincident_is_none() {
        let l1 = LineEquation::through(&seg(0.0, 0.0, 5.0, 5.0));
        let l2 = LineEquation::through(&seg(10.0, 10.0, 15.0, 15.0));
        assert_eq!(l1.intersect(&l2), None);
    }

    #[test]
    fn test_solve_axes() {
        let line = LineEquation::through(&seg(0.0, 1.0, 10.0, 6.0));
        assert_relative_eq!(line.solve_y(4.0).unwrap(), 3.0);
        assert_relative_eq!(line.solve_x(3.0).unwrap(), 4.0);

        let vertical = LineEquation::through(&seg(2.0, 0.0, 2.0, 8.0));
        assert_eq!(vertical.solve_y(2.0), None);
        let horizontal = LineEquation::through(&seg(0.0, 2.0, 8.0, 2.0));
        assert_eq!(horizontal.solve_x(2.0), None);
    }

    #[test]
    fn test_bounding_box_inclusive() {
        let bb = BoundingBox::of(&seg(10.0, 0.0, 0.0, 5.0));
        assert_eq!(bb.min, Point::new(0.0, 0.0));
        assert_eq!(bb.max, Point::new(10.0, 5.0));
        assert!(bb.contains(Point::new(0.0, 0.0)));
        assert!(bb.contains(Point::new(10.0, 5.0)));
        assert!(bb.contains(Point::new(4.0, 2.0)));
        assert!(!bb.contains(Point::new(10.5, 2.0)));
        assert!(!bb.contains(Point::new(4.0, -0.1)));
    }

    #[test]
    fn test_bounding_box_tolerance() {
        let bb = BoundingBox::of(&seg(0.0, 5.0, 10.0, 5.0));
        let noisy = Point::new(3.0, 5.0 + 1e-12);
        assert!(!bb.contains(noisy));
        assert!(bb.contains_with_tolerance(noisy, 1e-9));
    }
}
