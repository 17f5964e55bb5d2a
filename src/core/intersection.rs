//! Paarweise Schnittpunkt-Erkennung über die komplette Segment-Liste.
//!
//! Jeder Durchlauf rechnet von Grund auf neu (kein inkrementeller Zustand);
//! die Segment-Anzahl bleibt bei handgezeichneten Linien klein, O(n²) Paare.

use super::geometry::Point;
use super::Segment;

/// Abgeleiteter Schnittpunkt zweier Segmente (nie Teil der Segment-Liste).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    pub position: Point,
    /// Indizes `(i, j)` mit `i < j` des erzeugenden Paars
    pub pair: (usize, usize),
}

/// Ergebnis eines Erkennungs-Durchlaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionReport {
    pub points: Vec<IntersectionPoint>,
    /// Anzahl geprüfter ungeordneter Paare (`n·(n-1)/2`)
    pub pairs_evaluated: usize,
}

/// Prüft jedes ungeordnete Paar `(i, j)`, `i < j`, genau einmal.
///
/// Ein Paar liefert einen Punkt, wenn beide Geraden wohldefiniert und nicht
/// parallel sind und der Schnittpunkt der unendlichen Geraden in beiden
/// Bounding-Boxen liegt (um `tolerance` erweitert).
///
/// Kollineare, überlappende Segmente liefern keinen Punkt (Determinante 0).
pub fn detect(segments: &[Segment], tolerance: f64) -> IntersectionReport {
    let lines: Vec<_> = segments
        .iter()
        .map(|s| (s.line_equation(), s.bounding_box()))
        .collect();

    let mut report = IntersectionReport::default();

    for (i, (line_i, bb_i)) in lines.iter().enumerate() {
        for (j, (line_j, bb_j)) in lines.iter().enumerate().skip(i + 1) {
            report.pairs_evaluated += 1;

            let Some(position) = line_i.intersect(line_j) else {
                continue;
            };
            if bb_i.contains_with_tolerance(position, tolerance)
                && bb_j.contains_with_tolerance(position, tolerance)
            {
                report.points.push(IntersectionPoint {
                    position,
                    pair: (i, j),
                });
            }
        }
    }

    report
}
