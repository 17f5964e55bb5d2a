//! Geordnete Segment-Liste und das aktuell gezeichnete Segment.

use super::geometry::Point;
use super::Segment;

/// Zeichen-Zustand der Segment-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    /// Kein Segment in Arbeit
    #[default]
    Idle,
    /// Segment am Index `index` folgt dem Zeiger (immer das letzte Element)
    Drawing { index: usize },
}

/// Ungültiger Zustandsübergang der Segment-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrawingError {
    #[error("es wird bereits ein Segment gezeichnet")]
    AlreadyDrawing,
    #[error("es wird kein Segment gezeichnet")]
    NotDrawing,
}

/// Besitzt die Segmente in Zeichenreihenfolge.
///
/// Invariante: Höchstens ein Segment ist in Arbeit, und im Zustand
/// `Drawing` ist es immer das letzte Element der Liste.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
    state: DrawingState,
}

impl SegmentStore {
    /// Erstellt eine leere Segment-Liste.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            state: DrawingState::Idle,
        }
    }

    /// Alle Segmente inkl. des Segments in Arbeit.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Alle festgeschriebenen Segmente (ohne Segment in Arbeit).
    pub fn committed(&self) -> &[Segment] {
        match self.state {
            DrawingState::Idle => &self.segments,
            DrawingState::Drawing { index } => &self.segments[..index],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Das Segment in Arbeit, falls vorhanden.
    pub fn in_progress(&self) -> Option<&Segment> {
        match self.state {
            DrawingState::Idle => None,
            DrawingState::Drawing { index } => self.segments.get(index),
        }
    }

    /// Hängt ein neues Segment `point → point` an und wechselt in `Drawing`.
    pub fn begin_segment(&mut self, point: Point) -> Result<(), DrawingError> {
        if self.is_drawing() {
            return Err(DrawingError::AlreadyDrawing);
        }
        self.segments.push(Segment::at(point));
        self.state = DrawingState::Drawing {
            index: self.segments.len() - 1,
        };
        Ok(())
    }

    /// Setzt den Endpunkt des Segments in Arbeit (Vorschau beim Bewegen).
    pub fn update_in_progress_end(&mut self, point: Point) -> Result<(), DrawingError> {
        let segment = self.in_progress_mut()?;
        segment.end = point;
        Ok(())
    }

    /// Setzt den Endpunkt und schreibt das Segment fest.
    pub fn finish_segment(&mut self, point: Point) -> Result<(), DrawingError> {
        self.update_in_progress_end(point)?;
        self.state = DrawingState::Idle;
        Ok(())
    }

    /// Entfernt das Segment in Arbeit vollständig.
    pub fn cancel_in_progress_segment(&mut self) -> Result<Segment, DrawingError> {
        let DrawingState::Drawing { index } = self.state else {
            return Err(DrawingError::NotDrawing);
        };
        let removed = self.segments.remove(index);
        self.state = DrawingState::Idle;
        Ok(removed)
    }

    /// Leert die Liste und setzt den Zustand auf `Idle`.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.state = DrawingState::Idle;
    }

    fn in_progress_mut(&mut self) -> Result<&mut Segment, DrawingError> {
        match self.state {
            DrawingState::Idle => Err(DrawingError::NotDrawing),
            DrawingState::Drawing { index } => {
                self.segments.get_mut(index).ok_or(DrawingError::NotDrawing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_two_click_flow() {
        let mut store = SegmentStore::new();
        store.begin_segment(p(1.0, 1.0)).unwrap();
        assert_eq!(store.state(), DrawingState::Drawing { index: 0 });
        assert_eq!(store.segments()[0], Segment::at(p(1.0, 1.0)));

        store.update_in_progress_end(p(5.0, 2.0)).unwrap();
        assert_eq!(store.in_progress().unwrap().end, p(5.0, 2.0));
        assert!(store.committed().is_empty());

        store.finish_segment(p(8.0, 3.0)).unwrap();
        assert_eq!(store.state(), DrawingState::Idle);
        assert_eq!(store.segments(), &[Segment::new(p(1.0, 1.0), p(8.0, 3.0))]);
        assert_eq!(store.committed().len(), 1);
    }

    #[test]
    fn test_in_progress_is_always_last() {
        let mut store = SegmentStore::new();
        store.begin_segment(p(0.0, 0.0)).unwrap();
        store.finish_segment(p(1.0, 0.0)).unwrap();
        store.begin_segment(p(2.0, 0.0)).unwrap();
        assert_eq!(store.state(), DrawingState::Drawing { index: 1 });
        assert_eq!(store.in_progress(), store.segments().last());
    }

    #[test]
    fn test_cancel_removes_only_last() {
        let mut store = SegmentStore::new();
        for i in 0..3 {
            let x = i as f64;
            store.begin_segment(p(x, 0.0)).unwrap();
            store.finish_segment(p(x, 10.0)).unwrap();
        }
        let committed = store.segments().to_vec();

        store.begin_segment(p(50.0, 50.0)).unwrap();
        store.update_in_progress_end(p(60.0, 60.0)).unwrap();
        let removed = store.cancel_in_progress_segment().unwrap();

        assert_eq!(removed, Segment::new(p(50.0, 50.0), p(60.0, 60.0)));
        assert_eq!(store.segments(), committed.as_slice());
        assert_eq!(store.state(), DrawingState::Idle);
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let mut store = SegmentStore::new();
        assert_eq!(
            store.update_in_progress_end(p(1.0, 1.0)),
            Err(DrawingError::NotDrawing)
        );
        assert_eq!(store.finish_segment(p(1.0, 1.0)), Err(DrawingError::NotDrawing));
        assert_eq!(
            store.cancel_in_progress_segment(),
            Err(DrawingError::NotDrawing)
        );

        store.begin_segment(p(0.0, 0.0)).unwrap();
        assert_eq!(
            store.begin_segment(p(3.0, 3.0)),
            Err(DrawingError::AlreadyDrawing)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut store = SegmentStore::new();
        store.begin_segment(p(0.0, 0.0)).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.state(), DrawingState::Idle);
    }
}
