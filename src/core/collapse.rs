//! Kollaps-Animation: Segmente schrumpfen symmetrisch entlang ihrer eigenen
//! Geraden auf ihren Mittelpunkt zu, bis sie verschwinden.
//!
//! Zustandsmaschine `Idle → Collapsing → Idle`. Jeder Tick leitet einen neuen
//! Frame ausschließlich aus dem beim Start kopierten Snapshot ab; die
//! Live-Segmente werden hier nie verändert.

use super::{Point, Segment};
use std::sync::Arc;
use std::time::Duration;

/// Standard-Gesamtdauer der Animation in Millisekunden.
pub const COLLAPSE_TOTAL_DURATION_MS: u64 = 5000;
/// Standard-Anzahl der Schritte (Auflösung der Animation).
pub const COLLAPSE_STEP_COUNT: u32 = 250;

/// Zeitliche Parameter einer Kollaps-Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseConfig {
    pub total_duration_ms: u64,
    pub step_count: u32,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            total_duration_ms: COLLAPSE_TOTAL_DURATION_MS,
            step_count: COLLAPSE_STEP_COUNT,
        }
    }
}

impl CollapseConfig {
    /// Erstellt eine Konfiguration; `step_count` wird auf mindestens 2 angehoben.
    pub fn new(total_duration_ms: u64, step_count: u32) -> Self {
        Self {
            total_duration_ms,
            step_count: step_count.max(2),
        }
    }

    /// Tick-Periode `total_duration_ms / step_count` (mindestens 1 ms).
    pub fn tick_interval(&self) -> Duration {
        let ms = self.total_duration_ms / u64::from(self.step_count.max(1));
        Duration::from_millis(ms.max(1))
    }

    /// Schritt, bei dem die Segmente Länge 0 erreichen und die Animation endet.
    pub fn final_step(&self) -> u32 {
        self.step_count / 2
    }
}

/// Zustand der Animation.
#[derive(Debug, Clone, Default)]
pub enum CollapseState {
    #[default]
    Idle,
    Collapsing {
        /// Unveränderliche Kopie der Original-Geometrie
        snapshot: Arc<[Segment]>,
        /// Wächst um 1 pro Tick, startet bei 1
        step_index: u32,
        config: CollapseConfig,
    },
}

/// Ergebnis eines Ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum CollapseTick {
    /// Neuer abgeleiteter Frame zum Rendern
    Frame(Vec<Segment>),
    /// Letzter Schritt erreicht: Timer stoppen, Segmente leeren
    Finished,
}

/// Ungültiger Zustandsübergang der Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollapseError {
    #[error("Kollaps-Animation läuft bereits")]
    AlreadyCollapsing,
    #[error("keine Segmente zum Kollabieren")]
    NothingToCollapse,
    #[error("keine Kollaps-Animation aktiv")]
    NotCollapsing,
}

/// Zeitgesteuerte Zustandsmaschine der Kollaps-Animation.
#[derive(Debug, Clone, Default)]
pub struct CollapseAnimator {
    state: CollapseState,
    frame: Vec<Segment>,
}

impl CollapseAnimator {
    pub fn new() -> Self {
        Self {
            state: CollapseState::Idle,
            frame: Vec::new(),
        }
    }

    /// Zeitparameter der laufenden Animation (beim Start festgelegt).
    pub fn config(&self) -> Option<CollapseConfig> {
        match &self.state {
            CollapseState::Idle => None,
            CollapseState::Collapsing { config, .. } => Some(*config),
        }
    }

    pub fn is_collapsing(&self) -> bool {
        matches!(self.state, CollapseState::Collapsing { .. })
    }

    /// Aktueller Schritt, solange die Animation läuft.
    pub fn step_index(&self) -> Option<u32> {
        match &self.state {
            CollapseState::Idle => None,
            CollapseState::Collapsing { step_index, .. } => Some(*step_index),
        }
    }

    /// Zuletzt veröffentlichter Frame (leer im Zustand `Idle`).
    pub fn current_frame(&self) -> &[Segment] {
        &self.frame
    }

    /// Startet die Animation mit einer tiefen Kopie von `segments`.
    ///
    /// Gibt die Tick-Periode für den Scheduler zurück.
    pub fn start(
        &mut self,
        segments: &[Segment],
        config: CollapseConfig,
    ) -> Result<Duration, CollapseError> {
        if self.is_collapsing() {
            return Err(CollapseError::AlreadyCollapsing);
        }
        if segments.is_empty() {
            return Err(CollapseError::NothingToCollapse);
        }

        self.frame = segments.to_vec();
        self.state = CollapseState::Collapsing {
            snapshot: Arc::from(segments),
            step_index: 1,
            config,
        };
        Ok(config.tick_interval())
    }

    /// Berechnet den nächsten Frame aus dem Snapshot und erhöht den Schritt.
    ///
    /// Erreicht der Schritt `step_count / 2`, endet die Animation mit
    /// [`CollapseTick::Finished`] und der Zustand wird wieder `Idle`.
    pub fn tick(&mut self) -> Result<CollapseTick, CollapseError> {
        let (frame, finished) = match &mut self.state {
            CollapseState::Idle => return Err(CollapseError::NotCollapsing),
            CollapseState::Collapsing {
                snapshot,
                step_index,
                config,
            } => {
                let frame: Vec<Segment> = snapshot
                    .iter()
                    .filter_map(|original| {
                        collapse_segment(original, *step_index, config.step_count)
                    })
                    .collect();
                *step_index += 1;
                (frame, *step_index >= config.final_step())
            }
        };

        if finished {
            self.state = CollapseState::Idle;
            self.frame.clear();
            return Ok(CollapseTick::Finished);
        }

        self.frame = frame.clone();
        Ok(CollapseTick::Frame(frame))
    }
}

/// Verkürzt `original` für Schritt `step_index` von `step_count`.
///
/// Die dominante Achse (größere Ausdehnung, bei Gleichstand y) wird von beiden
/// Enden um `ausdehnung / step_count * step_index` nach innen verschoben, die
/// andere Achse aus der Original-Geradengleichung neu berechnet. Das Ergebnis
/// bleibt kollinear zum Original und zentriert auf dessen Mittelpunkt.
///
/// `None` für ein degeneriertes Original (gilt als bereits kollabiert).
pub fn collapse_segment(original: &Segment, step_index: u32, step_count: u32) -> Option<Segment> {
    if original.is_degenerate() {
        return None;
    }
    let (s, e) = (original.start, original.end);
    let dx = (e.x - s.x).abs();
    let dy = (e.y - s.y).abs();
    let line = original.line_equation();
    let step = f64::from(step_index);
    let count = f64::from(step_count.max(1));

    if dx > dy {
        let shift = dx / count * step;
        let (start_x, end_x) = if e.x > s.x {
            (s.x + shift, e.x - shift)
        } else {
            (s.x - shift, e.x + shift)
        };
        Some(Segment::new(
            Point::new(start_x, line.solve_y(start_x)?),
            Point::new(end_x, line.solve_y(end_x)?),
        ))
    } else {
        let shift = dy / count * step;
        let (start_y, end_y) = if e.y > s.y {
            (s.y + shift, e.y - shift)
        } else {
            (s.y - shift, e.y + shift)
        };
        Some(Segment::new(
            Point::new(line.solve_x(start_y)?, start_y),
            Point::new(line.solve_x(end_y)?, end_y),
        ))
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
    fn test_config_defaults() {
        let config = CollapseConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
        assert_eq!(config.final_step(), 125);
        assert_eq!(CollapseConfig::new(1000, 0).step_count, 2);
    }

    #[test]
    fn test_horizontal_dominant_shrinks_symmetrically() {
        let original = seg(0.0, 0.0, 100.0, 20.0);
        let shrunk = collapse_segment(&original, 25, 250).unwrap();
        assert_relative_eq!(shrunk.start.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.x, 90.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.start.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.y, 18.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.midpoint().x, original.midpoint().x, epsilon = 1e-9);
        assert_relative_eq!(shrunk.midpoint().y, original.midpoint().y, epsilon = 1e-9);
    }

    #[test]
    fn test_reversed_direction_shrinks_inward() {
        let original = seg(100.0, 20.0, 0.0, 0.0);
        let shrunk = collapse_segment(&original, 25, 250).unwrap();
        assert_relative_eq!(shrunk.start.x, 90.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.start.y, 18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_vertical_dominant_uses_y_axis() {
        let original = seg(3.0, 50.0, 3.0, 0.0);
        let shrunk = collapse_segment(&original, 50, 250).unwrap();
        assert_relative_eq!(shrunk.start.y, 40.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.start.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diagonal_tie_uses_y_axis() {
        let original = seg(0.0, 0.0, 10.0, 10.0);
        let shrunk = collapse_segment(&original, 50, 250).unwrap();
        assert_relative_eq!(shrunk.start.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.start.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(shrunk.end.y, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shrunk_segment_stays_on_original_line() {
        let original = seg(12.0, 7.0, 91.0, 43.0);
        let line = original.line_equation();
        for step in [1, 17, 60, 124] {
            let s = collapse_segment(&original, step, 250).unwrap();
            let start_residual = line.a * s.start.x + line.b * s.start.y + line.c;
            let end_residual = line.a * s.end.x + line.b * s.end.y + line.c;
            assert_relative_eq!(start_residual, 0.0, epsilon = 1e-9);
            assert_relative_eq!(end_residual, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_length_decreases_monotonically_to_zero() {
        let original = seg(5.0, 80.0, 45.0, 10.0);
        let mut previous = original.length();
        for step in 1..=125 {
            let length = collapse_segment(&original, step, 250).unwrap().length();
            assert!(length < previous);
            previous = length;
        }
        assert_relative_eq!(previous, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_segment_is_skipped() {
        assert_eq!(collapse_segment(&seg(4.0, 4.0, 4.0, 4.0), 3, 250), None);
    }

    #[test]
    fn test_start_requires_segments_and_idle() {
        let mut animator = CollapseAnimator::new();
        assert_eq!(
            animator.start(&[], CollapseConfig::default()),
            Err(CollapseError::NothingToCollapse)
        );
        let segments = [seg(0.0, 0.0, 10.0, 0.0)];
        assert_eq!(
            animator.start(&segments, CollapseConfig::default()),
            Ok(Duration::from_millis(20))
        );
        assert_eq!(animator.step_index(), Some(1));
        assert_eq!(animator.current_frame(), &segments);
        assert_eq!(
            animator.start(&segments, CollapseConfig::default()),
            Err(CollapseError::AlreadyCollapsing)
        );
    }

    #[test]
    fn test_config_is_fixed_at_start() {
        let mut animator = CollapseAnimator::new();
        assert_eq!(animator.config(), None);

        let config = CollapseConfig::new(1000, 40);
        animator.start(&[seg(0.0, 0.0, 10.0, 0.0)], config).unwrap();
        animator.tick().unwrap();
        assert_eq!(animator.config(), Some(config));

        while animator.is_collapsing() {
            animator.tick().unwrap();
        }
        assert_eq!(animator.config(), None);
    }

    #[test]
    fn test_tick_without_start_is_rejected() {
        let mut animator = CollapseAnimator::new();
        assert_eq!(animator.tick(), Err(CollapseError::NotCollapsing));
    }

    #[test]
    fn test_ticks_use_snapshot_not_previous_frame() {
        let mut animator = CollapseAnimator::new();
        let original = seg(0.0, 0.0, 250.0, 0.0);
        animator.start(&[original], CollapseConfig::default()).unwrap();

        animator.tick().unwrap();
        let CollapseTick::Frame(frame) = animator.tick().unwrap() else {
            panic!("Frame erwartet");
        };
        // Schritt 2: je 2 px von beiden Seiten, nicht kumulativ
        assert_eq!(frame, vec![seg(2.0, 0.0, 248.0, 0.0)]);
        assert_eq!(animator.step_index(), Some(3));
    }

    #[test]
    fn test_runs_to_completion_after_final_step() {
        let mut animator = CollapseAnimator::new();
        animator
            .start(&[seg(0.0, 0.0, 10.0, 0.0)], CollapseConfig::default())
            .unwrap();

        let mut ticks = 0;
        loop {
            ticks += 1;
            if animator.tick().unwrap() == CollapseTick::Finished {
                break;
            }
        }
        assert_eq!(ticks, 124);
        assert!(!animator.is_collapsing());
        assert!(animator.current_frame().is_empty());
    }
}
