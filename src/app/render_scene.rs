//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{intersection, Segment};
use crate::shared::{RenderScene, SceneMode};
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Während des Kollapses wird der abgeleitete Frame gezeigt, sonst die
/// Segment-Liste inkl. Segment in Arbeit. Die Schnittpunkte werden jedes Mal
/// vollständig neu berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let mode = state.scene_mode();
    let segments: Arc<[Segment]> = match mode {
        SceneMode::Collapsing => Arc::from(state.collapse.current_frame()),
        SceneMode::Idle | SceneMode::Drawing => Arc::from(state.segments.segments()),
    };

    let report = intersection::detect(&segments, state.options.intersection_tolerance);
    log::debug!(
        "Szene: {} Segmente, {} Paare geprüft, {} Schnittpunkte",
        segments.len(),
        report.pairs_evaluated,
        report.points.len()
    );

    RenderScene {
        segments,
        intersections: Arc::from(report.points),
        mode,
        options: state.options.clone(),
    }
}
