//! Handler für das Zeichnen von Segmenten (Zwei-Klick-Ablauf).
//!
//! Ungültige Übergänge (z.B. Klick während der Kollaps-Animation) sind
//! No-ops und werden nur auf Debug-Level protokolliert.

use crate::app::AppState;
use crate::core::Point;

/// Erster Klick: neues Segment `pos → pos` anhängen.
pub fn begin_segment(state: &mut AppState, pos: Point) {
    if state.is_collapsing() {
        log::debug!("Klick während Kollaps ignoriert");
        return;
    }
    match state.segments.begin_segment(pos) {
        Ok(()) => {
            log::debug!("Segment begonnen bei ({:.1}, {:.1})", pos.x, pos.y);
            state.mark_scene_dirty();
        }
        Err(e) => log::debug!("BeginSegment ignoriert: {}", e),
    }
}

/// Zeigerbewegung: Endpunkt des Segments in Arbeit nachführen.
pub fn update_in_progress_end(state: &mut AppState, pos: Point) {
    if state.is_collapsing() {
        return;
    }
    if state.segments.update_in_progress_end(pos).is_ok() {
        state.mark_scene_dirty();
    }
}

/// Zweiter Klick: Endpunkt setzen und Segment festschreiben.
pub fn finish_segment(state: &mut AppState, pos: Point) {
    if state.is_collapsing() {
        log::debug!("Klick während Kollaps ignoriert");
        return;
    }
    match state.segments.finish_segment(pos) {
        Ok(()) => {
            log::info!(
                "Segment festgeschrieben ({} Segmente)",
                state.segments.len()
            );
            state.mark_scene_dirty();
        }
        Err(e) => log::debug!("FinishSegment ignoriert: {}", e),
    }
}

/// Verwirft das Segment in Arbeit.
pub fn cancel_in_progress_segment(state: &mut AppState) {
    match state.segments.cancel_in_progress_segment() {
        Ok(removed) => {
            log::debug!("Segment verworfen (Länge {:.1})", removed.length());
            state.mark_scene_dirty();
        }
        Err(e) => log::debug!("CancelInProgressSegment ignoriert: {}", e),
    }
}
