//! Handler für die Kollaps-Animation.

use crate::app::scheduler::Scheduler;
use crate::app::AppState;
use crate::core::CollapseTick;

/// Startet die Animation über alle festgeschriebenen Segmente.
///
/// Ein Segment in Arbeit wird vorher verworfen. Ohne festgeschriebene
/// Segmente bleibt der Zustand unverändert.
pub fn start(state: &mut AppState) {
    if state.is_collapsing() {
        log::debug!("StartCollapse ignoriert: Animation läuft bereits");
        return;
    }
    if state.segments.committed().is_empty() {
        log::debug!("StartCollapse ignoriert: keine festgeschriebenen Segmente");
        return;
    }

    if state.segments.is_drawing() {
        if let Ok(removed) = state.segments.cancel_in_progress_segment() {
            log::debug!("Segment in Arbeit vor Kollaps verworfen: {:?}", removed);
        }
    }

    let config = state.options.collapse_config();
    match state.collapse.start(state.segments.committed(), config) {
        Ok(interval) => {
            let handle = state.scheduler.schedule_periodic(interval);
            state.collapse_timer = Some(handle);
            log::info!(
                "Kollaps gestartet: {} Segmente, {} Schritte à {:?}",
                state.segments.len(),
                config.final_step(),
                interval
            );
            state.mark_scene_dirty();
        }
        Err(e) => log::debug!("StartCollapse ignoriert: {}", e),
    }
}

/// Verarbeitet einen Timer-Tick der Animation.
///
/// Beim letzten Schritt wird der Timer gestoppt und die Segment-Liste geleert.
pub fn advance(state: &mut AppState) {
    match state.collapse.tick() {
        Ok(CollapseTick::Frame(_)) => state.mark_scene_dirty(),
        Ok(CollapseTick::Finished) => {
            if let Some(handle) = state.collapse_timer.take() {
                state.scheduler.cancel(handle);
            }
            let removed = state.segments.len();
            state.segments.clear();
            log::info!("Kollaps abgeschlossen, {} Segmente entfernt", removed);
            state.mark_scene_dirty();
        }
        Err(e) => log::debug!("Verspäteter Tick ignoriert: {}", e),
    }
}
