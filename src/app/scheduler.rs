//! Periodischer Timer für die Kollaps-Animation.
//!
//! Der Core implementiert keinen eigenen Timer. `FrameScheduler` wird vom
//! Frame-Loop abgefragt (`due_ticks`) und liefert, wie viele Perioden seit dem
//! letzten Aufruf abgelaufen sind. Die Ticks werden danach synchron und in
//! Reihenfolge als Intents verarbeitet.

use std::time::{Duration, Instant};

/// Handle eines geplanten periodischen Timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Vertrag für periodische Callbacks.
pub trait Scheduler {
    /// Plant einen periodischen Timer mit Periode `interval`.
    fn schedule_periodic(&mut self, interval: Duration) -> TimerHandle;
    /// Stoppt den Timer. Unbekannte Handles werden ignoriert.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct PeriodicTimer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Instant,
}

/// Vom Frame-Loop getriebener Scheduler (ein aktiver Timer).
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    timer: Option<PeriodicTimer>,
}

impl FrameScheduler {
    /// Erstellt einen Scheduler ohne aktiven Timer.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            timer: None,
        }
    }

    /// Wie [`Scheduler::schedule_periodic`], mit explizitem Startzeitpunkt.
    pub fn schedule_periodic_at(&mut self, interval: Duration, now: Instant) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let interval = interval.max(Duration::from_millis(1));
        if let Some(old) = self.timer.replace(PeriodicTimer {
            handle,
            interval,
            next_due: now + interval,
        }) {
            log::debug!("Timer {:?} durch {:?} ersetzt", old.handle, handle);
        }
        handle
    }

    /// Gibt zurück, ob ein Timer aktiv ist.
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Anzahl der seit dem letzten Aufruf fällig gewordenen Ticks.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let mut ticks = 0;
        while timer.next_due <= now {
            ticks += 1;
            timer.next_due += timer.interval;
        }
        ticks
    }

    /// Zeit bis zum nächsten Tick (für `request_repaint_after`).
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.next_due.saturating_duration_since(now))
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_periodic(&mut self, interval: Duration) -> TimerHandle {
        self.schedule_periodic_at(interval, Instant::now())
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.timer.as_ref().is_some_and(|t| t.handle == handle) {
            self.timer = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_ticks_counts_elapsed_periods() {
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        scheduler.schedule_periodic_at(Duration::from_millis(20), t0);

        assert_eq!(scheduler.due_ticks(t0 + Duration::from_millis(19)), 0);
        assert_eq!(scheduler.due_ticks(t0 + Duration::from_millis(20)), 1);
        assert_eq!(scheduler.due_ticks(t0 + Duration::from_millis(85)), 3);
        assert_eq!(
            scheduler.next_deadline(t0 + Duration::from_millis(85)),
            Some(Duration::from_millis(15))
        );
    }

    #[test]
    fn test_cancel_stops_timer() {
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        let handle = scheduler.schedule_periodic_at(Duration::from_millis(20), t0);
        scheduler.cancel(handle);
        assert!(!scheduler.is_active());
        assert_eq!(scheduler.due_ticks(t0 + Duration::from_secs(1)), 0);
        assert_eq!(scheduler.next_deadline(t0), None);
    }

    #[test]
    fn test_cancel_with_stale_handle_is_ignored() {
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        let old = scheduler.schedule_periodic_at(Duration::from_millis(20), t0);
        let new = scheduler.schedule_periodic_at(Duration::from_millis(20), t0);
        assert_ne!(old, new);
        scheduler.cancel(old);
        assert!(scheduler.is_active());
    }
}
