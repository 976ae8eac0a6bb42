//! Manual stopwatch state machine with lap-split recording.
//!
//! The engine never reads a clock. Every transition and query takes a
//! host-supplied "now" sample (seconds, from any monotonic-enough source),
//! which keeps the logic a pure function of state plus time and makes it
//! trivially testable off the browser.

use log::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopwatchPhase {
    Stopped,
    Running,
}

/// Session-scoped stopwatch. Invalid transitions are silent no-ops;
/// state is never left half-updated.
#[derive(Debug, Clone)]
pub struct StopwatchEngine {
    phase: StopwatchPhase,
    /// Elapsed time banked across previous run segments, in seconds.
    accumulated: f64,
    /// "now" sample taken when the current run segment began.
    run_start: f64,
    /// Recorded split times, most recent first.
    splits: Vec<f64>,
}

impl Default for StopwatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self {
            phase: StopwatchPhase::Stopped,
            accumulated: 0.0,
            run_start: 0.0,
            splits: Vec::new(),
        }
    }

    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    /// Recorded splits, most recent first.
    pub fn splits(&self) -> &[f64] {
        &self.splits
    }

    /// Reset only makes sense once stopped with something to clear.
    /// The UI uses this to gate the Reset button.
    pub fn can_reset(&self) -> bool {
        self.phase == StopwatchPhase::Stopped && (self.accumulated > 0.0 || !self.splits.is_empty())
    }

    /// Begin a run segment. No-op while already running; banked time from
    /// earlier segments carries over.
    pub fn start(&mut self, now: f64) {
        if self.phase == StopwatchPhase::Running {
            return;
        }
        self.run_start = now;
        self.phase = StopwatchPhase::Running;
        debug!("stopwatch started at {:.3}", now);
    }

    /// Record the current elapsed time as a split. Returns the recorded
    /// value, or `None` when the watch is not running.
    pub fn split(&mut self, now: f64) -> Option<f64> {
        if self.phase != StopwatchPhase::Running {
            return None;
        }
        let split_time = self.elapsed(now);
        self.splits.insert(0, split_time);
        Some(split_time)
    }

    /// End the current run segment, banking its elapsed time. No-op while
    /// stopped.
    pub fn stop(&mut self, now: f64) {
        if self.phase != StopwatchPhase::Running {
            return;
        }
        self.accumulated += now - self.run_start;
        self.phase = StopwatchPhase::Stopped;
        debug!("stopwatch stopped with {:.3}s accumulated", self.accumulated);
    }

    /// Clear accumulated time and splits. No-op while running or when
    /// there is nothing to clear.
    pub fn reset(&mut self) {
        if !self.can_reset() {
            return;
        }
        self.accumulated = 0.0;
        self.run_start = 0.0;
        self.splits.clear();
    }

    /// Current elapsed time. Pure read: polling this at any rate never
    /// changes state.
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.phase {
            StopwatchPhase::Running => self.accumulated + (now - self.run_start),
            StopwatchPhase::Stopped => self.accumulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_split_stop() {
        let mut sw = StopwatchEngine::new();
        assert_eq!(sw.elapsed(0.0), 0.0);

        sw.start(0.0);
        assert!(sw.is_running());
        assert_eq!(sw.split(2.5), Some(2.5));
        assert_eq!(sw.splits(), &[2.5]);

        sw.stop(4.0);
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(4.0), 4.0);
    }

    #[test]
    fn test_pause_resume_accumulates() {
        let mut sw = StopwatchEngine::new();
        sw.start(10.0);
        sw.stop(12.0);
        assert_eq!(sw.elapsed(99.0), 2.0);

        sw.start(20.0);
        assert_eq!(sw.elapsed(21.5), 3.5);
        sw.stop(23.0);
        assert_eq!(sw.elapsed(50.0), 5.0);
    }

    #[test]
    fn test_splits_are_most_recent_first() {
        let mut sw = StopwatchEngine::new();
        sw.start(0.0);
        sw.split(1.0);
        sw.split(2.0);
        sw.split(3.5);
        assert_eq!(sw.splits(), &[3.5, 2.0, 1.0]);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut sw = StopwatchEngine::new();

        // Split and stop while stopped do nothing
        assert_eq!(sw.split(1.0), None);
        sw.stop(1.0);
        assert_eq!(sw.elapsed(1.0), 0.0);

        // Start while running keeps the original segment
        sw.start(0.0);
        sw.start(5.0);
        assert_eq!(sw.elapsed(6.0), 6.0);

        // Reset while running is refused
        sw.split(6.0);
        sw.reset();
        assert!(sw.is_running());
        assert_eq!(sw.splits(), &[6.0]);
    }

    #[test]
    fn test_reset_clears_when_stopped() {
        let mut sw = StopwatchEngine::new();
        assert!(!sw.can_reset());

        sw.start(0.0);
        sw.split(2.0);
        sw.stop(4.0);
        assert!(sw.can_reset());

        sw.reset();
        assert_eq!(sw.elapsed(10.0), 0.0);
        assert!(sw.splits().is_empty());
        assert!(!sw.can_reset());

        // Reusable after reset
        sw.start(100.0);
        assert_eq!(sw.elapsed(101.0), 1.0);
    }

    #[test]
    fn test_elapsed_is_idempotent_while_stopped() {
        let mut sw = StopwatchEngine::new();
        sw.start(0.0);
        sw.stop(3.0);
        assert_eq!(sw.elapsed(5.0), 3.0);
        assert_eq!(sw.elapsed(500.0), 3.0);
        assert_eq!(sw.elapsed(5.0), sw.elapsed(5.0));
    }
}
