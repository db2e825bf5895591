//! One-second countdown for the timed phases of a turn.
//!
//! The timer is polled with the current instant instead of owning a thread or
//! task, so there is never more than one countdown in flight: starting again
//! replaces the previous one.

use std::time::Instant;

/// Longest configurable turn time, in seconds.
pub const MAX_SECONDS: u32 = 180;
/// Slider granularity for the turn time.
pub const STEP_SECONDS: u32 = 10;
pub const DEFAULT_SECONDS: u32 = 60;

/// Result of polling the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// No countdown is running.
    Idle,
    /// Whole seconds left.
    Running(u32),
    /// The countdown reached zero. Reported once; the timer is idle afterwards.
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct TurnTimer {
    duration: u32,
    started_at: Option<Instant>,
}

impl TurnTimer {
    /// A timer of `seconds`; zero disables timing entirely.
    pub const fn new(seconds: u32) -> Self {
        Self {
            duration: seconds,
            started_at: None,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.duration > 0
    }

    /// Start (or restart) the countdown at full duration.
    pub fn start(&mut self, now: Instant) {
        if self.is_enabled() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Seconds left at `now`, or `None` when idle.
    pub fn remaining(&self, now: Instant) -> Option<u32> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at).as_secs();
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        Some(self.duration.saturating_sub(elapsed))
    }

    pub fn poll(&mut self, now: Instant) -> TimerStatus {
        match self.remaining(now) {
            None => TimerStatus::Idle,
            Some(0) => {
                self.stop();
                TimerStatus::Expired
            }
            Some(left) => TimerStatus::Running(left),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_disabled_timer_never_starts() {
        let now = Instant::now();
        let mut timer = TurnTimer::new(0);
        timer.start(now);
        assert_eq!(timer.remaining(now), None);
        assert_eq!(timer.poll(now + Duration::from_secs(500)), TimerStatus::Idle);
    }

    #[test]
    fn test_counts_down_whole_seconds() {
        let now = Instant::now();
        let mut timer = TurnTimer::new(3);
        timer.start(now);

        assert_eq!(timer.poll(now), TimerStatus::Running(3));
        assert_eq!(timer.poll(now + Duration::from_millis(999)), TimerStatus::Running(3));
        assert_eq!(timer.poll(now + Duration::from_secs(1)), TimerStatus::Running(2));
        assert_eq!(timer.poll(now + Duration::from_secs(3)), TimerStatus::Expired);
        assert_eq!(
            timer.poll(now + Duration::from_secs(4)),
            TimerStatus::Idle,
            "Expiry is reported once"
        );
    }

    #[test]
    fn test_restart_replaces_running_countdown() {
        let now = Instant::now();
        let mut timer = TurnTimer::new(10);
        timer.start(now);
        timer.start(now + Duration::from_secs(8));
        assert_eq!(timer.poll(now + Duration::from_secs(12)), TimerStatus::Running(6));
    }

    #[test]
    fn test_stop_cancels() {
        let now = Instant::now();
        let mut timer = TurnTimer::new(5);
        timer.start(now);
        timer.stop();
        assert_eq!(timer.poll(now + Duration::from_secs(10)), TimerStatus::Idle);
    }
}
