//! Day/night cycle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Two-valued lighting mode of the city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    #[default]
    Night,
}

impl TimeOfDay {
    /// Flip between day and night.
    pub fn toggle(self) -> Self {
        match self {
            TimeOfDay::Day => TimeOfDay::Night,
            TimeOfDay::Night => TimeOfDay::Day,
        }
    }

    /// The mode after `n` toggles.
    pub fn toggled(self, n: u64) -> Self {
        if n % 2 == 0 { self } else { self.toggle() }
    }

    pub fn is_night(self) -> bool {
        self == TimeOfDay::Night
    }

    /// Status-panel label.
    pub fn cycle_label(self) -> &'static str {
        match self {
            TimeOfDay::Day => "DAY CYCLE",
            TimeOfDay::Night => "NIGHT CYCLE",
        }
    }

    /// Compact status-bar label.
    pub fn mode_label(self) -> &'static str {
        match self {
            TimeOfDay::Day => "☀ DAY MODE",
            TimeOfDay::Night => "☾ NIGHT MODE",
        }
    }
}

/// Free-running day/night toggle on a fixed period.
///
/// The mode is derived from the elapsed time since the cycle started, so the
/// schedule never accumulates drift and is defined for every instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightCycle {
    initial: TimeOfDay,
    period: Duration,
}

impl DayNightCycle {
    /// Default time between flips.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

    /// Create a cycle. A zero period is bumped to one millisecond.
    pub fn new(initial: TimeOfDay, period: Duration) -> Self {
        Self {
            initial,
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of flips that have happened by `elapsed`.
    pub fn flips_at(&self, elapsed: Duration) -> u64 {
        (elapsed.as_nanos() / self.period.as_nanos()) as u64
    }

    /// The mode at `elapsed` since the cycle started.
    pub fn mode_at(&self, elapsed: Duration) -> TimeOfDay {
        self.initial.toggled(self.flips_at(elapsed))
    }

    /// Time remaining until the next flip.
    pub fn until_next_flip(&self, elapsed: Duration) -> Duration {
        let period = self.period.as_nanos();
        let into = elapsed.as_nanos() % period;
        Duration::from_nanos((period - into) as u64)
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(TimeOfDay::Night, Self::DEFAULT_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        let start = TimeOfDay::Night;
        for n in 0..10u64 {
            let expected = if n % 2 == 1 { TimeOfDay::Day } else { TimeOfDay::Night };
            assert_eq!(start.toggled(n), expected);
        }
        let mut mode = start;
        for _ in 0..7 {
            mode = mode.toggle();
        }
        assert_eq!(mode, TimeOfDay::Day);
    }

    #[test]
    fn test_cycle_starts_at_night() {
        let cycle = DayNightCycle::default();
        assert_eq!(cycle.mode_at(Duration::ZERO), TimeOfDay::Night);
        assert_eq!(cycle.mode_at(Duration::from_millis(29_999)), TimeOfDay::Night);
        assert_eq!(cycle.mode_at(Duration::from_secs(30)), TimeOfDay::Day);
        assert_eq!(cycle.mode_at(Duration::from_secs(59)), TimeOfDay::Day);
        assert_eq!(cycle.mode_at(Duration::from_secs(60)), TimeOfDay::Night);
    }

    #[test]
    fn test_cycle_does_not_drift() {
        let cycle = DayNightCycle::default();
        // 1001 periods in, the mode is still determined purely by parity.
        let elapsed = Duration::from_secs(30 * 1001) + Duration::from_millis(1);
        assert_eq!(cycle.flips_at(elapsed), 1001);
        assert_eq!(cycle.mode_at(elapsed), TimeOfDay::Day);
    }

    #[test]
    fn test_until_next_flip() {
        let cycle = DayNightCycle::new(TimeOfDay::Day, Duration::from_secs(10));
        assert_eq!(cycle.until_next_flip(Duration::from_secs(3)), Duration::from_secs(7));
        assert_eq!(cycle.until_next_flip(Duration::from_secs(10)), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let cycle = DayNightCycle::new(TimeOfDay::Night, Duration::ZERO);
        assert_eq!(cycle.period(), Duration::from_millis(1));
        assert_eq!(cycle.mode_at(Duration::from_millis(1)), TimeOfDay::Day);
    }
}
