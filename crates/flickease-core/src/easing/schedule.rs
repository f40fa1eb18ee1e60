//! Interval arithmetic for the easing sequence
//!
//! Each step waits longer than the previous one by a fixed ratio. The
//! sequence ends at the first interval above the ceiling.

use std::time::Duration;

/// Ceiling and growth ratio for easing sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasingSettings {
    /// Interval in milliseconds above which the sequence ends
    pub ceiling_ms: u64,
    /// Growth per step in percent (115 = 1.15x)
    pub growth_percent: u64,
}

impl Default for EasingSettings {
    fn default() -> Self {
        Self {
            ceiling_ms: 500,
            growth_percent: 115,
        }
    }
}

impl EasingSettings {
    /// Interval after `interval`, truncated to whole milliseconds
    ///
    /// Integer arithmetic keeps 100 -> 115 exact; multiplying by 1.15 in
    /// floating point and truncating yields 114.
    ///
    /// Small seeds where truncation would stall (below 7ms at 115%) advance
    /// by at least one millisecond so the ceiling is always reached.
    #[inline]
    pub fn grow(&self, interval: u64) -> u64 {
        let grown = interval.saturating_mul(self.growth_percent) / 100;
        grown.max(interval.saturating_add(1))
    }

    #[inline]
    pub fn exceeds_ceiling(&self, interval: u64) -> bool {
        interval > self.ceiling_ms
    }

    /// Step intervals for a sequence seeded with `seed_ms`
    pub fn schedule(&self, seed_ms: u64) -> IntervalSchedule {
        IntervalSchedule {
            settings: *self,
            next: Some(seed_ms),
        }
    }
}

/// Iterator over the intervals preceding each step of one easing sequence
#[derive(Debug, Clone)]
pub struct IntervalSchedule {
    settings: EasingSettings,
    next: Option<u64>,
}

impl IntervalSchedule {
    /// Sum of all step intervals
    pub fn total_duration(self) -> Duration {
        Duration::from_millis(self.sum())
    }
}

impl Iterator for IntervalSchedule {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        if self.settings.exceeds_ceiling(current) {
            self.next = None;
            return None;
        }
        self.next = Some(self.settings.grow(current));
        Some(current)
    }
}

/// Sleep duration before a step
///
/// Measured against a step start that is always zero, so the full interval
/// is slept every time.
#[inline]
pub fn step_delay(next_interval: u64, last_time: u64) -> Duration {
    Duration::from_millis(next_interval.saturating_sub(last_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_truncates() {
        let settings = EasingSettings::default();
        assert_eq!(settings.grow(100), 115);
        assert_eq!(settings.grow(115), 132);
        assert_eq!(settings.grow(132), 151);
        assert_eq!(settings.grow(151), 173);
    }

    #[test]
    fn test_grow_small_seed_still_advances() {
        let settings = EasingSettings::default();
        assert_eq!(settings.grow(0), 1);
        assert_eq!(settings.grow(1), 2);
        assert_eq!(settings.grow(6), 7);
        assert_eq!(settings.grow(7), 8);
    }

    #[test]
    fn test_schedule_from_100() {
        let intervals: Vec<u64> = EasingSettings::default().schedule(100).collect();
        assert_eq!(
            intervals,
            vec![100, 115, 132, 151, 173, 198, 227, 261, 300, 345, 396, 455]
        );
    }

    #[test]
    fn test_schedule_stops_at_first_term_above_ceiling() {
        let settings = EasingSettings {
            ceiling_ms: 30,
            growth_percent: 115,
        };
        let intervals: Vec<u64> = settings.schedule(10).collect();
        assert_eq!(intervals, vec![10, 11, 12, 13, 14, 16, 18, 20, 23, 26, 29]);
        assert!(settings.exceeds_ceiling(settings.grow(29)));
    }

    #[test]
    fn test_schedule_seed_above_ceiling_is_empty() {
        assert_eq!(EasingSettings::default().schedule(501).count(), 0);
        assert_eq!(EasingSettings::default().schedule(500).count(), 1);
    }

    #[test]
    fn test_small_seed_terminates() {
        let settings = EasingSettings {
            ceiling_ms: 50,
            growth_percent: 115,
        };
        assert!(settings.schedule(1).count() < 50);
    }

    #[test]
    fn test_total_duration() {
        let settings = EasingSettings {
            ceiling_ms: 30,
            growth_percent: 115,
        };
        assert_eq!(settings.schedule(10).total_duration(), Duration::from_millis(192));
    }

    #[test]
    fn test_step_delay() {
        assert_eq!(step_delay(115, 0), Duration::from_millis(115));
        assert_eq!(step_delay(10, 20), Duration::ZERO);
    }
}
