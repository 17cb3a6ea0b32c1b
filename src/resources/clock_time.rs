use bevy::prelude::*;
use chrono::{Local, Timelike, Utc};

/// Resource tracking the displayed time of day.
///
/// The clock advances on each firing of the 400ms `TickTimer`:
/// - `advance` adds exactly one second when the wall clock has moved on
/// - When seconds reaches 60, minutes increments
/// - When minutes reaches 60, hours increments
/// - When hours reaches 24, it wraps to 0
///
/// Synced to the host system clock once, when the widget is attached.
/// Afterwards only `advance` and hand drags mutate it, so a throttled
/// window catches up one second per tick instead of jumping.
#[derive(Resource, Debug, Clone)]
pub struct ClockTime {
    /// Hour of the day (0-23).
    pub hours: u32,
    /// Minute of the hour (0-59).
    pub minutes: u32,
    /// Second of the minute (0-59).
    pub seconds: u32,
    /// Epoch seconds at the last accepted tick.
    pub last_synced: i64,
}

impl ClockTime {
    /// Reads the host wall clock into a fresh `ClockTime`.
    pub fn from_system_clock() -> Self {
        let now = Local::now();
        Self {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second(),
            last_synced: now.timestamp(),
        }
    }

    /// Current epoch seconds, the argument `advance` expects.
    pub fn epoch_now() -> i64 {
        Utc::now().timestamp()
    }

    /// Advances the clock by one second if the wall clock has moved past
    /// `last_synced`. A no-op otherwise, so a timer firing twice inside one
    /// wall-clock second (or a clock stepped backwards) changes nothing.
    pub fn advance(&mut self, now_epoch: i64) {
        if now_epoch <= self.last_synced {
            return;
        }
        self.last_synced = now_epoch;
        self.seconds += 1;
        if self.seconds > 59 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes > 59 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours > 23 {
            self.hours = 0;
        }
    }

    /// Overwrites the hour field from a hand drag.
    pub fn set_hours(&mut self, hours: u32) {
        self.hours = hours;
    }

    /// Overwrites the minute field from a hand drag.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes;
    }

    /// Overwrites the second field from a hand drag.
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds;
    }

    /// Returns the digital readout string.
    /// Format: "HH:MM:SS", zero-padded
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_system_clock_in_range() {
        let clock = ClockTime::from_system_clock();
        assert!(clock.hours <= 23);
        assert!(clock.minutes <= 59);
        assert!(clock.seconds <= 59);
        assert!(clock.last_synced > 0);
    }

    #[test]
    fn test_advance_increments_one_second() {
        for start in 0..=58 {
            let mut clock = ClockTime { hours: 7, minutes: 15, seconds: start, last_synced: 100 };
            clock.advance(101);
            assert_eq!(clock.seconds, start + 1);
            assert_eq!(clock.minutes, 15);
            assert_eq!(clock.hours, 7);
            assert_eq!(clock.last_synced, 101);
        }
    }

    #[test]
    fn test_advance_noop_when_wall_clock_behind() {
        let mut clock = ClockTime { hours: 7, minutes: 15, seconds: 30, last_synced: 100 };
        clock.advance(100);
        clock.advance(99);
        clock.advance(100);
        assert_eq!(clock.seconds, 30);
        assert_eq!(clock.last_synced, 100);
    }

    #[test]
    fn test_advance_seconds_rollover() {
        let mut clock = ClockTime { hours: 7, minutes: 15, seconds: 59, last_synced: 100 };
        clock.advance(101);
        assert_eq!(clock.seconds, 0);
        assert_eq!(clock.minutes, 16);
        assert_eq!(clock.hours, 7);
    }

    #[test]
    fn test_advance_minutes_rollover() {
        let mut clock = ClockTime { hours: 7, minutes: 59, seconds: 59, last_synced: 100 };
        clock.advance(101);
        assert_eq!(clock.seconds, 0);
        assert_eq!(clock.minutes, 0);
        assert_eq!(clock.hours, 8);
    }

    #[test]
    fn test_advance_midnight_wrap() {
        let mut clock = ClockTime { hours: 23, minutes: 59, seconds: 59, last_synced: 100 };
        clock.advance(101);
        assert_eq!(clock.seconds, 0);
        assert_eq!(clock.minutes, 0);
        assert_eq!(clock.hours, 0);
    }

    #[test]
    fn test_advance_catches_up_one_second_at_a_time() {
        // A backgrounded window that missed ten wall-clock seconds still
        // advances by a single second per tick.
        let mut clock = ClockTime { hours: 7, minutes: 15, seconds: 30, last_synced: 100 };
        clock.advance(110);
        assert_eq!(clock.seconds, 31);
        assert_eq!(clock.last_synced, 110);
    }

    #[test]
    fn test_formatted_pads_fields() {
        let clock = ClockTime { hours: 4, minutes: 5, seconds: 9, last_synced: 0 };
        assert_eq!(clock.formatted(), "04:05:09");

        let clock = ClockTime { hours: 23, minutes: 59, seconds: 59, last_synced: 0 };
        assert_eq!(clock.formatted(), "23:59:59");
    }
}
