use bevy::prelude::*;

use crate::resources::ClockTime;

/// Which clock hand an entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Hand length in face units (the face is 200x200, rim at radius 96).
    pub fn length(&self) -> f32 {
        match self {
            HandKind::Hour => 60.0,
            HandKind::Minute | HandKind::Second => 90.0,
        }
    }

    /// Stroke width in face units.
    pub fn stroke_width(&self) -> f32 {
        match self {
            HandKind::Hour => 6.0,
            HandKind::Minute => 4.0,
            HandKind::Second => 2.0,
        }
    }

    /// Bearing of this hand in degrees clockwise from 12 o'clock for the
    /// given time. Hands sit on whole steps; the hour hand runs on the
    /// 12-hour dial (30 degrees per hour) with no minute-proportional
    /// offset, so it jumps on the hour.
    pub fn bearing_degrees(&self, clock: &ClockTime) -> f32 {
        match self {
            HandKind::Hour => (clock.hours % 12) as f32 * 30.0,
            HandKind::Minute => clock.minutes as f32 * 6.0,
            HandKind::Second => clock.seconds as f32 * 6.0,
        }
    }
}

/// Marker for a draggable hand entity on the face.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hand(pub HandKind);

/// Marker for the non-selectable preview line that follows the pointer
/// during a drag.
#[derive(Component)]
pub struct PreviewHand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_degrees() {
        let clock = ClockTime { hours: 3, minutes: 30, seconds: 45, last_synced: 0 };
        assert_eq!(HandKind::Hour.bearing_degrees(&clock), 90.0);
        assert_eq!(HandKind::Minute.bearing_degrees(&clock), 180.0);
        assert_eq!(HandKind::Second.bearing_degrees(&clock), 270.0);
    }

    #[test]
    fn test_hour_bearing_uses_twelve_hour_dial() {
        // 15:00 points where 3:00 points.
        let clock = ClockTime { hours: 15, minutes: 0, seconds: 0, last_synced: 0 };
        assert_eq!(HandKind::Hour.bearing_degrees(&clock), 90.0);
    }
}
