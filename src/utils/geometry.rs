//! Pure angle geometry for the clock face.
//!
//! Positions are in the face's local coordinate space: 200x200 units,
//! origin at the top-left, y growing downwards, center at (100,100).
//! Bearings are degrees in [0,360), measured clockwise from 12 o'clock.

use bevy::prelude::*;

use crate::components::HandKind;
use crate::resources::ClockTime;

/// Fixed rotation center of the face.
pub const FACE_CENTER: Vec2 = Vec2::new(100.0, 100.0);

/// Angular tolerance for grabbing a hand, in degrees.
const PICK_TOLERANCE_DEG: f32 = 8.0;

/// Radial slop beyond the hand tip that still counts as a grab.
const PICK_RADIAL_SLOP: f32 = 6.0;

/// Computes the bearing of `pos` around the face center.
///
/// Quadrant-based: each quadrant contributes atan(opposite/adjacent) of its
/// leg lengths plus the quadrant offset. Boundary rule: the right half is
/// `x >= 100` and the bottom half is `y >= 100`, uniformly, so every point
/// off-center lands in exactly one quadrant. The center itself has no
/// direction and maps to 0.
///
/// Positions outside the 200x200 face are fine; the math only cares about
/// the direction from the center.
pub fn face_angle(pos: Vec2) -> f32 {
    let (x, y) = (pos.x, pos.y);
    if pos == FACE_CENTER {
        return 0.0;
    }
    if x >= FACE_CENTER.x && y < FACE_CENTER.y {
        // upper right
        angle_from_sides(x - FACE_CENTER.x, FACE_CENTER.y - y)
    } else if x >= FACE_CENTER.x && y >= FACE_CENTER.y {
        // lower right
        angle_from_sides(y - FACE_CENTER.y, x - FACE_CENTER.x) + 90.0
    } else if x < FACE_CENTER.x && y >= FACE_CENTER.y {
        // lower left
        angle_from_sides(FACE_CENTER.x - x, y - FACE_CENTER.y) + 180.0
    } else {
        // upper left
        angle_from_sides(FACE_CENTER.y - y, FACE_CENTER.x - x) + 270.0
    }
}

/// Degrees of atan(opposite/adjacent). Legs are non-negative within a
/// quadrant; a zero adjacent leg divides to infinity and yields 90.
fn angle_from_sides(opposite: f32, adjacent: f32) -> f32 {
    (opposite / adjacent).atan().to_degrees()
}

/// Maps a bearing to the nearest hour on the 12-hour dial. A bearing near
/// enough to 360 rounds to 12, which wraps to hour 0.
pub fn hours_from_angle(degrees: f32) -> u32 {
    (degrees * 12.0 / 360.0).round() as u32 % 12
}

/// Maps a bearing to the nearest step on the 60-step dial, with the same
/// wrap of 60 back to 0 at the top of the range.
pub fn minutes_from_angle(degrees: f32) -> u32 {
    (degrees * 60.0 / 360.0).round() as u32 % 60
}

/// Hour value for a pointer position over the face.
pub fn hours_from_position(pos: Vec2) -> u32 {
    hours_from_angle(face_angle(pos))
}

/// Minute (or second) value for a pointer position over the face.
pub fn minutes_from_position(pos: Vec2) -> u32 {
    minutes_from_angle(face_angle(pos))
}

/// Hit-tests the pointer against the three hands for the given time.
///
/// A hand is grabbable when the pointer bearing lies within a small angular
/// tolerance of the hand's bearing and the pointer sits within the hand's
/// reach. The hour hand is drawn topmost, so overlapping hands resolve
/// hour, then minute, then second.
pub fn pick_hand(pos: Vec2, clock: &ClockTime) -> Option<HandKind> {
    if pos == FACE_CENTER {
        return None;
    }
    let radius = pos.distance(FACE_CENTER);
    let bearing = face_angle(pos);
    [HandKind::Hour, HandKind::Minute, HandKind::Second]
        .into_iter()
        .find(|hand| {
            radius <= hand.length() + PICK_RADIAL_SLOP
                && bearing_distance(bearing, hand.bearing_degrees(clock)) <= PICK_TOLERANCE_DEG
        })
}

/// Shortest angular distance between two bearings, in degrees.
fn bearing_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_cardinal_bearings() {
        assert_close(face_angle(Vec2::new(100.0, 10.0)), 0.0);
        assert_close(face_angle(Vec2::new(190.0, 100.0)), 90.0);
        assert_close(face_angle(Vec2::new(100.0, 190.0)), 180.0);
        assert_close(face_angle(Vec2::new(10.0, 100.0)), 270.0);
    }

    #[test]
    fn test_diagonal_bearings() {
        assert_close(face_angle(Vec2::new(190.0, 10.0)), 45.0);
        assert_close(face_angle(Vec2::new(190.0, 190.0)), 135.0);
        assert_close(face_angle(Vec2::new(10.0, 190.0)), 225.0);
        assert_close(face_angle(Vec2::new(10.0, 10.0)), 315.0);
    }

    #[test]
    fn straight_left_on_the_boundary_row() {
        // Under the uniform bottom-half rule the y == 100 row left of
        // center goes through the lower-left quadrant and still reads 270.
        assert_close(face_angle(Vec2::new(10.0, 100.0)), 270.0);
        assert_close(face_angle(Vec2::new(99.0, 100.0)), 270.0);
    }

    #[test]
    fn test_center_has_no_direction() {
        assert_close(face_angle(FACE_CENTER), 0.0);
    }

    #[test]
    fn test_bearings_off_the_face_still_resolve() {
        assert_close(face_angle(Vec2::new(100.0, -400.0)), 0.0);
        assert_close(face_angle(Vec2::new(700.0, 100.0)), 90.0);
    }

    #[test]
    fn test_hours_from_angle() {
        assert_eq!(hours_from_angle(0.0), 0);
        assert_eq!(hours_from_angle(90.0), 3);
        assert_eq!(hours_from_angle(180.0), 6);
        assert_eq!(hours_from_angle(270.0), 9);
    }

    #[test]
    fn test_minutes_from_angle() {
        assert_eq!(minutes_from_angle(0.0), 0);
        assert_eq!(minutes_from_angle(90.0), 15);
        assert_eq!(minutes_from_angle(180.0), 30);
        assert_eq!(minutes_from_angle(354.0), 59);
    }

    #[test]
    fn test_top_of_range_wraps_to_zero() {
        // Rounding alone would produce 12 and 60 here; both must wrap.
        assert_eq!(hours_from_angle(359.0), 0);
        assert_eq!(hours_from_angle(360.0), 0);
        assert_eq!(minutes_from_angle(359.9), 0);
    }

    #[test]
    fn test_position_composition() {
        assert_eq!(hours_from_position(Vec2::new(190.0, 100.0)), 3);
        assert_eq!(minutes_from_position(Vec2::new(100.0, 190.0)), 30);
        assert_eq!(hours_from_position(Vec2::new(100.0, 10.0)), 0);
    }

    #[test]
    fn test_minute_round_trip_stays_within_half_a_step() {
        for step in 0..60 {
            let ideal = step as f32 * 6.0;
            for jitter in [-2.9_f32, 0.0, 2.9] {
                let bearing = (ideal + jitter).rem_euclid(360.0);
                let idealized = minutes_from_angle(bearing) as f32 * 6.0;
                let distance = bearing_distance(bearing, idealized);
                assert!(
                    distance <= 3.0 + 1e-3,
                    "bearing {bearing} mapped {distance} degrees away"
                );
            }
        }
    }

    #[test]
    fn test_pick_hand_by_bearing() {
        // 3:00:30 - hour at 90, minute at 0, second at 180.
        let clock = ClockTime { hours: 3, minutes: 0, seconds: 30, last_synced: 0 };
        assert_eq!(pick_hand(Vec2::new(150.0, 100.0), &clock), Some(HandKind::Hour));
        assert_eq!(pick_hand(Vec2::new(100.0, 30.0), &clock), Some(HandKind::Minute));
        assert_eq!(pick_hand(Vec2::new(100.0, 170.0), &clock), Some(HandKind::Second));
        assert_eq!(pick_hand(Vec2::new(150.0, 50.0), &clock), None);
    }

    #[test]
    fn test_pick_hand_respects_hand_length() {
        // 3:15: hour and minute hands share the 90-degree bearing, but only
        // the minute hand reaches out to radius 90.
        let clock = ClockTime { hours: 3, minutes: 15, seconds: 0, last_synced: 0 };
        assert_eq!(pick_hand(Vec2::new(190.0, 100.0), &clock), Some(HandKind::Minute));
        assert_eq!(pick_hand(Vec2::new(150.0, 100.0), &clock), Some(HandKind::Hour));
    }

    #[test]
    fn test_pick_hand_prefers_topmost_on_overlap() {
        // 12:00:00 - all three hands stacked at bearing 0; the hour hand is
        // drawn last, so it wins inside its reach.
        let clock = ClockTime { hours: 0, minutes: 0, seconds: 0, last_synced: 0 };
        assert_eq!(pick_hand(Vec2::new(100.0, 50.0), &clock), Some(HandKind::Hour));
        // Beyond the hour hand's reach only the long hands remain.
        assert_eq!(pick_hand(Vec2::new(100.0, 20.0), &clock), Some(HandKind::Minute));
    }

    #[test]
    fn test_pick_hand_at_center() {
        let clock = ClockTime { hours: 0, minutes: 0, seconds: 0, last_synced: 0 };
        assert_eq!(pick_hand(FACE_CENTER, &clock), None);
    }
}
