use bevy::prelude::*;

use crate::components::HandKind;
use crate::events::HandAdjusted;
use crate::resources::ClockTime;

/// System that applies committed hand adjustments to the displayed time.
///
/// Values arrive already in range: the angle math produces 0-11 for the
/// hour hand and 0-59 for the others, so no clamping happens here.
pub fn apply_hand_adjustments(
    mut events: EventReader<HandAdjusted>,
    mut clock: ResMut<ClockTime>,
) {
    for event in events.read() {
        match event.hand {
            HandKind::Hour => clock.set_hours(event.value),
            HandKind::Minute => clock.set_minutes(event.value),
            HandKind::Second => clock.set_seconds(event.value),
        }
        info!("Set {:?} to {} by hand drag", event.hand, event.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_events_drive_the_clock() {
        let mut app = App::new();
        app.add_event::<HandAdjusted>();
        app.insert_resource(ClockTime { hours: 10, minutes: 20, seconds: 30, last_synced: 0 });
        app.add_systems(Update, apply_hand_adjustments);

        app.world_mut().send_event(HandAdjusted { hand: HandKind::Minute, value: 45 });
        app.update();

        let clock = app.world().resource::<ClockTime>();
        assert_eq!(clock.minutes, 45);
        assert_eq!(clock.hours, 10);
        assert_eq!(clock.seconds, 30);
    }

    #[test]
    fn test_each_hand_targets_its_field() {
        let mut app = App::new();
        app.add_event::<HandAdjusted>();
        app.insert_resource(ClockTime { hours: 0, minutes: 0, seconds: 0, last_synced: 0 });
        app.add_systems(Update, apply_hand_adjustments);

        app.world_mut().send_event(HandAdjusted { hand: HandKind::Hour, value: 9 });
        app.world_mut().send_event(HandAdjusted { hand: HandKind::Second, value: 12 });
        app.update();

        let clock = app.world().resource::<ClockTime>();
        assert_eq!(clock.hours, 9);
        assert_eq!(clock.minutes, 0);
        assert_eq!(clock.seconds, 12);
    }
}
