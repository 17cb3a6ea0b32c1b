use bevy::prelude::*;

use crate::resources::ClockTime;

/// Repeating timer driving the clock advance.
///
/// Fires every 400ms rather than every second so a real-second boundary is
/// never straddled for long; `ClockTime::advance` ignores firings that land
/// inside the same wall-clock second.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(0.4, TimerMode::Repeating))
    }
}

/// System that advances the displayed time against the wall clock.
///
/// Gated to `WidgetState::Attached`; detaching removes the timer resource,
/// so no tick can fire against a torn-down face.
pub fn clock_tick_system(
    time: Res<Time>,
    mut timer: ResMut<TickTimer>,
    mut clock: ResMut<ClockTime>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        clock.advance(ClockTime::epoch_now());
    }
}
