//! Digital readout under the face.

use bevy::prelude::*;

use crate::plugins::clock_face::COLOR_INK;
use crate::plugins::core::WidgetState;
use crate::resources::ClockTime;

pub struct ReadoutPlugin;

impl Plugin for ReadoutPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(OnEnter(WidgetState::Attached), spawn_readout)
            .add_systems(
                Update,
                update_readout.run_if(in_state(WidgetState::Attached)),
            )
            .add_systems(OnExit(WidgetState::Attached), despawn_readout);
    }
}

/// Vertical position of the readout, below the face rim.
const READOUT_OFFSET_Y: f32 = -118.0;

/// Marker for the digital readout text.
#[derive(Component)]
pub struct DigitalReadout;

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        Name::new("Digital Readout"),
        Text2d::new("--:--:--"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(COLOR_INK),
        Transform::from_xyz(0.0, READOUT_OFFSET_Y, 0.5),
        DigitalReadout,
    ));
}

/// System that refreshes the digital readout when the time changes.
/// A missing readout entity skips the refresh rather than failing.
fn update_readout(
    clock: Res<ClockTime>,
    mut readout_query: Query<&mut Text2d, With<DigitalReadout>>,
) {
    if !clock.is_changed() {
        return;
    }
    let Ok(mut text) = readout_query.get_single_mut() else { return };
    text.0 = clock.formatted();
}

fn despawn_readout(mut commands: Commands, query: Query<Entity, With<DigitalReadout>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
