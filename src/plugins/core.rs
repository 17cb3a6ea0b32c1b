use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use leafwing_input_manager::prelude::*;

use crate::events::HandAdjusted;
use crate::plugins::input::{get_default_input_map, ClockAction};
use crate::resources::{ClockTime, DragState};
use crate::systems::adjust::apply_hand_adjustments;
use crate::systems::tick::{clock_tick_system, TickTimer};

/// Widget lifecycle. Detaching tears down every clock entity and the tick
/// timer; re-attaching constructs a fresh, freshly-synced clock.
#[derive(States, Default, Clone, Eq, PartialEq, Debug, Hash)]
pub enum WidgetState {
    #[default]
    Attached,
    Detached,
}

/// Marker for the main 2D camera.
#[derive(Component)]
pub struct MainCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<WidgetState>()
            .init_resource::<DragState>()
            .add_event::<HandAdjusted>()
            .add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(WidgetState::Attached), attach_clock)
            .add_systems(OnExit(WidgetState::Attached), detach_clock)
            .add_systems(
                Update,
                (clock_tick_system, apply_hand_adjustments)
                    .run_if(in_state(WidgetState::Attached)),
            )
            .add_systems(Update, (toggle_attached, log_state_transitions));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            // Keep the whole 200x200 face plus the readout in view
            // regardless of window size.
            scaling_mode: ScalingMode::AutoMin {
                min_width: 220.0,
                min_height: 270.0,
            },
            ..OrthographicProjection::default_2d()
        },
        MainCamera,
        InputManagerBundle::with_map(get_default_input_map()),
    ));
}

/// Builds the clock state on attach: a system-clock sync and a fresh tick
/// timer.
fn attach_clock(mut commands: Commands) {
    let clock = ClockTime::from_system_clock();
    info!("Clock attached at {}", clock.formatted());
    commands.insert_resource(clock);
    commands.init_resource::<TickTimer>();
}

/// Tears the clock state down on detach. Removing the timer here is what
/// guarantees no tick ever fires against a detached widget.
fn detach_clock(mut commands: Commands) {
    commands.remove_resource::<ClockTime>();
    commands.remove_resource::<TickTimer>();
    commands.insert_resource(DragState::Idle);
    info!("Clock detached");
}

/// System that flips the widget lifecycle on the toggle action.
fn toggle_attached(
    action_query: Query<&ActionState<ClockAction>>,
    state: Res<State<WidgetState>>,
    mut next_state: ResMut<NextState<WidgetState>>,
) {
    let Ok(action_state) = action_query.get_single() else { return };
    if !action_state.just_pressed(&ClockAction::ToggleAttached) {
        return;
    }
    match state.get() {
        WidgetState::Attached => next_state.set(WidgetState::Detached),
        WidgetState::Detached => next_state.set(WidgetState::Attached),
    }
}

fn log_state_transitions(state: Res<State<WidgetState>>) {
    if state.is_changed() {
        info!("Widget state: {:?}", state.get());
    }
}
