use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum ClockAction {
    /// Grab and drag a clock hand.
    Grab,
    /// Detach the widget, or re-attach (and resync) when detached.
    ToggleAttached,
    /// Show or hide the debug panel.
    ToggleDebugPanel,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<ClockAction>::default());
    }
}

pub fn get_default_input_map() -> InputMap<ClockAction> {
    let mut input_map = InputMap::default();

    // Pointer
    input_map.insert(ClockAction::Grab, MouseButton::Left);

    // Widget lifecycle
    input_map.insert(ClockAction::ToggleAttached, KeyCode::KeyD);

    // Debug
    input_map.insert(ClockAction::ToggleDebugPanel, KeyCode::F3);

    input_map
}
