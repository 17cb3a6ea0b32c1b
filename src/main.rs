use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_prototype_lyon::prelude::*;
use clockface::plugins::clock_face::ClockFacePlugin;
use clockface::plugins::core::CorePlugin;
use clockface::plugins::debug_ui::DebugUiPlugin;
use clockface::plugins::input::InputPlugin;
use clockface::plugins::readout::ReadoutPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "clockface".into(),
                resolution: (440.0, 540.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(ShapePlugin)
        .add_plugins(CorePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(ClockFacePlugin)
        .add_plugins(ReadoutPlugin)
        .add_plugins(DebugUiPlugin)
        .run();
}
