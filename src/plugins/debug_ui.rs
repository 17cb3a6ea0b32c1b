use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use leafwing_input_manager::prelude::*;

use crate::plugins::core::WidgetState;
use crate::plugins::input::ClockAction;
use crate::resources::{ClockTime, DragState};

pub struct DebugUiPlugin;

/// Whether the debug panel is shown. Hidden by default.
#[derive(Resource, Default)]
pub struct DebugPanelVisible(pub bool);

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.init_resource::<DebugPanelVisible>()
            .add_systems(Update, (toggle_debug_panel, debug_panel));
    }
}

fn toggle_debug_panel(
    action_query: Query<&ActionState<ClockAction>>,
    mut visible: ResMut<DebugPanelVisible>,
) {
    let Ok(action_state) = action_query.get_single() else { return };
    if action_state.just_pressed(&ClockAction::ToggleDebugPanel) {
        visible.0 = !visible.0;
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    visible: Res<DebugPanelVisible>,
    state: Res<State<WidgetState>>,
    mut next_state: ResMut<NextState<WidgetState>>,
    clock: Option<Res<ClockTime>>,
    drag_state: Res<DragState>,
    diagnostics: Res<DiagnosticsStore>,
) {
    if !visible.0 {
        return;
    }
    egui::Window::new("Clock Debug").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("Widget State: {:?}", state.get()));

        if let Some(clock) = &clock {
            ui.label(format!("Time: {}", clock.formatted()));
            ui.label(format!("Last synced epoch: {}", clock.last_synced));
        } else {
            ui.label("Clock detached");
        }
        ui.label(format!("Drag: {:?}", *drag_state));

        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        ui.separator();
        ui.heading("Lifecycle");

        if ui.button("Attach").clicked() {
            next_state.set(WidgetState::Attached);
        }
        if ui.button("Detach").clicked() {
            next_state.set(WidgetState::Detached);
        }
    });
}
