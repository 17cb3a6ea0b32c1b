use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow};
use leafwing_input_manager::prelude::*;

use crate::components::{HandKind, PreviewHand};
use crate::events::HandAdjusted;
use crate::plugins::core::MainCamera;
use crate::plugins::input::ClockAction;
use crate::resources::{ClockTime, DragState};
use crate::utils::geometry::{self, FACE_CENTER};

/// Converts the cursor position into face-local coordinates.
///
/// The face root sits at the world origin with bevy's y-up convention; face
/// space is 200x200, y-down, center at (100,100).
pub fn cursor_face_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec2> {
    let cursor = window.cursor_position()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    Some(Vec2::new(world.x + FACE_CENTER.x, FACE_CENTER.y - world.y))
}

/// System that grabs a hand on pointer press.
pub fn begin_drag_system(
    action_query: Query<&ActionState<ClockAction>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    clock: Res<ClockTime>,
    mut drag_state: ResMut<DragState>,
) {
    let Ok(action_state) = action_query.get_single() else { return };
    if !action_state.just_pressed(&ClockAction::Grab) {
        return;
    }
    if *drag_state != DragState::Idle {
        return;
    }
    let Ok(window) = window_query.get_single() else { return };
    let Ok((camera, camera_transform)) = camera_query.get_single() else { return };
    let Some(face_pos) = cursor_face_position(window, camera, camera_transform) else { return };

    if let Some(hand) = geometry::pick_hand(face_pos, &clock) {
        *drag_state = DragState::Dragging(hand);
        info!(
            "Grabbed {:?} hand at bearing {:.0}",
            hand,
            geometry::face_angle(face_pos)
        );
    }
}

/// System that rotates the preview line to the raw pointer bearing while a
/// drag is in flight. The preview shows the exact bearing; quantization to
/// an hour or minute step happens only on release.
pub fn preview_drag_system(
    drag_state: Res<DragState>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut preview_query: Query<&mut Transform, With<PreviewHand>>,
) {
    if drag_state.dragged_hand().is_none() {
        return;
    }
    let Ok(window) = window_query.get_single() else { return };
    let Ok((camera, camera_transform)) = camera_query.get_single() else { return };
    let Some(face_pos) = cursor_face_position(window, camera, camera_transform) else { return };
    let Ok(mut transform) = preview_query.get_single_mut() else { return };

    let bearing = geometry::face_angle(face_pos);
    transform.rotation = Quat::from_rotation_z(-bearing.to_radians());
}

/// System that commits a grabbed hand on pointer release.
pub fn commit_drag_system(
    action_query: Query<&ActionState<ClockAction>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut drag_state: ResMut<DragState>,
    mut adjusted: EventWriter<HandAdjusted>,
) {
    let Ok(action_state) = action_query.get_single() else { return };
    if !action_state.just_released(&ClockAction::Grab) {
        return;
    }
    let Some(hand) = drag_state.dragged_hand() else { return };
    *drag_state = DragState::Idle;

    let Ok(window) = window_query.get_single() else { return };
    let Ok((camera, camera_transform)) = camera_query.get_single() else { return };
    let Some(face_pos) = cursor_face_position(window, camera, camera_transform) else { return };

    let value = match hand {
        HandKind::Hour => geometry::hours_from_position(face_pos),
        // The second hand runs on the same 60-step dial as the minute hand.
        HandKind::Minute | HandKind::Second => geometry::minutes_from_position(face_pos),
    };
    adjusted.send(HandAdjusted { hand, value });
}

/// System that discards a drag when the cursor leaves the window, matching
/// the leave-to-unselect behavior of the face.
pub fn cancel_drag_system(
    mut leave_events: EventReader<CursorLeft>,
    mut drag_state: ResMut<DragState>,
) {
    if leave_events.read().next().is_none() {
        return;
    }
    if let Some(hand) = drag_state.dragged_hand() {
        info!("Drag of {:?} hand discarded (cursor left the window)", hand);
        *drag_state = DragState::Idle;
    }
}
