//! Analog clock face - rim, tick marks, numerals, and the three hands.
//!
//! Uses Lyon vector graphics in the face's own 200x200 coordinate space,
//! mapped so the face center (100,100) sits at the world origin.

use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;

use crate::components::{Hand, HandKind, PreviewHand};
use crate::plugins::core::WidgetState;
use crate::resources::{ClockTime, DragState};
use crate::systems::drag::{
    begin_drag_system, cancel_drag_system, commit_drag_system, preview_drag_system,
};

pub struct ClockFacePlugin;

impl Plugin for ClockFacePlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(OnEnter(WidgetState::Attached), spawn_clock_face)
            .add_systems(
                Update,
                (
                    begin_drag_system,
                    preview_drag_system,
                    commit_drag_system,
                    cancel_drag_system,
                    update_hand_bearings,
                    update_hand_highlight,
                    update_preview_visibility,
                )
                    .run_if(in_state(WidgetState::Attached)),
            )
            .add_systems(OnExit(WidgetState::Attached), despawn_clock_face);
    }
}

// Geometry Constants (face units)
const RIM_RADIUS: f32 = 96.0;
const RIM_STROKE: f32 = 4.0;
const HUB_RADIUS: f32 = 4.0;
const NUMERAL_RADIUS: f32 = 78.0;
const MINOR_TICK_LENGTH: f32 = 4.0;
const MAJOR_TICK_LENGTH: f32 = 9.0;
const TICK_INSET: f32 = 3.0;

// Palette (beige face, black ink, gray selection)
pub const COLOR_FACE: Color = Color::srgb(0.96, 0.96, 0.86);
pub const COLOR_INK: Color = Color::srgb(0.0, 0.0, 0.0);
pub const COLOR_SELECTED: Color = Color::srgb(0.5, 0.5, 0.5);

/// Marker for every entity belonging to the clock face.
#[derive(Component)]
pub struct ClockWidget;

/// Marker for the face root all parts hang off.
#[derive(Component)]
pub struct ClockFaceRoot;

fn spawn_clock_face(mut commands: Commands) {
    let root = commands
        .spawn((
            Name::new("Clock Face Root"),
            ClockWidget,
            ClockFaceRoot,
            Transform::default(),
            Visibility::Inherited,
        ))
        .id();

    // Rim
    let rim = shapes::Circle { radius: RIM_RADIUS, center: Vec2::ZERO };
    commands.spawn((
        ShapeBundle {
            path: GeometryBuilder::build_as(&rim),
            transform: Transform::from_xyz(0.0, 0.0, 0.1),
            ..default()
        },
        Fill::color(COLOR_FACE),
        Stroke::new(COLOR_INK, RIM_STROKE),
        ClockWidget,
    )).set_parent(root);

    // Minute ticks, majors every five
    for i in 0..60 {
        let bearing = (i as f32 * 6.0).to_radians();
        let direction = Vec2::new(bearing.sin(), bearing.cos());
        let (length, width) = if i % 5 == 0 {
            (MAJOR_TICK_LENGTH, 2.0)
        } else {
            (MINOR_TICK_LENGTH, 1.0)
        };
        let outer = RIM_RADIUS - TICK_INSET;

        let mut path = PathBuilder::new();
        path.move_to(direction * (outer - length));
        path.line_to(direction * outer);
        commands.spawn((
            ShapeBundle {
                path: path.build(),
                transform: Transform::from_xyz(0.0, 0.0, 0.15),
                ..default()
            },
            Stroke::new(COLOR_INK, width),
            ClockWidget,
        )).set_parent(root);
    }

    // Numerals on the 12-hour dial
    for hour in 1..=12u32 {
        let bearing = (hour as f32 * 30.0).to_radians();
        let position = Vec2::new(bearing.sin(), bearing.cos()) * NUMERAL_RADIUS;
        commands.spawn((
            Text2d::new(hour.to_string()),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(COLOR_INK),
            Transform::from_xyz(position.x, position.y, 0.2),
            ClockWidget,
        )).set_parent(root);
    }

    // Preview line: not selectable, hidden until a drag begins
    let mut preview_path = PathBuilder::new();
    preview_path.move_to(Vec2::ZERO);
    preview_path.line_to(Vec2::new(0.0, HandKind::Hour.length()));
    commands.spawn((
        ShapeBundle {
            path: preview_path.build(),
            transform: Transform::from_xyz(0.0, 0.0, 0.25),
            ..default()
        },
        Stroke::new(COLOR_SELECTED, 1.5),
        Visibility::Hidden,
        PreviewHand,
        ClockWidget,
    )).set_parent(root);

    // Hands, hour topmost
    for (kind, z) in [
        (HandKind::Second, 0.3),
        (HandKind::Minute, 0.4),
        (HandKind::Hour, 0.5),
    ] {
        let mut path = PathBuilder::new();
        path.move_to(Vec2::ZERO);
        path.line_to(Vec2::new(0.0, kind.length()));
        commands.spawn((
            ShapeBundle {
                path: path.build(),
                transform: Transform::from_xyz(0.0, 0.0, z),
                ..default()
            },
            Stroke::new(COLOR_INK, kind.stroke_width()),
            Hand(kind),
            ClockWidget,
        )).set_parent(root);
    }

    // Hub cap over the hand bases
    let hub = shapes::Circle { radius: HUB_RADIUS, center: Vec2::ZERO };
    commands.spawn((
        ShapeBundle {
            path: GeometryBuilder::build_as(&hub),
            transform: Transform::from_xyz(0.0, 0.0, 0.6),
            ..default()
        },
        Fill::color(COLOR_FACE),
        Stroke::new(COLOR_INK, RIM_STROKE),
        ClockWidget,
    )).set_parent(root);

    info!("Spawned clock face");
}

/// System that keeps the hands on their clock bearings.
fn update_hand_bearings(
    clock: Res<ClockTime>,
    mut hand_query: Query<(&Hand, &mut Transform)>,
) {
    if !clock.is_changed() {
        return;
    }
    for (hand, mut transform) in &mut hand_query {
        let bearing = hand.0.bearing_degrees(&clock);
        transform.rotation = Quat::from_rotation_z(-bearing.to_radians());
    }
}

/// System that paints the grabbed hand with the selection color.
fn update_hand_highlight(
    drag_state: Res<DragState>,
    mut hand_query: Query<(&Hand, &mut Stroke)>,
) {
    if !drag_state.is_changed() {
        return;
    }
    for (hand, mut stroke) in &mut hand_query {
        let selected = drag_state.dragged_hand() == Some(hand.0);
        stroke.color = if selected { COLOR_SELECTED } else { COLOR_INK };
    }
}

/// System that shows the preview line only while a drag is in flight.
fn update_preview_visibility(
    drag_state: Res<DragState>,
    mut preview_query: Query<&mut Visibility, With<PreviewHand>>,
) {
    if !drag_state.is_changed() {
        return;
    }
    let Ok(mut visibility) = preview_query.get_single_mut() else { return };
    *visibility = if drag_state.dragged_hand().is_some() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

fn despawn_clock_face(mut commands: Commands, query: Query<Entity, With<ClockWidget>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
