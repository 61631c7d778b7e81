//! Core domain: camera, lighting and cursor lock systems.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::core::state::GameState;

/// Marker for the first-person camera driven by the player session.
#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) const FOG_COLOR: Color = Color::srgb(0.043, 0.063, 0.125);
pub(crate) const FOG_START: f32 = 30.0;
pub(crate) const FOG_END: f32 = 220.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
            ..default()
        }),
        DistanceFog {
            color: FOG_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 8.0),
    ));
}

pub(crate) fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x9b, 0xb8, 0xff),
        brightness: 350.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0x9e, 0xcb, 0xff),
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 60.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// A click while paused locks the pointer and starts play
pub(crate) fn enter_play_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        next_state.set(GameState::Playing);
    }
}

pub(crate) fn pause_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Paused);
    }
}

pub(crate) fn grab_cursor(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
    info!("Pointer locked");
}

pub(crate) fn release_cursor(mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
    info!("Pointer released");
}
