//! Movement domain: input sampling for locomotion, look and grapple.

use bevy::ecs::message::MessageWriter;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::events::GrappleCommand;
use crate::movement::resources::{LookAngles, LookTuning, MovementInput};

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
) {
    input.forward = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    input.backward = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.sprint = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump = keyboard.pressed(KeyCode::Space);
}

pub(crate) fn read_look(
    motion: Res<AccumulatedMouseMotion>,
    tuning: Res<LookTuning>,
    mut look: ResMut<LookAngles>,
) {
    if motion.delta != Vec2::ZERO {
        look.apply_mouse_delta(motion.delta, &tuning);
    }
}

pub(crate) fn read_grapple_buttons(
    mouse: Res<ButtonInput<MouseButton>>,
    mut grapple_commands: MessageWriter<GrappleCommand>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        grapple_commands.write(GrappleCommand::Fire);
    }
    if mouse.just_released(MouseButton::Left) {
        grapple_commands.write(GrappleCommand::Release);
    }
}
