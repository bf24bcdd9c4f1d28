use bevy::prelude::*;
use controls::ActionState;

use crate::throttle::Aircraft;
use crate::tuning::AircraftTuning;
use crate::{PITCH, ROLL};

/// Translate each aircraft along its local forward axis. Runs before the
/// throttle update, so a frame always moves with the previous frame's speed.
pub fn apply_movement(time: Res<Time>, mut query: Query<(&Aircraft, &mut Transform)>) {
    for (craft, mut transform) in &mut query {
        let step = transform.forward() * craft.current_speed * time.delta_seconds();
        transform.translation += step;
    }
}

/// Apply roll and pitch from the active axis actions, in degrees per second
/// scaled by the read axis value.
pub fn apply_rotation(
    time: Res<Time>,
    actions: Res<ActionState>,
    tuning: Res<AircraftTuning>,
    mut query: Query<&mut Transform, With<Aircraft>>,
) {
    let dt = time.delta_seconds();
    let roll = actions.action(ROLL).copied().unwrap_or_default();
    let pitch = actions.action(PITCH).copied().unwrap_or_default();

    for mut transform in &mut query {
        if roll.pressed {
            transform.rotate_local_z((roll.value * tuning.roll_speed * dt).to_radians());
        }
        if pitch.pressed {
            transform.rotate_local_x((pitch.value * tuning.pitch_speed * dt).to_radians());
        }
    }
}
