use bevy::prelude::*;
use controls::ActionState;

use crate::tuning::AircraftTuning;
use crate::{ACCELERATE, DECELERATE};

/// Forward-speed state for a player aircraft.
///
/// `current_speed` is clamped to `[0, max_speed]` every frame; `delta_v` is
/// the ramped rate of change it accumulates from; `ramp_elapsed` is the
/// shared ramp timer, reset on every throttle press or release.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Aircraft {
    pub current_speed: f32,
    pub delta_v: f32,
    pub ramp_elapsed: f32,
}

/// Clamped linear interpolation; a factor past 1 snaps to the target.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Advance the throttle ramp and integrate forward speed.
///
/// Accelerate and decelerate are independent; holding both runs both
/// branches in this order and advances the shared timer twice per frame.
/// With neither held, `delta_v` decays back toward zero on the same ramp
/// schedule, reaching exactly zero once a full ramp period has passed.
pub fn throttle_ramp(
    time: Res<Time>,
    actions: Res<ActionState>,
    tuning: Res<AircraftTuning>,
    mut query: Query<&mut Aircraft>,
) {
    let dt = time.delta_seconds();
    let accelerating = actions.pressed(ACCELERATE);
    let decelerating = actions.pressed(DECELERATE);
    let throttle_edge = actions.just_pressed(ACCELERATE)
        || actions.just_released(ACCELERATE)
        || actions.just_pressed(DECELERATE)
        || actions.just_released(DECELERATE);

    for mut craft in &mut query {
        if throttle_edge {
            craft.ramp_elapsed = 0.0;
        }
        if accelerating {
            craft.ramp_elapsed += dt;
            let ratio = craft.ramp_elapsed / tuning.delta_v_rampup_time;
            craft.delta_v = lerp(craft.delta_v, tuning.acceleration, ratio);
            craft.current_speed =
                (craft.current_speed + craft.delta_v * dt).clamp(0.0, tuning.max_speed);
        }
        if decelerating {
            craft.ramp_elapsed += dt;
            let ratio = craft.ramp_elapsed / tuning.delta_v_rampup_time;
            // TODO: fold the two throttle rates into one signed rate; the
            // braking ramp still chases `acceleration` here.
            craft.delta_v = lerp(craft.delta_v, tuning.acceleration, ratio);
            craft.current_speed =
                (craft.current_speed - craft.delta_v * dt).clamp(0.0, tuning.max_speed);
        }
        if !accelerating && !decelerating && craft.delta_v > 0.0 {
            craft.ramp_elapsed += dt;
            let ratio = craft.ramp_elapsed / tuning.delta_v_rampup_time;
            craft.delta_v = lerp(craft.delta_v, 0.0, ratio);
        }
    }
}
