use bevy::prelude::*;
use serde::Deserialize;

/// Gameplay tuning for the player aircraft. All fields are externally
/// settable through the runtime config; defaults below apply otherwise.
#[derive(Resource, Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct AircraftTuning {
    /// Pitch rate in degrees per second per unit of input.
    pub pitch_speed: f32,
    /// Roll rate in degrees per second per unit of input.
    pub roll_speed: f32,
    /// Forward speed ceiling in units per second.
    pub max_speed: f32,
    /// Seconds for the delta-v ramp to saturate.
    pub delta_v_rampup_time: f32,
    /// Delta-v ramp target while throttling up.
    pub acceleration: f32,
    /// Delta-v ramp target while braking. Not read by the ramp today; see
    /// the note in the throttle module.
    pub deceleration: f32,
}

impl Default for AircraftTuning {
    fn default() -> Self {
        Self {
            pitch_speed: 2.0,
            roll_speed: 3.0,
            max_speed: 10.0,
            delta_v_rampup_time: 1.0,
            acceleration: 1.0,
            deceleration: 1.0,
        }
    }
}
