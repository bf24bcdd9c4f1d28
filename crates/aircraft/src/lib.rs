//! Player aircraft behavior: four logical controls drive a ramped forward
//! speed, per-frame translation and roll/pitch rotation, and two HUD
//! readouts. Controls bind when the flight phase becomes active and release
//! when it ends.

use bevy::input::gamepad::GamepadAxisType;
use bevy::prelude::*;
use controls::{ActionMap, ActionMaps, ActionState, BindError};
use log::error;

pub mod hud;
pub mod motion;
pub mod throttle;
pub mod tuning;

pub use throttle::Aircraft;
pub use tuning::AircraftTuning;

/// Name of the action map this behavior resolves at activation.
pub const ACTION_MAP: &str = "Aircraft";
pub const ACCELERATE: &str = "Accelerate";
pub const DECELERATE: &str = "Decelerate";
pub const ROLL: &str = "Roll";
pub const PITCH: &str = "Pitch";

/// Whether flight is running. Entering `Active` binds the aircraft's action
/// map; leaving it releases the bindings and resets their state.
#[derive(States, Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum FlightPhase {
    #[default]
    Active,
    Paused,
}

/// Registers aircraft state, lifecycle hooks, and the per-frame tick:
/// move, throttle, rotate, then refresh the HUD.
pub struct AircraftPlugin;

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AircraftTuning>();
        app.init_resource::<ActionMaps>();
        app.init_resource::<ActionState>();
        app.init_resource::<Input<KeyCode>>();
        app.add_state::<FlightPhase>();
        app.add_systems(OnEnter(FlightPhase::Active), enable_controls);
        app.add_systems(OnExit(FlightPhase::Active), disable_controls);
        app.add_systems(Startup, hud::setup_hud);
        app.add_systems(
            Update,
            (
                motion::apply_movement,
                throttle::throttle_ramp,
                motion::apply_rotation,
                hud::update_hud,
            )
                .chain()
                .run_if(in_state(FlightPhase::Active)),
        );
        app.add_systems(Update, toggle_pause);
    }
}

/// Default key and gamepad bindings for the aircraft action map.
pub fn standard_bindings() -> ActionMaps {
    ActionMaps::default().with_map(
        ActionMap::new(ACTION_MAP)
            .button(ACCELERATE, [KeyCode::ShiftLeft])
            .button(DECELERATE, [KeyCode::ControlLeft])
            .axis(ROLL, KeyCode::A, KeyCode::D, Some(GamepadAxisType::LeftStickX))
            .axis(PITCH, KeyCode::S, KeyCode::W, Some(GamepadAxisType::LeftStickY)),
    )
}

fn resolve_bindings(maps: &ActionMaps) -> Result<ActionMap, BindError> {
    let map = maps.find_map(ACTION_MAP)?;
    for name in [ACCELERATE, DECELERATE, ROLL, PITCH] {
        map.find(name)?;
    }
    Ok(map.clone())
}

/// Bind the aircraft action map. A failed lookup leaves input disabled for
/// good and is only reported, not recovered.
fn enable_controls(maps: Res<ActionMaps>, mut actions: ResMut<ActionState>) {
    match resolve_bindings(&maps) {
        Ok(map) => actions.enable(map),
        Err(err) => error!("flight controls stay disabled: {err}"),
    }
}

fn disable_controls(mut actions: ResMut<ActionState>) {
    actions.disable();
}

fn toggle_pause(
    keys: Res<Input<KeyCode>>,
    phase: Res<State<FlightPhase>>,
    mut next: ResMut<NextState<FlightPhase>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next.set(match phase.get() {
            FlightPhase::Active => FlightPhase::Paused,
            FlightPhase::Paused => FlightPhase::Active,
        });
    }
}
