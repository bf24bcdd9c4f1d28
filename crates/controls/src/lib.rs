//! Named input-action layer: logical actions grouped into maps that are
//! resolved by string name and sampled into per-frame pressed/edge/value
//! state from keyboard and gamepad devices.

use bevy::input::InputSystem;
use bevy::prelude::*;

pub mod action;
pub mod state;

pub use action::{Action, ActionBinding, ActionMap, ActionMaps, BindError, AXIS_DEADZONE};
pub use state::{update_actions, ActionData, ActionState};

/// Registers the action resources and the per-frame sampling pass.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<bevy::input::InputPlugin>() {
            app.add_plugins(bevy::input::InputPlugin);
        }
        app.init_resource::<ActionMaps>();
        app.init_resource::<ActionState>();
        app.add_systems(PreUpdate, update_actions.after(InputSystem));
    }
}
