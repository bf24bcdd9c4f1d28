use std::collections::HashMap;

use bevy::input::gamepad::{GamepadAxis, Gamepads};
use bevy::input::{Axis, Input};
use bevy::prelude::*;
use log::debug;

use crate::action::ActionMap;

/// Per-frame snapshot of one action.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionData {
    /// Level: the control is currently held past the deadzone.
    pub pressed: bool,
    /// Edge: went from released to held this frame.
    pub just_pressed: bool,
    /// Edge: went from held to released this frame.
    pub just_released: bool,
    /// Scalar value, 0.0/1.0 for buttons, [-1, 1] for axes.
    pub value: f32,
}

/// Live state of the currently enabled action map. Empty and inert until a
/// map is enabled; disabling clears every flag and value.
#[derive(Resource, Debug, Default)]
pub struct ActionState {
    map: Option<ActionMap>,
    data: HashMap<String, ActionData>,
}

impl ActionState {
    /// Enable a resolved action map, replacing any previous one.
    pub fn enable(&mut self, map: ActionMap) {
        debug!("enabling action map `{}`", map.name);
        self.data.clear();
        for action in &map.actions {
            self.data.insert(action.name.clone(), ActionData::default());
        }
        self.map = Some(map);
    }

    /// Disable input and reset all action state.
    pub fn disable(&mut self) {
        if let Some(map) = &self.map {
            debug!("disabling action map `{}`", map.name);
        }
        self.map = None;
        self.data.clear();
    }

    pub fn is_enabled(&self) -> bool {
        self.map.is_some()
    }

    pub fn action(&self, name: &str) -> Option<&ActionData> {
        self.data.get(name)
    }

    pub fn pressed(&self, name: &str) -> bool {
        self.action(name).is_some_and(|data| data.pressed)
    }

    pub fn just_pressed(&self, name: &str) -> bool {
        self.action(name).is_some_and(|data| data.just_pressed)
    }

    pub fn just_released(&self, name: &str) -> bool {
        self.action(name).is_some_and(|data| data.just_released)
    }

    pub fn value(&self, name: &str) -> f32 {
        self.action(name).map_or(0.0, |data| data.value)
    }

    fn refresh(&mut self, keys: &Input<KeyCode>, pads: &Gamepads, axes: &Axis<GamepadAxis>) {
        let Some(map) = &self.map else {
            return;
        };
        for action in &map.actions {
            let (pressed, value) = action.binding.sample(keys, pads, axes);
            let data = self.data.entry(action.name.clone()).or_default();
            data.just_pressed = pressed && !data.pressed;
            data.just_released = !pressed && data.pressed;
            data.pressed = pressed;
            data.value = value;
        }
    }
}

/// Sample every enabled action once per frame, deriving press/release edges
/// from level transitions.
pub fn update_actions(
    keys: Res<Input<KeyCode>>,
    pads: Res<Gamepads>,
    axes: Res<Axis<GamepadAxis>>,
    mut state: ResMut<ActionState>,
) {
    state.refresh(&keys, &pads, &axes);
}
