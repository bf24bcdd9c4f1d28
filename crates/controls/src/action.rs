use bevy::input::gamepad::{GamepadAxis, GamepadAxisType, Gamepads};
use bevy::input::{Axis, Input};
use bevy::prelude::*;
use thiserror::Error;

/// Gamepad axis readings smaller than this count as neutral.
pub const AXIS_DEADZONE: f32 = 0.1;

/// Lookup failures when resolving action maps or actions by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("no action map named `{0}`")]
    UnknownMap(String),
    #[error("action map `{map}` has no action named `{action}`")]
    UnknownAction { map: String, action: String },
}

/// Physical inputs backing one logical action.
#[derive(Clone, Debug)]
pub enum ActionBinding {
    /// Held/released control; value reads 1.0 while held.
    Button { keys: Vec<KeyCode> },
    /// Scalar control in [-1, 1]. A key pair supplies -1/+1; a gamepad
    /// axis is consulted while neither key is held.
    Axis {
        negative: KeyCode,
        positive: KeyCode,
        gamepad: Option<GamepadAxisType>,
    },
}

impl ActionBinding {
    /// Sample the binding against the current input devices.
    /// Returns the held level and the scalar value.
    pub(crate) fn sample(
        &self,
        keys: &Input<KeyCode>,
        pads: &Gamepads,
        axes: &Axis<GamepadAxis>,
    ) -> (bool, f32) {
        match self {
            Self::Button { keys: bound } => {
                let pressed = bound.iter().any(|key| keys.pressed(*key));
                (pressed, if pressed { 1.0 } else { 0.0 })
            }
            Self::Axis {
                negative,
                positive,
                gamepad,
            } => {
                let mut value = 0.0;
                if keys.pressed(*negative) {
                    value -= 1.0;
                }
                if keys.pressed(*positive) {
                    value += 1.0;
                }
                if value == 0.0 {
                    if let Some(axis_type) = gamepad {
                        for pad in pads.iter() {
                            if let Some(read) = axes.get(GamepadAxis::new(pad, *axis_type)) {
                                if read.abs() > AXIS_DEADZONE {
                                    value = read;
                                    break;
                                }
                            }
                        }
                    }
                }
                (value.abs() > AXIS_DEADZONE, value)
            }
        }
    }
}

/// One logical control resolved by name.
#[derive(Clone, Debug)]
pub struct Action {
    pub name: String,
    pub binding: ActionBinding,
}

/// Named group of logical controls.
#[derive(Clone, Debug)]
pub struct ActionMap {
    pub name: String,
    pub actions: Vec<Action>,
}

impl ActionMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    /// Add a held/released action bound to one or more keys.
    pub fn button(mut self, name: impl Into<String>, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        self.actions.push(Action {
            name: name.into(),
            binding: ActionBinding::Button {
                keys: keys.into_iter().collect(),
            },
        });
        self
    }

    /// Add a scalar action bound to a key pair and an optional gamepad axis.
    pub fn axis(
        mut self,
        name: impl Into<String>,
        negative: KeyCode,
        positive: KeyCode,
        gamepad: Option<GamepadAxisType>,
    ) -> Self {
        self.actions.push(Action {
            name: name.into(),
            binding: ActionBinding::Axis {
                negative,
                positive,
                gamepad,
            },
        });
        self
    }

    pub fn find(&self, name: &str) -> Result<&Action, BindError> {
        self.actions
            .iter()
            .find(|action| action.name == name)
            .ok_or_else(|| BindError::UnknownAction {
                map: self.name.clone(),
                action: name.to_string(),
            })
    }
}

/// The configured action set: every map the application defines, resolved
/// by string name when a gameplay object binds its controls.
#[derive(Resource, Clone, Debug, Default)]
pub struct ActionMaps {
    maps: Vec<ActionMap>,
}

impl ActionMaps {
    pub fn with_map(mut self, map: ActionMap) -> Self {
        self.maps.push(map);
        self
    }

    pub fn find_map(&self, name: &str) -> Result<&ActionMap, BindError> {
        self.maps
            .iter()
            .find(|map| map.name == name)
            .ok_or_else(|| BindError::UnknownMap(name.to_string()))
    }
}
