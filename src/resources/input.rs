use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonSnapshot {
    pub pressed: bool,
    pub touched: bool,
    pub value: f64,
}

impl ButtonSnapshot {
    pub fn pressed() -> Self {
        Self {
            pressed: true,
            touched: true,
            value: 1.0,
        }
    }
}

/// Raw state of one hand controller as reported by the device layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamepadSnapshot {
    pub axes: Vec<f64>,
    pub buttons: Vec<ButtonSnapshot>,
}

impl GamepadSnapshot {
    pub fn with_axes(axes: Vec<f64>) -> Self {
        Self {
            axes,
            buttons: Vec::new(),
        }
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).map_or(false, |b| b.pressed)
    }

    /// Mark button `index` pressed, growing the button list as needed.
    pub fn press(&mut self, index: usize) {
        if self.buttons.len() <= index {
            self.buttons.resize(index + 1, ButtonSnapshot::default());
        }
        self.buttons[index] = ButtonSnapshot::pressed();
    }
}

/// Latest controller samples, written once per frame by the device layer.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SuitPads {
    pub left: Option<GamepadSnapshot>,
    pub right: Option<GamepadSnapshot>,
}
