/// Platform-agnostic input handling. The windowing layer turns its raw events
/// into [`InputEvent`]s; the simulation only ever sees a sampled
/// [`OccupantInput`] per tick.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Platform-independent input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    MouseMove { dx: f32, dy: f32 },
    FocusLost,
}

/// Keys currently held plus pointer motion accumulated since the last sample.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pressed_keys: HashSet<String>,
    pub look_delta: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.clone());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key.as_str());
            }
            InputEvent::MouseMove { dx, dy } => {
                self.look_delta.0 += dx;
                self.look_delta.1 += dy;
            }
            InputEvent::FocusLost => {
                self.clear_keys();
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn consume_look(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }
}

/// Key mapping configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub ascend: String,
    pub descend: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            ascend: " ".to_string(),
            descend: "Control".to_string(),
        }
    }
}

/// One tick's worth of already-sampled controls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OccupantInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Jump on land, swim up in water.
    pub ascend: bool,
    /// Swim down; ignored out of water.
    pub descend: bool,
    pub look_delta: (f32, f32),
}

impl OccupantInput {
    pub fn is_swimming_actively(&self) -> bool {
        self.ascend || self.descend
    }
}

/// Turns raw key state into occupant controls.
#[derive(Clone, Debug, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    fn held(&self, input: &InputState, key: &str) -> bool {
        input.is_key_pressed(key)
            || input
                .pressed_keys
                .iter()
                .any(|k| k.len() == 1 && k.eq_ignore_ascii_case(key))
    }

    pub fn is_moving_forward(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.forward) || input.is_key_pressed("ArrowUp")
    }

    pub fn is_moving_backward(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.backward) || input.is_key_pressed("ArrowDown")
    }

    pub fn is_moving_left(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.left) || input.is_key_pressed("ArrowLeft")
    }

    pub fn is_moving_right(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.right) || input.is_key_pressed("ArrowRight")
    }

    pub fn is_ascending(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.ascend)
    }

    pub fn is_descending(&self, input: &InputState) -> bool {
        self.held(input, &self.bindings.descend)
    }

    /// Samples the held controls and drains the accumulated pointer delta.
    pub fn sample(&self, input: &mut InputState) -> OccupantInput {
        OccupantInput {
            forward: self.is_moving_forward(input),
            backward: self.is_moving_backward(input),
            left: self.is_moving_left(input),
            right: self.is_moving_right(input),
            ascend: self.is_ascending(input),
            descend: self.is_descending(input),
            look_delta: input.consume_look(),
        }
    }
}
