//! Keyboard and mouse state tracked across frames.

use fnv::FnvHashSet;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

/// Keys currently held down.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    held: FnvHashSet<VirtualKeyCode>,
}

impl KeyboardState {
    /// Creates a state with no key held.
    pub fn new() -> KeyboardState {
        KeyboardState::default()
    }

    /// Applies a winit keyboard event. Returns the key if it was just pressed.
    pub fn process(&mut self, input: &KeyboardInput) -> Option<VirtualKeyCode> {
        let key = input.virtual_keycode?;
        match input.state {
            ElementState::Pressed => self.press(key).then_some(key),
            ElementState::Released => {
                self.release(key);
                None
            }
        }
    }

    /// Marks `key` as held. Returns `false` for key repeats.
    pub fn press(&mut self, key: VirtualKeyCode) -> bool {
        self.held.insert(key)
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: VirtualKeyCode) {
        self.held.remove(&key);
    }

    /// Whether `key` is held.
    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Releases every key, used when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Turns raw mouse motion into camera offsets.
#[derive(Debug, Clone)]
pub struct MouseLook {
    first_motion: bool,
}

impl MouseLook {
    /// The first motion reported after creation is dropped.
    pub fn new() -> MouseLook {
        MouseLook { first_motion: true }
    }

    /// Drops the next motion, typically because the cursor was just captured and the
    /// first delta includes the jump to the capture position.
    pub fn reset(&mut self) {
        self.first_motion = true;
    }

    /// Converts a motion delta in pixels into `(xoffset, yoffset)`.
    ///
    /// Screen y grows downward while pitch grows upward, so y is reversed.
    pub fn motion(&mut self, dx: f64, dy: f64) -> Option<(f32, f32)> {
        if self.first_motion {
            self.first_motion = false;
            return None;
        }

        Some((dx as f32, -dy as f32))
    }
}

impl Default for MouseLook {
    fn default() -> MouseLook {
        MouseLook::new()
    }
}

/// Input visible to a chapter while it updates.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Held keys.
    pub keys: KeyboardState,
    /// Whether the cursor is captured for mouse look.
    pub cursor_captured: bool,
}

/// Adds `delta` to `value` and clamps the result to `[min, max]`.
pub fn adjust_clamped(value: f32, delta: f32, min: f32, max: f32) -> f32 {
    (value + delta).clamp(min, max)
}
