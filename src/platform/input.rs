//! Keyboard state
//!
//! Updated from winit key events; demos query it once per frame.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Keys held down and keys pressed since the last frame
#[derive(Debug, Default)]
pub struct KeyInput {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// True only on the frame the key went down (auto-repeat ignored)
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// -1, 0 or 1 from a pair of opposing keys
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.held(negative) {
            value -= 1.0;
        }
        if self.held(positive) {
            value += 1.0;
        }
        value
    }

    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget per-frame presses; call after the frame has been updated
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}
