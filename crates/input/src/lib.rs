//! Flight-control input: discrete directional signals and the keyboard
//! state that produces them.
//!
//! Entities never poll a backend. Each tick the host builds a
//! [`FlightControls`] snapshot (from [`InputState`] or by hand in tests and
//! scripted demos) and passes it into the update.

use std::collections::HashSet;

/// The four discrete directional control signals.
///
/// `Left`/`Right` each drive roll and yaw together; signals are independent
/// and any combination may be active in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSignal {
    /// Nose up (pitch decreases).
    PitchUp,
    /// Nose down (pitch increases).
    PitchDown,
    /// Roll and yaw left.
    Left,
    /// Roll and yaw right.
    Right,
}

/// Per-tick snapshot of the flight-control signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightControls {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub left: bool,
    pub right: bool,
}

impl FlightControls {
    /// Snapshot with no signal active (no player control this tick).
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Check whether a signal is active in this snapshot.
    pub fn is_active(&self, signal: ControlSignal) -> bool {
        match signal {
            ControlSignal::PitchUp => self.pitch_up,
            ControlSignal::PitchDown => self.pitch_down,
            ControlSignal::Left => self.left,
            ControlSignal::Right => self.right,
        }
    }

    /// True if any signal is active.
    pub fn any_active(&self) -> bool {
        self.pitch_up || self.pitch_down || self.left || self.right
    }
}

/// Manages keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Build this frame's flight-control snapshot.
    ///
    /// Key map: A = pitch up, Q = pitch down, O = left, P = right.
    pub fn flight_controls(&self) -> FlightControls {
        FlightControls {
            pitch_up: self.is_key_held(KeyCode::KeyA),
            pitch_down: self.is_key_held(KeyCode::KeyQ),
            left: self.is_key_held(KeyCode::KeyO),
            right: self.is_key_held(KeyCode::KeyP),
        }
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
