/// Terminal-independent input model.
///
/// The binary turns raw key events into `InputEvent`s.  One-shot actions
/// (quit, restart, start) are read straight off the event; steering uses
/// `KeyTracker`, which remembers the frame each key was last seen so a key
/// counts as held across frames.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol etc.): real release
///   events arrive and remove keys immediately.
/// * **Classic terminals**: only presses, with OS key-repeat showing up as
///   repeated presses.  Keys expire after `HOLD_WINDOW` frames of silence.
use std::collections::HashMap;

use crate::entities::TickInput;

/// A key counts as held if it was seen within this many frames.  At 60 FPS
/// this is ≈133 ms, longer than any OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Start,
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Window/terminal close or Ctrl-C.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<Key, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: InputEvent, frame: u64) {
        match event {
            InputEvent::KeyDown(key) => {
                self.last_seen.insert(key, frame);
            }
            InputEvent::KeyUp(key) => {
                self.last_seen.remove(&key);
            }
            InputEvent::Quit => {}
        }
    }

    pub fn is_pressed(&self, key: Key, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Steering for this frame.  Holding both directions cancels out.
    pub fn steering(&self, frame: u64) -> TickInput {
        match (self.is_pressed(Key::Left, frame), self.is_pressed(Key::Right, frame)) {
            (true, false) => TickInput::Left,
            (false, true) => TickInput::Right,
            _ => TickInput::None,
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
