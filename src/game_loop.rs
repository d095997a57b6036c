/// Screen-level state machine around the tick loop.
///
/// ```text
/// Menu ──Start──▶ Playing ──fell──▶ GameOver ──Restart──▶ Playing
///   │               │                  │
///   └─────Quit──────┴──────Quit────────┴──▶ Terminated
/// ```
use crate::input::{InputEvent, Key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Menu,
    Playing,
    GameOver,
    Terminated,
}

impl LoopState {
    /// Transition driven by a single input event.  Events that mean nothing
    /// in the current state leave it unchanged.
    pub fn on_event(self, event: InputEvent) -> LoopState {
        match (self, event) {
            (LoopState::Terminated, _) => LoopState::Terminated,
            (_, InputEvent::Quit) | (_, InputEvent::KeyDown(Key::Quit)) => LoopState::Terminated,
            (LoopState::Menu, InputEvent::KeyDown(Key::Start)) => LoopState::Playing,
            (LoopState::GameOver, InputEvent::KeyDown(Key::Restart)) => LoopState::Playing,
            (state, _) => state,
        }
    }

    /// Playing ends when the session reports game over.
    pub fn on_session_over(self) -> LoopState {
        match self {
            LoopState::Playing => LoopState::GameOver,
            other => other,
        }
    }
}
