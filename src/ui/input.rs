//! Keyboard/mouse mapping
//!
//! Held keys become a `FrameInput` each frame; discrete key presses and
//! clicks become phase `Command`s.

use glam::Vec2;

use super::menu::button_at;
use crate::sim::{Command, FrameInput, GamePhase};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    R,
    Escape,
}

impl Key {
    const COUNT: usize = 6;

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "r" | "R" => Some(Key::R),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Something that knows which keys are currently held
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Held-key table fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; Key::COUNT],
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held = [false; Key::COUNT];
    }
}

impl InputSource for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Sample held keys for one frame
pub fn frame_input(source: &dyn InputSource) -> FrameInput {
    FrameInput {
        left: source.is_key_down(Key::Left),
        right: source.is_key_down(Key::Right),
        jump: source.is_key_down(Key::Up),
        down: source.is_key_down(Key::Down),
    }
}

/// Command for a key press: R restarts and Escape returns to the menu once a
/// run has finished
pub fn key_command(phase: GamePhase, key: Key) -> Option<Command> {
    if !phase.is_finished() {
        return None;
    }
    match key {
        Key::R => Some(Command::Restart),
        Key::Escape => Some(Command::Menu),
        _ => None,
    }
}

/// Command for a mouse click; only the home menu is clickable
pub fn click_command(phase: GamePhase, pos: Vec2) -> Option<Command> {
    if phase != GamePhase::Home {
        return None;
    }
    button_at(pos).map(|button| button.command())
}
