use winit::event::{ElementState, VirtualKeyCode};

pub const ESCAPE: char = '\u{1b}';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Ignore,
}

/// Maps a received character, only Escape does anything.
pub fn action_for_char(c: char) -> KeyAction {
    if c == ESCAPE {
        KeyAction::Quit
    } else {
        KeyAction::Ignore
    }
}

pub fn action_for_key(state: ElementState, key: Option<VirtualKeyCode>) -> KeyAction {
    match (state, key) {
        (ElementState::Pressed, Some(VirtualKeyCode::Escape)) => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
