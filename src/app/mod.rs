mod state;

use crossterm::event::KeyCode;

pub use state::{App, ConfirmPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// Slot targeted by a digit key, `'1'` is the leftmost swatch.
pub fn slot_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='8' => Some(c as usize - '1' as usize),
        _ => None,
    }
}
