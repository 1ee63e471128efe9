//! Keyboard input handling

use game_core::InputState;

/// A control the game reads from the held-key snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
}

/// Map a `KeyboardEvent.key` value to its control
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "w" | "W" => Some(Control::LeftUp),
        "s" | "S" => Some(Control::LeftDown),
        "ArrowUp" => Some(Control::RightUp),
        "ArrowDown" => Some(Control::RightDown),
        "p" | "P" => Some(Control::Pause),
        _ => None,
    }
}

/// Record a key press or release, returns whether the key is one of ours
pub fn apply_key(input: &mut InputState, key: &str, pressed: bool) -> bool {
    let Some(control) = control_for_key(key) else {
        return false;
    };
    let held = match control {
        Control::LeftUp => &mut input.left_up,
        Control::LeftDown => &mut input.left_down,
        Control::RightUp => &mut input.right_up,
        Control::RightDown => &mut input.right_down,
        Control::Pause => &mut input.pause,
    };
    *held = pressed;
    true
}
