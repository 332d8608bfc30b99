mod capture;
mod hotkey;

pub use capture::{capture_target, capture_window, list_windows, screen_bounds};
pub use hotkey::{HotkeyAction, HotkeyManager, bindings, parse_hotkey};
