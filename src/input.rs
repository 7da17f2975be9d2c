use crate::navigation::types::ArrowKey;
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use serde::{Deserialize, Serialize};

/// Lines per notch reported by line-based wheel encodings.
pub const TERMINAL_SCROLL_DETAIL: i32 = 3;
/// Scale applied to line-based wheel encodings to match pixel deltas.
pub const DETAIL_SCALE: i32 = 20;

/// Represents all possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Step through sections as an arrow key would.
    Arrow(ArrowKey),
    /// Jump to a nav item by position.
    NavItem(usize),
    /// The header call-to-action; jumps to the contact section.
    Contact,
    ToggleOverlay,
    CloseOverlay,
    SliderPrev,
    SliderNext,
}

/// Defines the key configuration for different actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyConfig {
    pub quit_key: char,       // Default: 'q'
    /// Vim-style alias for the down arrow.
    pub next_key: char,       // Default: 'j'
    /// Vim-style alias for the up arrow.
    pub prev_key: char,       // Default: 'k'
    pub contact_key: char,    // Default: 'c'
    /// Opens and closes the outer navigation overlay.
    pub menu_key: char,       // Default: 'm'
    pub slider_prev_key: char, // Default: 'h'
    pub slider_next_key: char, // Default: 'l'
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit_key: 'q',
            next_key: 'j',
            prev_key: 'k',
            contact_key: 'c',
            menu_key: 'm',
            slider_prev_key: 'h',
            slider_next_key: 'l',
        }
    }
}

impl KeyConfig {
    /// Maps a key event to an `Action` based on the current key configuration.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match code {
            KeyCode::Up => Some(Action::Arrow(ArrowKey::Up)),
            KeyCode::Down => Some(Action::Arrow(ArrowKey::Down)),
            KeyCode::Left => Some(Action::SliderPrev),
            KeyCode::Right => Some(Action::SliderNext),
            KeyCode::Esc => Some(Action::CloseOverlay),
            KeyCode::Char(c) => match c {
                c if c == self.quit_key => Some(Action::Quit),
                c if c == self.next_key => Some(Action::Arrow(ArrowKey::Down)),
                c if c == self.prev_key => Some(Action::Arrow(ArrowKey::Up)),
                c if c == self.contact_key => Some(Action::Contact),
                c if c == self.menu_key => Some(Action::ToggleOverlay),
                c if c == self.slider_prev_key => Some(Action::SliderPrev),
                c if c == self.slider_next_key => Some(Action::SliderNext),
                '1'..='9' => c.to_digit(10).map(|d| Action::NavItem(d as usize - 1)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Collapses the two wheel encodings into one signed delta, positive meaning
/// "scroll down". A non-zero `wheel_delta` wins and is inverted; otherwise
/// `detail` is scaled.
pub fn normalize_wheel(wheel_delta: Option<i32>, detail: i32) -> i32 {
    match wheel_delta {
        Some(delta) if delta != 0 => -delta,
        _ => detail * DETAIL_SCALE,
    }
}

/// Terminals report line-based notches, so each one becomes a `detail` of three lines.
pub fn terminal_wheel_delta(kind: MouseEventKind) -> Option<i32> {
    match kind {
        MouseEventKind::ScrollDown => Some(normalize_wheel(None, TERMINAL_SCROLL_DETAIL)),
        MouseEventKind::ScrollUp => Some(normalize_wheel(None, -TERMINAL_SCROLL_DETAIL)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_vim_keys_map_to_arrow_actions() {
        let keys = KeyConfig::default();
        let none = KeyModifiers::empty();
        assert_eq!(keys.get_action(KeyCode::Down, none), Some(Action::Arrow(ArrowKey::Down)));
        assert_eq!(keys.get_action(KeyCode::Char('j'), none), Some(Action::Arrow(ArrowKey::Down)));
        assert_eq!(keys.get_action(KeyCode::Char('k'), none), Some(Action::Arrow(ArrowKey::Up)));
        assert_eq!(keys.get_action(KeyCode::Up, none), Some(Action::Arrow(ArrowKey::Up)));
    }

    #[test]
    fn digits_select_nav_items_from_one() {
        let keys = KeyConfig::default();
        let none = KeyModifiers::empty();
        assert_eq!(keys.get_action(KeyCode::Char('1'), none), Some(Action::NavItem(0)));
        assert_eq!(keys.get_action(KeyCode::Char('9'), none), Some(Action::NavItem(8)));
        assert_eq!(keys.get_action(KeyCode::Char('0'), none), None);
    }

    #[test]
    fn custom_keys_are_honoured() {
        let keys = KeyConfig {
            menu_key: 'n',
            ..KeyConfig::default()
        };
        let none = KeyModifiers::empty();
        assert_eq!(keys.get_action(KeyCode::Char('n'), none), Some(Action::ToggleOverlay));
        assert_eq!(keys.get_action(KeyCode::Char('m'), none), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let keys = KeyConfig::default();
        assert_eq!(
            keys.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('c'), KeyModifiers::empty()),
            Some(Action::Contact)
        );
    }

    #[test]
    fn wheel_encodings_normalize() {
        assert_eq!(normalize_wheel(Some(120), 0), -120);
        assert_eq!(normalize_wheel(Some(-120), 0), 120);
        assert_eq!(normalize_wheel(None, 3), 60);
        assert_eq!(normalize_wheel(Some(0), -3), -60);
    }

    #[test]
    fn terminal_notch_clears_dead_zone() {
        assert_eq!(terminal_wheel_delta(MouseEventKind::ScrollDown), Some(60));
        assert_eq!(terminal_wheel_delta(MouseEventKind::ScrollUp), Some(-60));
        assert_eq!(terminal_wheel_delta(MouseEventKind::Moved), None);
    }
}
