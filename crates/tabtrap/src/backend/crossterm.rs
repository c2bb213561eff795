//! Translation from crossterm input events.

use crossterm::event as cevent;

use crate::event::key;

/// Translate crossterm key modifiers into a modifier state. Both the super
/// and meta modifiers map onto `meta`.
pub fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
        meta: mods.contains(cevent::KeyModifiers::SUPER)
            || mods.contains(cevent::KeyModifiers::META),
    }
}

/// Translate a crossterm key event into a keystroke. Codes with no
/// counterpart in the crate's model map to `KeyCode::Null`.
pub fn translate_key(k: cevent::KeyEvent) -> key::Key {
    key::Key {
        mods: translate_key_modifiers(k.modifiers),
        code: match k.code {
            cevent::KeyCode::Backspace => key::KeyCode::Backspace,
            cevent::KeyCode::Enter => key::KeyCode::Enter,
            cevent::KeyCode::Left => key::KeyCode::Left,
            cevent::KeyCode::Right => key::KeyCode::Right,
            cevent::KeyCode::Up => key::KeyCode::Up,
            cevent::KeyCode::Down => key::KeyCode::Down,
            cevent::KeyCode::Home => key::KeyCode::Home,
            cevent::KeyCode::End => key::KeyCode::End,
            cevent::KeyCode::PageUp => key::KeyCode::PageUp,
            cevent::KeyCode::PageDown => key::KeyCode::PageDown,
            cevent::KeyCode::Tab => key::KeyCode::Tab,
            cevent::KeyCode::BackTab => key::KeyCode::BackTab,
            cevent::KeyCode::Delete => key::KeyCode::Delete,
            cevent::KeyCode::Insert => key::KeyCode::Insert,
            cevent::KeyCode::F(x) => key::KeyCode::F(x),
            cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
            cevent::KeyCode::Esc => key::KeyCode::Esc,
            _ => key::KeyCode::Null,
        },
    }
}
