//! Key parsing and the keybind registry.
//!
//! Keys are written the same way everywhere in the configuration:
//! `space`, `enter`, `f1`, `ctrl-t`, `alt-shift-up`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Parse a key string (`ctrl-t`, `space`, `f1`) into a key event.
///
/// Returns `None` for unknown key names.
#[must_use]
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    // A lone "-" is the minus key, not a separator
    if s == "-" {
        return Some(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let key_part = parts.last()?;

    for part in &parts[..parts.len().saturating_sub(1)] {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "btab" | "backtab" => KeyCode::BackTab,
        "bspace" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F)?,
        s if s.chars().count() == 1 => KeyCode::Char(s.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Convert a key event back to its string form.
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Lookup key ignoring event kind/state; shift is implied by uppercase chars.
fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    (key.code, modifiers)
}

/// Registry of global keybinds for one view.
#[derive(Debug, Clone)]
pub struct KeyBindings<A> {
    bindings: HashMap<(KeyCode, KeyModifiers), A>,
}

impl<A: Copy> KeyBindings<A> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: A) {
        self.bindings.insert(normalize(&key), action);
    }

    /// Bind the key described by `key`, falling back to `fallback` when it
    /// does not parse.
    ///
    /// Returns the canonical string of the key that was actually bound.
    pub fn bind_str(&mut self, key: &str, fallback: &str, action: A) -> String {
        let event = parse_key_string(key).or_else(|| {
            log::warn!("Invalid keybind '{key}', using '{fallback}'");
            parse_key_string(fallback)
        });
        let Some(event) = event else {
            return fallback.to_string();
        };

        self.bind(event, action);
        key_to_string(&event).unwrap_or_else(|| key.to_string())
    }

    /// Action bound to a key press, if any. Release events never match.
    #[must_use]
    pub fn lookup(&self, key: &KeyEvent) -> Option<A> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings.get(&normalize(key)).copied()
    }
}

impl<A: Copy> Default for KeyBindings<A> {
    fn default() -> Self {
        Self::new()
    }
}
