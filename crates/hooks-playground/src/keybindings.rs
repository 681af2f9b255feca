//! Keybinding system
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `ParsedKeyPattern`: Key code plus modifiers, parsed from text like "ctrl+c"
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "shift+tab", "+"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "+", "R" (case-sensitive)
/// - With modifiers: "ctrl+c", "shift+tab", "alt+x"
/// - Special keys: "tab", "backtab", "enter", "esc", "backspace", "delete", "up", "down"
/// - Function keys: "f1" .. "f12"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // Single characters keep their case; "+" and "-" are keys, not separators
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let mut code = parse_key_code(key_part)?;

    // Terminals report shift+tab as BackTab
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
        modifiers.remove(KeyModifiers::SHIFT);
    }

    Some(ParsedKeyPattern { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// Modifiers that take part in matching. Shift is already encoded in the
/// character (or in BackTab), and terminals disagree on reporting it.
fn significant(modifiers: KeyModifiers) -> KeyModifiers {
    modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap; bindings whose pattern does not parse are dropped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                pattern.code == key.code
                    && significant(pattern.modifiers) == significant(key.modifiers)
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Iterate over all bindings
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(binding, _)| binding)
    }
}
