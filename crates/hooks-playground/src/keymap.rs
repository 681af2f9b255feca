pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Screens
        KeyBinding::new("tab", "Tab", ScreenNext),
        KeyBinding::new("shift+tab", "Shift+Tab", ScreenPrevious),
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        // Counter
        KeyBinding::new("+", "+", CounterIncrement),
        KeyBinding::new("-", "-", CounterDecrement),
        KeyBinding::new("s", "s", CounterStep),
        KeyBinding::new("r", "r", CounterReset),
        // People
        KeyBinding::new("x", "x", PeopleRemoveSelected),
        KeyBinding::new("delete", "Del", PeopleRemoveSelected),
        KeyBinding::new("R", "R", PeopleRestore),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // Reachable from text input views, where "?" is typed
        KeyBinding::new("f1", "F1", KeyBindingsToggleView),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
