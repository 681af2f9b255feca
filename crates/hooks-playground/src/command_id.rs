//! Command identifiers
//!
//! Commands are the semantic actions users can trigger. Keybindings refer to
//! them by id; the active view decides what a view-specific command means.

use serde::{Deserialize, Serialize};

/// The enum is serialized as snake_case (e.g., `CounterStep` -> `"counter_step"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Global ===
    GlobalQuit,
    GlobalClose,
    ScreenNext,
    ScreenPrevious,
    KeyBindingsToggleView,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,

    // === Counter ===
    CounterIncrement,
    CounterDecrement,
    /// Add the configured step to the latest count
    CounterStep,
    /// Patch the count back to its initial value
    CounterReset,

    // === People ===
    PeopleRemoveSelected,
    PeopleRestore,
}

impl CommandId {
    /// Human readable title, shown in the key bindings overlay
    pub fn title(&self) -> &'static str {
        match self {
            Self::GlobalQuit => "Quit",
            Self::GlobalClose => "Close view / quit",
            Self::ScreenNext => "Next screen",
            Self::ScreenPrevious => "Previous screen",
            Self::KeyBindingsToggleView => "Toggle key bindings",
            Self::NavigateNext => "Select next",
            Self::NavigatePrevious => "Select previous",
            Self::CounterIncrement => "Increment",
            Self::CounterDecrement => "Decrement",
            Self::CounterStep => "Add step",
            Self::CounterReset => "Reset count",
            Self::PeopleRemoveSelected => "Remove person",
            Self::PeopleRestore => "Restore people",
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigateNext | Self::NavigatePrevious)
    }
}
