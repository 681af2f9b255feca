/// Generic text input intent, translated by views that accept text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    Backspace,
    /// Clear the whole line (Ctrl+U)
    ClearLine,
    Escape,
}
