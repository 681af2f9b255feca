//! Search screen actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Append a character to the term
    Char(char),
    /// Remove the last character of the term
    Backspace,
    /// Empty the term
    Clear,
}
