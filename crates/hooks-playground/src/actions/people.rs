//! People screen actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleAction {
    NavigateNext,
    NavigatePrevious,
    /// Remove the person with this id
    Remove(u32),
    /// Bring back everyone that was removed
    Restore,
}
