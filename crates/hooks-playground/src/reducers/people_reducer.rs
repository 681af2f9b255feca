//! People Reducer

use crate::actions::PeopleAction;
use crate::state::PeopleState;
use playground_core::remove_person;

/// Reducer for the people list.
///
/// Keeps the selection inside the list after removals.
pub fn reduce_people(mut state: PeopleState, action: &PeopleAction) -> PeopleState {
    match action {
        PeopleAction::NavigateNext => {
            if state.selected + 1 < state.people.len() {
                state.selected += 1;
            }
        }
        PeopleAction::NavigatePrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        PeopleAction::Remove(id) => {
            let before = state.people.len();
            state.people = remove_person(std::mem::take(&mut state.people), *id);
            if state.people.len() < before {
                log::debug!("Removed person {}", id);
            } else {
                log::debug!("No person with id {} to remove", id);
            }
            state.selected = state.selected.min(state.people.len().saturating_sub(1));
        }
        PeopleAction::Restore => {
            state.people = state.original.clone();
            state.selected = 0;
        }
    }
    state
}
