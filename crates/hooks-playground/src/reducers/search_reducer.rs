//! Search Reducer

use crate::actions::SearchAction;
use crate::state::SearchState;

/// Reducer for the search term
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::Char(c) => {
            state.term.push(*c);
        }
        SearchAction::Backspace => {
            state.term.pop();
        }
        SearchAction::Clear => {
            state.term.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(term: &str) -> SearchState {
        SearchState::new(term, playground_core::load_stories().unwrap())
    }

    #[test]
    fn test_typing_narrows_results() {
        let s = reduce_search(state(""), &SearchAction::Char('r'));
        let s = reduce_search(s, &SearchAction::Char('e'));
        assert_eq!(s.term, "re");
        assert_eq!(s.results().len(), 2);

        let s = reduce_search(s, &SearchAction::Char('d'));
        let titles: Vec<_> = s.results().iter().map(|story| story.title.clone()).collect();
        assert_eq!(titles, vec!["Redux".to_string()]);
    }

    #[test]
    fn test_backspace_and_clear() {
        let s = reduce_search(state("Re"), &SearchAction::Backspace);
        assert_eq!(s.term, "R");
        let s = reduce_search(s, &SearchAction::Backspace);
        let s = reduce_search(s, &SearchAction::Backspace);
        assert_eq!(s.term, "");

        let s = reduce_search(state("React"), &SearchAction::Clear);
        assert!(s.term.is_empty());
        assert_eq!(s.results().len(), s.stories.len());
    }
}
