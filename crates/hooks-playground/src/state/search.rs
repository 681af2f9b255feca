use playground_core::{search_stories, Story};

/// Search screen state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub term: String,
    pub stories: Vec<Story>,
}

impl SearchState {
    pub fn new(term: impl Into<String>, stories: Vec<Story>) -> Self {
        Self {
            term: term.into(),
            stories,
        }
    }

    /// Stories matching the current term
    pub fn results(&self) -> Vec<&Story> {
        search_stories(&self.stories, &self.term)
    }
}
