//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{CounterView, View};
use playground_config::AppConfig;
use playground_core::{CounterState, Person, Story};

use super::{PeopleState, SearchState};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the active screen, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub counter: CounterState,
    pub search: SearchState,
    pub people: PeopleState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(
        app_config: AppConfig,
        search_term: impl Into<String>,
        stories: Vec<Story>,
        people: Vec<Person>,
    ) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(CounterView::new())],
            counter: CounterState::new(app_config.initial_count)
                .with_new_count(app_config.new_count),
            search: SearchState::new(search_term, stories),
            people: PeopleState::new(people),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }

    /// Get the screen at the bottom of the stack
    pub fn base_view(&self) -> Option<&dyn View> {
        self.view_stack.first().map(|view| view.as_ref())
    }

    /// State with default config and the bundled fixtures
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = AppConfig::default();
        let term = config.default_search_term.clone();
        Self::new(
            config,
            term,
            playground_core::load_stories().unwrap(),
            playground_core::load_people().unwrap(),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("counter", &self.counter)
            .field("search", &self.search.term)
            .field("people", &self.people.people.len())
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}
