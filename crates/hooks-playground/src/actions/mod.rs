//! Actions module
//!
//! Actions are tagged by domain:
//! - Global actions that affect the whole application (quit, view stack, raw keys)
//! - Screen-specific actions already targeted at one reducer
//! - Events: facts observed after a reducer ran, re-entering the middleware chain
//!
//! Navigation and text input are generic intents that the active view translates
//! into one of the screen-specific actions before they are dispatched.

pub mod event;
pub mod global;
pub mod navigation;
pub mod people;
pub mod search;
pub mod text_input;

pub use event::Event;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use people::PeopleAction;
pub use playground_core::CounterAction;
pub use search::SearchAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),
    /// Global application actions
    Global(GlobalAction),
    /// Counter screen actions
    Counter(CounterAction),
    /// Search screen actions
    Search(SearchAction),
    /// People screen actions
    People(PeopleAction),
}

impl Action {
    /// Factory method for creating events.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
