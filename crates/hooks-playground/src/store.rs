use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// The store is the single owner of `AppState`. Actions are applied one at a time;
/// anything middleware dispatches while an action is in flight is handled afterwards,
/// in the order it was dispatched.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action, then everything it caused to be dispatched
    pub fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            self.process(action);
            queue.extend(self.action_rx.try_iter());
        }
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CounterAction, Event, GlobalAction, SearchAction};
    use std::sync::{Arc, Mutex};

    /// Records every action it sees, optionally consuming counter actions
    struct Recorder {
        seen: Arc<Mutex<Vec<String>>>,
        consume_counter: bool,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, _d: &Dispatcher) -> bool {
            self.seen.lock().unwrap().push(format!("{:?}", action));
            !(self.consume_counter && matches!(action, Action::Counter(_)))
        }
    }

    /// Follows every search edit with a SearchTermChanged event
    struct FollowUp;

    impl Middleware for FollowUp {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Search(_)) {
                dispatcher.dispatch(Action::event(Event::SearchTermChanged));
            }
            true
        }
    }

    #[test]
    fn test_dispatch_reduces() {
        let mut store = Store::new(AppState::for_tests());
        store.dispatch(Action::Counter(CounterAction::Increment));
        store.dispatch(Action::Counter(CounterAction::Increment));
        assert_eq!(store.state().counter.count, 2);
    }

    #[test]
    fn test_consuming_middleware_skips_reducer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new(AppState::for_tests());
        store.add_middleware(Box::new(Recorder {
            seen: seen.clone(),
            consume_counter: true,
        }));

        store.dispatch(Action::Counter(CounterAction::Increment));
        assert_eq!(store.state().counter.count, 0);

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().running);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_followups_run_after_reduce() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::new(AppState::for_tests());
        store.add_middleware(Box::new(FollowUp));
        store.add_middleware(Box::new(Recorder {
            seen: seen.clone(),
            consume_counter: false,
        }));

        store.dispatch(Action::Search(SearchAction::Char('!')));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("Search("));
        assert_eq!(seen[1], "Event(SearchTermChanged)");
        assert_eq!(store.state().search.term, "React!");
    }
}
