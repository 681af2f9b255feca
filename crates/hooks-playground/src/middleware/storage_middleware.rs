//! StorageMiddleware - mirrors the search term into local storage
//!
//! Search edits are followed by `Event::SearchTermChanged`. By the time that event
//! flows through the chain the search reducer has already run, so the term read
//! from state is the new one.

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use playground_config::LocalStorage;

pub struct StorageMiddleware {
    /// None when the storage file could not be opened; writes are skipped
    storage: Option<LocalStorage>,
    key: String,
}

impl StorageMiddleware {
    pub fn new(storage: Option<LocalStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl Middleware for StorageMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(_) => {
                dispatcher.dispatch(Action::event(Event::SearchTermChanged));
            }
            Action::Event(Event::SearchTermChanged) => {
                if let Some(storage) = self.storage.as_mut() {
                    match storage.set_item(&self.key, &state.search.term) {
                        Ok(()) => log::debug!(
                            "Stored {}={:?} in {}",
                            self.key,
                            state.search.term,
                            storage.path().display()
                        ),
                        Err(e) => log::error!("Failed to store search term: {:#}", e),
                    }
                }
            }
            _ => {}
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SearchAction;
    use crate::store::Store;
    use tempfile::TempDir;

    #[test]
    fn test_search_edits_are_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("local-storage.json");

        let storage = LocalStorage::open(&path).unwrap();
        let mut store = Store::new(AppState::for_tests());
        store.add_middleware(Box::new(StorageMiddleware::new(Some(storage), "search")));

        store.dispatch(Action::Search(SearchAction::Clear));
        store.dispatch(Action::Search(SearchAction::Char('v')));
        store.dispatch(Action::Search(SearchAction::Char('u')));

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("search"), Some("vu"));
    }

    #[test]
    fn test_without_storage_passes_through() {
        let mut store = Store::new(AppState::for_tests());
        store.add_middleware(Box::new(StorageMiddleware::new(None, "search")));

        store.dispatch(Action::Search(SearchAction::Backspace));
        assert_eq!(store.state().search.term, "Reac");
    }
}
