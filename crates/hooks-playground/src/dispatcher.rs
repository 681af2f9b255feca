//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Dispatched actions are queued on a channel and the store
//! processes them once the action currently in flight has been reduced.
//!
//! This enables patterns like:
//! - A raw key press is translated into `Action::Counter(CounterAction::Increment)`
//! - A search edit is followed by `Event::SearchTermChanged`, seen with the updated state

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
