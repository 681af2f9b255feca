use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod storage_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use storage_middleware::StorageMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
