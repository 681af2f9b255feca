//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C always quits. Esc goes to text input when the view accepts it,
//! otherwise it closes the top view.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive character keys and backspace as text.
//!
//! ## Layer 3: Keymap + Gating
//! Keys are looked up in the keymap; non-global commands only fire when the
//! active view translates them.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let Some(view) = state.active_view() else {
            return;
        };
        let capabilities = view.capabilities(state);

        // LAYER 1: priority keys

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            let action = capabilities
                .accepts_text_input()
                .then(|| view.translate_text_input(TextInputAction::Escape))
                .flatten()
                .unwrap_or(Action::Global(GlobalAction::Close));
            log::debug!("Layer 1: Esc - dispatching {:?}", action);
            dispatcher.dispatch(action);
            return;
        }

        // LAYER 2: capability-based routing

        if capabilities.accepts_text_input() {
            let input = match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(TextInputAction::ClearLine)
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(TextInputAction::Char(c))
                }
                KeyCode::Backspace => Some(TextInputAction::Backspace),
                _ => None,
            };

            if let Some(input) = input {
                if let Some(action) = view.translate_text_input(input) {
                    dispatcher.dispatch(action);
                }
                return;
            }
        }

        // LAYER 3: keymap + gating

        for command in state.keymap.match_key(&key) {
            if let Some(action) = views::command_action(command, view, state) {
                log::debug!("Layer 3: {:?} -> {:?}", command, action);
                dispatcher.dispatch(action);
                return;
            }
            log::debug!(
                "Layer 3: {:?} not available in {:?}",
                command,
                view.view_id()
            );
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false; // Raw keys never reach the reducer
        }
        true
    }
}
