use crate::actions::{Action, GlobalAction};
use crate::reducers::{counter_reducer, people_reducer, search_reducer};
use crate::state::AppState;
use crate::views::{self, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),
        Action::Counter(counter_action) => {
            state.counter = counter_reducer::reduce_counter(state.counter, counter_action);
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search(state.search, search_action);
        }
        Action::People(people_action) => {
            state.people = people_reducer::reduce_people(state.people, people_action);
        }
        // Events are for middleware
        Action::Event(_) => {}
    }

    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .active_view()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!("Popping view already on top: {:?}", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // Closing the last view quits the application
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::NextScreen | GlobalAction::PreviousScreen => {
            let current = state
                .base_view()
                .map(|view| view.view_id())
                .unwrap_or(ViewId::Counter);
            let target = if matches!(action, GlobalAction::NextScreen) {
                views::screen_after(current)
            } else {
                views::screen_before(current)
            };
            log::debug!("Switching screen {:?} -> {:?}", current, target);
            state.view_stack = vec![views::screen_view(target)];
        }
        GlobalAction::KeyPressed(_) => {
            // Translated by KeyboardMiddleware, never reduced
        }
    }

    state
}
