//! Counter Reducer

use crate::actions::CounterAction;
use playground_core::{counter, CounterState};

/// Reducer for counter state.
///
/// Delegates to the pure counter transition; the log lines are diagnostics only.
pub fn reduce_counter(state: CounterState, action: &CounterAction) -> CounterState {
    let next = counter::reduce(state, action);

    if let CounterAction::Unrecognized(tag) = action {
        log::debug!("Counter: ignoring unrecognized action {:?}", tag);
    } else {
        log::debug!("Counter: {:?} -> {:?}", state, next);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::CounterPatch;

    #[test]
    fn test_increment_then_decrement() {
        let state = CounterState::new(2);
        let state = reduce_counter(state, &CounterAction::Increment);
        assert_eq!(state.count, 3);
        let state = reduce_counter(state, &CounterAction::Decrement);
        assert_eq!(state, CounterState::new(2));
    }

    #[test]
    fn test_patch_keeps_new_count() {
        let state = CounterState::new(9).with_new_count(500);
        let state = reduce_counter(state, &CounterAction::Patch(CounterPatch::count(0)));
        assert_eq!(state.count, 0);
        assert_eq!(state.new_count, 500);
    }
}
