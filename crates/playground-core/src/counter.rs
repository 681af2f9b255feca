//! Counter reducer
//!
//! A pure function from `(CounterState, CounterAction)` to the next `CounterState`.
//! Three action shapes are supported:
//!
//! - Tagged transitions (`increment`, `decrement`), parsed from text. Unknown tags
//!   are kept as [`CounterAction::Unrecognized`] and leave the state untouched.
//! - [`CounterAction::Patch`]: a partial state merged shallowly over the current one.
//! - [`CounterAction::Compute`]: a function producing a patch from the state it is
//!   applied to, so successive dispatches always read the latest count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strum::EnumString;

/// Value shown next to the count. Set once, never touched by a transition.
pub const DEFAULT_NEW_COUNT: i64 = 500;

/// Counter state owned by a single store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
    #[serde(rename = "newCount", default = "default_new_count")]
    pub new_count: i64,
}

fn default_new_count() -> i64 {
    DEFAULT_NEW_COUNT
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            new_count: DEFAULT_NEW_COUNT,
        }
    }

    pub fn with_new_count(mut self, new_count: i64) -> Self {
        self.new_count = new_count;
        self
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Partial counter state. Only `Some` fields overwrite on merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(
        rename = "newCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub new_count: Option<i64>,
}

impl CounterPatch {
    /// Patch that only sets `count`
    pub fn count(count: i64) -> Self {
        Self {
            count: Some(count),
            new_count: None,
        }
    }

    /// Merge this patch over `state`, overwriting only the fields present here
    pub fn apply(&self, mut state: CounterState) -> CounterState {
        if let Some(count) = self.count {
            state.count = count;
        }
        if let Some(new_count) = self.new_count {
            state.new_count = new_count;
        }
        state
    }
}

/// Fixed transitions addressable by tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CounterTag {
    Increment,
    Decrement,
}

/// A patch computed from the state at the time it is applied
#[derive(Clone)]
pub struct ComputePatch(Arc<dyn Fn(&CounterState) -> CounterPatch + Send + Sync>);

impl ComputePatch {
    pub fn new(f: impl Fn(&CounterState) -> CounterPatch + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluate against the given state
    pub fn call(&self, state: &CounterState) -> CounterPatch {
        (self.0)(state)
    }
}

impl fmt::Debug for ComputePatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComputePatch(<fn>)")
    }
}

/// Requested counter transition
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "TaggedAction")]
pub enum CounterAction {
    Increment,
    Decrement,
    /// Tag that names no transition
    Unrecognized(String),
    Patch(CounterPatch),
    Compute(ComputePatch),
}

impl CounterAction {
    /// Build an action from its textual tag; unknown tags never fail
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse::<CounterTag>() {
            Ok(CounterTag::Increment) => CounterAction::Increment,
            Ok(CounterTag::Decrement) => CounterAction::Decrement,
            Err(_) => CounterAction::Unrecognized(tag.to_string()),
        }
    }

    /// Add `step` to whatever the count is when the action is applied
    pub fn step(step: i64) -> Self {
        CounterAction::Compute(ComputePatch::new(move |state| {
            CounterPatch::count(state.count.saturating_add(step))
        }))
    }
}

/// Wire shape `{ "type": "increment" }`
#[derive(Deserialize)]
struct TaggedAction {
    #[serde(rename = "type")]
    kind: String,
}

impl From<TaggedAction> for CounterAction {
    fn from(tagged: TaggedAction) -> Self {
        CounterAction::from_tag(&tagged.kind)
    }
}

/// Produce the next counter state. Total: every action yields a state.
pub fn reduce(state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            count: state.count.saturating_add(1),
            ..state
        },
        CounterAction::Decrement => CounterState {
            count: state.count.saturating_sub(1),
            ..state
        },
        CounterAction::Unrecognized(_) => state,
        CounterAction::Patch(patch) => patch.apply(state),
        CounterAction::Compute(compute) => compute.call(&state).apply(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_increment() {
        let next = reduce(CounterState::new(2), &CounterAction::Increment);
        assert_eq!(next.count, 3);
        assert_eq!(next.new_count, DEFAULT_NEW_COUNT);
    }

    #[test]
    fn test_decrement_preserves_new_count() {
        let next = reduce(CounterState::new(0), &CounterAction::Decrement);
        assert_eq!(
            next,
            CounterState {
                count: -1,
                new_count: 500
            }
        );
    }

    #[test]
    fn test_unrecognized_tag_is_noop() {
        let state = CounterState::new(7).with_new_count(1);
        let action = CounterAction::from_tag("reset");
        assert!(matches!(action, CounterAction::Unrecognized(ref t) if t == "reset"));

        let once = reduce(state, &action);
        assert_eq!(once, state);
        assert_eq!(reduce(once, &action), once);
    }

    #[test]
    fn test_from_tag() {
        assert!(matches!(
            CounterAction::from_tag("increment"),
            CounterAction::Increment
        ));
        assert!(matches!(
            CounterAction::from_tag("decrement"),
            CounterAction::Decrement
        ));
        // Tags are case-sensitive, like the string switch they come from
        assert!(matches!(
            CounterAction::from_tag("Increment"),
            CounterAction::Unrecognized(_)
        ));
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let state = CounterState::new(3).with_new_count(42);
        let next = reduce(state, &CounterAction::Patch(CounterPatch::count(10)));
        assert_eq!(next.count, 10);
        assert_eq!(next.new_count, 42);

        let empty = reduce(state, &CounterAction::Patch(CounterPatch::default()));
        assert_eq!(empty, state);
    }

    #[test]
    fn test_compute_matches_patch_of_result() {
        let state = CounterState::new(5);
        let f = |s: &CounterState| CounterPatch::count(s.count + 2);

        let computed = reduce(state, &CounterAction::Compute(ComputePatch::new(f)));
        let patched = reduce(state, &CounterAction::Patch(f(&state)));
        assert_eq!(computed, patched);
        assert_eq!(computed.count, 7);
    }

    #[test]
    fn test_step_reads_latest_state() {
        let step = CounterAction::step(2);
        let state = reduce(CounterState::new(0), &step);
        let state = reduce(state, &step);
        let state = reduce(state, &step);
        assert_eq!(state.count, 6);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let max = reduce(CounterState::new(i64::MAX), &CounterAction::Increment);
        assert_eq!(max.count, i64::MAX);
        let min = reduce(CounterState::new(i64::MIN), &CounterAction::Decrement);
        assert_eq!(min.count, i64::MIN);
    }

    #[test]
    fn test_deserialize_tagged_action() {
        let action: CounterAction = serde_json::from_str(r#"{"type":"increment"}"#).unwrap();
        assert!(matches!(action, CounterAction::Increment));

        let action: CounterAction = serde_json::from_str(r#"{"type":"explode"}"#).unwrap();
        assert!(matches!(action, CounterAction::Unrecognized(ref t) if t == "explode"));
    }

    #[test]
    fn test_state_json_shape() {
        let state: CounterState = serde_json::from_str(r#"{"count":2}"#).unwrap();
        assert_eq!(state, CounterState::new(2));

        let json = serde_json::to_string(&CounterState::new(0)).unwrap();
        assert_eq!(json, r#"{"count":0,"newCount":500}"#);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_state() -> impl Strategy<Value = CounterState> {
        (any::<i64>(), any::<i64>()).prop_map(|(count, new_count)| CounterState { count, new_count })
    }

    fn any_patch() -> impl Strategy<Value = CounterPatch> {
        (
            proptest::option::of(any::<i64>()),
            proptest::option::of(any::<i64>()),
        )
            .prop_map(|(count, new_count)| CounterPatch { count, new_count })
    }

    fn unknown_tag() -> impl Strategy<Value = String> {
        "[a-zA-Z_ -]{0,16}".prop_filter("known tag", |tag| {
            tag != "increment" && tag != "decrement"
        })
    }

    proptest! {
        #[test]
        fn prop_increment_adds_one(count in i64::MIN..i64::MAX, new_count in any::<i64>()) {
            let state = CounterState { count, new_count };
            let next = reduce(state, &CounterAction::Increment);
            prop_assert_eq!(next, CounterState { count: count + 1, new_count });
        }

        #[test]
        fn prop_decrement_subtracts_one(count in (i64::MIN + 1)..=i64::MAX, new_count in any::<i64>()) {
            let state = CounterState { count, new_count };
            let next = reduce(state, &CounterAction::Decrement);
            prop_assert_eq!(next, CounterState { count: count - 1, new_count });
        }

        #[test]
        fn prop_tagged_transitions_saturate(state in any_state()) {
            prop_assert_eq!(
                reduce(state, &CounterAction::Increment).count,
                state.count.saturating_add(1)
            );
            prop_assert_eq!(
                reduce(state, &CounterAction::Decrement).count,
                state.count.saturating_sub(1)
            );
        }

        #[test]
        fn prop_unknown_tag_is_identity(state in any_state(), tag in unknown_tag()) {
            let action = CounterAction::from_tag(&tag);
            prop_assert!(matches!(action, CounterAction::Unrecognized(_)));

            let once = reduce(state, &action);
            prop_assert_eq!(once, state);
            prop_assert_eq!(reduce(once, &action), once);
        }

        #[test]
        fn prop_patch_overwrites_present_fields(state in any_state(), patch in any_patch()) {
            let next = reduce(state, &CounterAction::Patch(patch));
            prop_assert_eq!(next.count, patch.count.unwrap_or(state.count));
            prop_assert_eq!(next.new_count, patch.new_count.unwrap_or(state.new_count));
        }

        #[test]
        fn prop_compute_equals_patch_of_result(
            state in any_state(),
            delta in any::<i64>(),
            touch_new_count in any::<bool>(),
        ) {
            let f = move |s: &CounterState| CounterPatch {
                count: Some(s.count.wrapping_add(delta)),
                new_count: touch_new_count.then(|| s.new_count.wrapping_sub(delta)),
            };

            let computed = reduce(state, &CounterAction::Compute(ComputePatch::new(f)));
            let patched = reduce(state, &CounterAction::Patch(f(&state)));
            prop_assert_eq!(computed, patched);
        }
    }
}
