//! Events - facts that happened, dispatched after the reducer ran

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search term in state has changed
    SearchTermChanged,
}
