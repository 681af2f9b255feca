//! Pure state transitions and bundled data for hooks-playground
//!
//! This crate provides:
//! - The counter reducer and its action type (tagged, patch and computed actions)
//! - The people list used by the prop drilling screen
//! - The stories list and its title search
//!
//! Nothing in here performs I/O beyond parsing the fixtures compiled into the binary.

pub mod counter;
pub mod error;
pub mod people;
pub mod stories;

pub use counter::{reduce, ComputePatch, CounterAction, CounterPatch, CounterState, CounterTag};
pub use error::DataError;
pub use people::{load_people, remove_person, Person};
pub use stories::{load_stories, search_stories, Story};
