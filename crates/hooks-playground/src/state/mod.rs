//! Application State Module
//!
//! Contains all state types used by the application, organized by screen.

mod app;
mod people;
mod search;

pub use app::AppState;
pub use people::PeopleState;
pub use search::SearchState;
