pub mod app_reducer;
pub mod counter_reducer;
pub mod people_reducer;
pub mod search_reducer;
