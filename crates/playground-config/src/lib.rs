//! Configuration and file management for hooks-playground
//!
//! This crate provides:
//! - Directory utilities for config, cache and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - A small key/value store persisted as JSON (LocalStorage)

pub mod app_config;
pub mod config_file;
pub mod local_storage;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use local_storage::LocalStorage;
pub use paths::{cache_dir, config_dir, data_dir, local_storage_path};
