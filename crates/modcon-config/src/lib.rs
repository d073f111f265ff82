//! Configuration and file paths for modcon
//!
//! This crate provides:
//! - Application configuration loaded from `modcon.toml`
//! - Config/cache directory paths (XDG via `dirs`, with fallbacks)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
