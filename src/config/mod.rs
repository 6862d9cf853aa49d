//! Configuration module for budget-alerts
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
