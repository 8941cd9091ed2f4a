//! spendly-config
//!
//! Persistent user preferences: preferred currency, budget policy and
//! storage locations, plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{default_base_dir, ConfigManager, HOME_ENV};
pub use model::Config;
