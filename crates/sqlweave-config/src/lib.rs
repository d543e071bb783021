pub mod config;
pub mod error;

pub use config::{RenderConfig, CONFIG_ENV, DEFAULT_MAX_ARGUMENTS};
pub use error::{ConfigError, Result};

#[cfg(test)]
pub mod test_utils;
