//! Configuration module
//!
//! Handles record format and catalog loading preferences.

pub mod settings;

pub use settings::{ConfigError, RecordFormat, Settings};
