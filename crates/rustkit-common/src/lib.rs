//! # RustKit Common
//!
//! Logging configuration shared by the RustKit layout crates.
//!
//! The layout and style crates only emit `tracing` events. Binaries and test
//! harnesses call [`init_logging`] or [`try_init_logging`] once to decide
//! where those events go.

use thiserror::Error;

pub mod logging;

pub use logging::{init_logging, try_init_logging, LogConfig, LogFormat};

/// Errors raised while installing the global subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The filter directive string could not be parsed.
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    /// A global subscriber was already installed (common in test binaries).
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
