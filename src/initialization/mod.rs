//! Application initialization.
//!
//! This module provides logger setup for the CLI binary and embedders.
//! The catalog and locator carry their own constructors; nothing else in
//! the selection core needs process-wide setup.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
