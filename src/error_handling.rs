//! Error types for catalog refresh and geolocation lookup.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Errors raised while validating a catalog refresh batch.
///
/// A refresh is all-or-nothing: any invalid record rejects the whole batch
/// and leaves the previously published snapshot active.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record in the batch failed validation.
    #[error("invalid mirror record \"{hostname}\": {reason}")]
    InvalidRecord {
        /// Hostname of the offending record.
        hostname: String,
        /// What the record is missing or duplicating.
        reason: &'static str,
    },
}

/// Errors raised by a [`GeoLocator`](crate::geo::GeoLocator) implementation.
///
/// These never fail a selection request: the selection service logs them and
/// degrades to the unresolved-location fallback (the full mirror list).
#[derive(Error, Debug)]
pub enum LocatorError {
    /// The geolocation database could not be queried at all.
    #[error("geolocation database unavailable: {0}")]
    Unavailable(String),
    /// A lookup against the geolocation database failed.
    #[error("geolocation lookup failed: {0}")]
    Lookup(String),
    /// The lookup did not answer within the configured deadline.
    #[error("geolocation lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
