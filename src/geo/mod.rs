//! Geolocation of client addresses.
//!
//! The selection service talks to geolocation through the [`GeoLocator`]
//! capability trait, so the MaxMind-backed implementation can be swapped for
//! a test double or another lookup source. An unresolvable address is a
//! normal outcome (`Ok(None)`), not an error.

mod maxmind;

pub use maxmind::MaxMindLocator;

use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;

use crate::error_handling::LocatorError;
use crate::models::Location;

/// Resolves a network address to a geographic location.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Resolves `addr` to a location.
    ///
    /// Returns `Ok(None)` when the address cannot be classified at all; the
    /// caller then falls back to serving the full mirror list.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError`] when the lookup infrastructure itself fails.
    /// Callers are expected to degrade to the unresolved path rather than
    /// propagate this as a request failure.
    async fn resolve(&self, addr: IpAddr) -> Result<Option<Location>, LocatorError>;
}

/// A fixed address-to-location table.
///
/// Useful as a test double and for embedders with a known client population
/// (e.g. lab networks) where a GeoIP database would be overkill.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    entries: HashMap<IpAddr, Location>,
}

impl StaticLocator {
    /// Creates an empty locator that resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping from `addr` to `location`.
    pub fn with_entry(mut self, addr: IpAddr, location: Location) -> Self {
        self.entries.insert(addr, location);
        self
    }
}

#[async_trait]
impl GeoLocator for StaticLocator {
    async fn resolve(&self, addr: IpAddr) -> Result<Option<Location>, LocatorError> {
        Ok(self.entries.get(&addr).cloned())
    }
}
