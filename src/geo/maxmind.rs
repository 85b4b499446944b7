//! GeoLocator backed by a MaxMind GeoLite2-City database.

use std::net::IpAddr;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use maxminddb::Reader;

use crate::error_handling::LocatorError;
use crate::geo::GeoLocator;
use crate::models::{Coordinates, Location};

/// Resolves addresses against a local GeoLite2-City `.mmdb` file.
///
/// The whole database is held in memory; lookups are cheap and purely local.
/// The region of a resolved location is the continent name, matching the
/// continent-level region tags carried by mirror records.
pub struct MaxMindLocator {
    reader: Reader<Vec<u8>>,
}

impl MaxMindLocator {
    /// Opens a GeoLite2-City database from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid MaxMind
    /// database. A missing or corrupt database is a startup failure, unlike
    /// per-lookup misses which resolve to `Ok(None)`.
    pub async fn open(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read GeoIP database from {}", path.display()))?;
        let reader = Reader::from_source(bytes)
            .with_context(|| format!("failed to parse GeoIP database from {}", path.display()))?;
        log::info!("loaded GeoIP database from {}", path.display());
        Ok(MaxMindLocator { reader })
    }
}

#[async_trait]
impl GeoLocator for MaxMindLocator {
    async fn resolve(&self, addr: IpAddr) -> Result<Option<Location>, LocatorError> {
        let lookup = self
            .reader
            .lookup(addr)
            .map_err(|e| LocatorError::Lookup(e.to_string()))?;
        if !lookup.has_data() {
            return Ok(None);
        }
        let city: maxminddb::geoip2::City = match lookup.decode() {
            Ok(Some(city)) => city,
            // A record that exists but carries no usable city data is an
            // unresolved location, not a lookup failure.
            Ok(None) | Err(_) => return Ok(None),
        };
        Ok(location_from_city(&city))
    }
}

/// Builds a [`Location`] from a decoded City record.
///
/// The country ISO code is mandatory: without it the address cannot be
/// tiered and the location counts as unresolved. Coordinates are optional;
/// the continent name stands in for the region and defaults to empty when
/// the database omits it.
fn location_from_city(city: &maxminddb::geoip2::City) -> Option<Location> {
    let country = city.country.iso_code?.to_string();
    let region = city
        .continent
        .names
        .english
        .unwrap_or_default()
        .to_string();
    let coordinates = match (city.location.latitude, city.location.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };
    Some(Location {
        country,
        region,
        coordinates,
    })
}
