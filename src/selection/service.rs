//! Per-request selection orchestration.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::MirrorCatalog;
use crate::config::LOCATOR_TIMEOUT;
use crate::error_handling::LocatorError;
use crate::geo::GeoLocator;
use crate::models::{Location, SelectedMirror, Tier};
use crate::selection::select_tiered;

/// Orchestrates one selection request end to end: resolve the client
/// address, pick the tiered list, or fall back to the full catalog.
///
/// The service never fails a request. Locator errors and timeouts degrade
/// to the unresolved-location path, and an empty catalog yields an empty
/// list. It never mutates the catalog; each request works against the
/// snapshot reference it acquired at the start.
pub struct SelectionService<G> {
    catalog: Arc<MirrorCatalog>,
    locator: G,
    locator_timeout: Duration,
}

impl<G: GeoLocator> SelectionService<G> {
    /// Creates a service over `catalog` using `locator` for geolocation,
    /// with the default lookup deadline ([`LOCATOR_TIMEOUT`]).
    pub fn new(catalog: Arc<MirrorCatalog>, locator: G) -> Self {
        SelectionService {
            catalog,
            locator,
            locator_timeout: LOCATOR_TIMEOUT,
        }
    }

    /// Overrides the geolocation lookup deadline.
    pub fn with_locator_timeout(mut self, timeout: Duration) -> Self {
        self.locator_timeout = timeout;
        self
    }

    /// Selects mirrors for `addr`.
    ///
    /// With a resolved location this returns at most
    /// [`MIRROR_LIST_CAP`](crate::config::MIRROR_LIST_CAP) mirrors, tiered
    /// country/region/world and ranked by distance within each tier. With an
    /// unresolved location (or a degraded locator) it returns every
    /// operational mirror in catalog order, uncapped.
    pub async fn select(&self, addr: IpAddr) -> Vec<SelectedMirror> {
        let snapshot = self.catalog.snapshot();

        match self.resolve_with_deadline(addr).await {
            Some(location) => {
                let selected = select_tiered(&snapshot, &location);
                log::debug!(
                    "selected {} mirrors for {addr} ({}/{}/{} country/region/world)",
                    selected.len(),
                    tier_count(&selected, Tier::Country),
                    tier_count(&selected, Tier::Region),
                    tier_count(&selected, Tier::World),
                );
                selected
            }
            None => {
                let fallback: Vec<SelectedMirror> = snapshot
                    .records()
                    .iter()
                    .filter(|record| record.is_operational())
                    .cloned()
                    .map(|record| SelectedMirror { record, tier: None })
                    .collect();
                log::debug!(
                    "serving full mirror list ({} mirrors) for {addr}: location unresolved",
                    fallback.len()
                );
                fallback
            }
        }
    }

    /// Resolves `addr` under the configured deadline.
    ///
    /// Locator failures and timeouts are logged and mapped to `None`:
    /// proximity degradation, not request failure.
    async fn resolve_with_deadline(&self, addr: IpAddr) -> Option<Location> {
        match tokio::time::timeout(self.locator_timeout, self.locator.resolve(addr)).await {
            Ok(Ok(location)) => location,
            Ok(Err(err)) => {
                log::warn!("degrading {addr} to full mirror list: {err}");
                None
            }
            Err(_) => {
                let err = LocatorError::Timeout(self.locator_timeout);
                log::warn!("degrading {addr} to full mirror list: {err}");
                None
            }
        }
    }
}

fn tier_count(selected: &[SelectedMirror], tier: Tier) -> usize {
    selected.iter().filter(|s| s.tier == Some(tier)).count()
}
