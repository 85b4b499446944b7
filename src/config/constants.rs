//! Configuration constants.
//!
//! This module defines the operational parameters of the selection core:
//! list caps, distance geometry, and lookup deadlines.

use std::time::Duration;

/// Maximum number of mirrors contributed by a single tier, and the maximum
/// size of the final merged selection list.
pub const MIRROR_LIST_CAP: usize = 10;

/// Mean Earth radius in kilometers, used by the great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances within this many kilometers of each other count as equal and
/// fall back to the hostname tie-break, so orderings are reproducible.
pub const DISTANCE_TOLERANCE_KM: f64 = 1e-6;

/// Deadline for a single geolocation lookup.
/// A lookup that misses the deadline is treated as an unresolved location,
/// never as a failed request.
pub const LOCATOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable naming the GeoLite2-City database path.
/// Used by the CLI when `--geoip` is not given; `.env` files are honored.
pub const GEOIP_DB_ENV: &str = "GEOIP_DB";
