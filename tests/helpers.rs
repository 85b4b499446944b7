// Shared test helpers for building mirror catalogs and locations.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use mirrorselect::{
    Coordinates, Location, MirrorAddresses, MirrorCatalog, MirrorRecord, MirrorStatus,
};

/// Builds a mirror record with an HTTPS address and optional coordinates.
#[allow(dead_code)] // Used by other test files
pub fn mirror(
    hostname: &str,
    country: &str,
    region: &str,
    coords: Option<(f64, f64)>,
) -> MirrorRecord {
    MirrorRecord {
        hostname: hostname.to_string(),
        addresses: MirrorAddresses {
            https: Some(format!("https://{hostname}/pub/")),
            http: None,
            rsync: None,
        },
        country: country.to_string(),
        region: region.to_string(),
        coordinates: coords.map(|(latitude, longitude)| Coordinates {
            latitude,
            longitude,
        }),
        status: MirrorStatus::Ok,
        update_frequency: Some("4h".to_string()),
        sponsor_name: None,
        sponsor_url: None,
        contact_email: None,
    }
}

/// Builds a catalog holding `records`, already refreshed.
#[allow(dead_code)] // Used by other test files
pub fn catalog_with(records: Vec<MirrorRecord>) -> Arc<MirrorCatalog> {
    let catalog = Arc::new(MirrorCatalog::new());
    catalog.refresh(records).expect("valid test batch");
    catalog
}

/// A resolved location in Cairo, Egypt.
#[allow(dead_code)] // Used by other test files
pub fn cairo() -> Location {
    Location {
        country: "EG".to_string(),
        region: "Africa".to_string(),
        coordinates: Some(Coordinates {
            latitude: 30.04,
            longitude: 31.24,
        }),
    }
}
