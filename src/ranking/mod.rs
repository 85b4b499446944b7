//! Proximity ordering of mirror records.
//!
//! This module provides:
//! - Great-circle distance between two coordinate pairs (haversine)
//! - A stable, reproducible distance ordering over mirror records

use std::cmp::Ordering;

use crate::config::{DISTANCE_TOLERANCE_KM, EARTH_RADIUS_KM};
use crate::models::{Coordinates, MirrorRecord};

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula on a mean Earth radius of [`EARTH_RADIUS_KM`].
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Orders records by ascending distance to `reference`.
///
/// The ordering is fully deterministic:
/// - Distances within [`DISTANCE_TOLERANCE_KM`] of each other count as equal
///   and tie-break by hostname, lexicographically.
/// - Records without coordinates sort after all coordinate-bearing records,
///   keeping their input (catalog) order among themselves.
/// - With no reference coordinates, no distance is computed and the input
///   order is returned unchanged.
pub fn rank_by_distance(
    records: Vec<MirrorRecord>,
    reference: Option<Coordinates>,
) -> Vec<MirrorRecord> {
    let Some(origin) = reference else {
        return records;
    };

    let mut keyed: Vec<(Option<f64>, MirrorRecord)> = records
        .into_iter()
        .map(|record| {
            let distance = record.coordinates.map(|c| haversine_km(origin, c));
            (distance, record)
        })
        .collect();

    // Stable sort: records without a distance compare equal to each other,
    // which preserves catalog order in the tail.
    keyed.sort_by(|(da, ra), (db, rb)| match (da, db) {
        (Some(a), Some(b)) => {
            if (a - b).abs() <= DISTANCE_TOLERANCE_KM {
                ra.hostname.cmp(&rb.hostname)
            } else {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}
