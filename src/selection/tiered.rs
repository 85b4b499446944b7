//! Tiered partitioning, ranking, and merging of a catalog snapshot.

use crate::catalog::Snapshot;
use crate::config::MIRROR_LIST_CAP;
use crate::models::{Location, MirrorRecord, SelectedMirror, Tier};
use crate::ranking::rank_by_distance;

/// Produces the ranked mirror list for a resolved location.
///
/// The snapshot is partitioned into three disjoint tiers relative to the
/// location: same country, same region but different country, and the rest
/// of the world. Non-operational records are dropped once, before
/// partitioning, so tier capacities are computed only over eligible
/// mirrors. Each tier is ranked by distance and capped at
/// [`MIRROR_LIST_CAP`]; the tiers are then concatenated in
/// country/region/world order and the result truncated to the same cap.
///
/// A tier shortfall is never refilled from a later tier: if fewer than
/// [`MIRROR_LIST_CAP`] eligible mirrors exist in total, the result is
/// simply shorter.
///
/// This is a pure function over `(snapshot, location)`: identical inputs
/// always yield the identical ordered output.
pub fn select_tiered(snapshot: &Snapshot, location: &Location) -> Vec<SelectedMirror> {
    let mut country: Vec<MirrorRecord> = Vec::new();
    let mut region: Vec<MirrorRecord> = Vec::new();
    let mut world: Vec<MirrorRecord> = Vec::new();

    for record in snapshot.records() {
        if !record.is_operational() {
            continue;
        }
        if record.country == location.country {
            country.push(record.clone());
        } else if record.region == location.region {
            region.push(record.clone());
        } else {
            world.push(record.clone());
        }
    }

    let origin = location.coordinates;
    let mut merged = Vec::with_capacity(MIRROR_LIST_CAP);
    for (tier, bucket) in [
        (Tier::Country, country),
        (Tier::Region, region),
        (Tier::World, world),
    ] {
        let ranked = rank_by_distance(bucket, origin);
        merged.extend(
            ranked
                .into_iter()
                .take(MIRROR_LIST_CAP)
                .map(|record| SelectedMirror {
                    record,
                    tier: Some(tier),
                }),
        );
    }
    merged.truncate(MIRROR_LIST_CAP);
    merged
}
