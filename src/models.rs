//! Core data model: mirror records, client locations, and selection output.
//!
//! The serde shape of [`MirrorRecord`] matches the ingestion format used by
//! the catalog loader (one JSON definition per mirror), so records can be
//! deserialized straight from mirror definition files.

use serde::{Deserialize, Serialize};
use strum_macros::{Display as DisplayMacro, EnumString};

/// Operational status of a mirror, as reported by the catalog source.
///
/// Only [`MirrorStatus::Ok`] mirrors are eligible for selection. Statuses the
/// service does not know about are preserved verbatim in
/// [`MirrorStatus::Other`] and treated as non-operational.
#[derive(Debug, Clone, PartialEq, Eq, DisplayMacro, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum MirrorStatus {
    /// Mirror is in sync and serving.
    Ok,
    /// Mirror has fallen behind the allowed outdate window.
    Expired,
    /// Any other operational state (e.g. maintenance flags).
    #[strum(default)]
    Other(String),
}

impl From<String> for MirrorStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| MirrorStatus::Other(value))
    }
}

impl From<MirrorStatus> for String {
    fn from(status: MirrorStatus) -> Self {
        status.to_string()
    }
}

/// Download endpoints of a mirror. At least one must be present for the
/// record to pass catalog validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorAddresses {
    /// HTTPS base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
    /// HTTP base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    /// RSYNC URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsync: Option<String>,
}

impl MirrorAddresses {
    /// Returns `true` if the mirror carries no address at all.
    pub fn is_empty(&self) -> bool {
        self.https.is_none() && self.http.is_none() && self.rsync.is_none()
    }

    /// Best download URL for client-facing output: HTTPS over HTTP over RSYNC.
    pub fn preferred(&self) -> Option<&str> {
        self.https
            .as_deref()
            .or(self.http.as_deref())
            .or(self.rsync.as_deref())
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
}

/// One mirror as known to the catalog.
///
/// `hostname` uniquely identifies the record within a catalog snapshot.
/// Sponsor, contact, and update-frequency fields are informational and never
/// influence ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorRecord {
    /// Unique mirror hostname (the `name` field of a mirror definition).
    #[serde(rename = "name")]
    pub hostname: String,
    /// Download endpoints.
    #[serde(rename = "address")]
    pub addresses: MirrorAddresses,
    /// ISO country code, e.g. `"DE"`.
    pub country: String,
    /// Continent-level region name, e.g. `"Europe"`.
    #[serde(default)]
    pub region: String,
    /// Mirror coordinates, when the sponsor published them.
    #[serde(default, rename = "location", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Operational status from the last catalog update.
    #[serde(default = "MirrorRecord::default_status")]
    pub status: MirrorStatus,
    /// How often the mirror syncs, e.g. `"4h"`. Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_frequency: Option<String>,
    /// Sponsoring organization.
    #[serde(default, rename = "sponsor", skip_serializing_if = "Option::is_none")]
    pub sponsor_name: Option<String>,
    /// Sponsor homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_url: Option<String>,
    /// Contact address of the mirror operator.
    #[serde(default, rename = "email", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl MirrorRecord {
    fn default_status() -> MirrorStatus {
        MirrorStatus::Ok
    }

    /// Whether the mirror may appear in selection results.
    pub fn is_operational(&self) -> bool {
        self.status == MirrorStatus::Ok
    }
}

/// A client location resolved from a network address.
///
/// A location without coordinates still participates in country/region
/// tiering; within a tier, ranking then falls back to catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// ISO country code.
    pub country: String,
    /// Continent-level region name.
    pub region: String,
    /// Resolved coordinates, when the geolocation source has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// The tier a selected mirror was drawn from, relative to the query location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Same country as the client.
    Country,
    /// Same region, different country.
    Region,
    /// Everything else.
    World,
}

/// One entry of a selection result.
///
/// `tier` is `None` when the entry comes from the full-catalog fallback for
/// an unresolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedMirror {
    /// The selected mirror record.
    #[serde(flatten)]
    pub record: MirrorRecord,
    /// Which tier the record was drawn from, if the location was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
}
