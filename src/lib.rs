//! mirrorselect library: geo-aware mirror selection core
//!
//! Given a client's network address and a catalog of content mirrors, this
//! library produces an ordered mirror list ranked by geographic proximity:
//! mirrors in the client's country first, then its region, then the rest of
//! the world, each tier nearest-first and the whole list capped at ten
//! entries. Clients whose location cannot be resolved get the full mirror
//! list instead, so a missing geolocation never breaks a download.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mirrorselect::{load_mirrors, MaxMindLocator, MirrorCatalog, SelectionService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(MirrorCatalog::new());
//! catalog.refresh(load_mirrors("mirrors/".as_ref()).await?)?;
//!
//! let locator = MaxMindLocator::open("GeoLite2-City.mmdb".as_ref()).await?;
//! let service = SelectionService::new(Arc::clone(&catalog), locator);
//!
//! for mirror in service.select("198.51.100.7".parse()?).await {
//!     println!("{}", mirror.record.hostname);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The selection service and the loaders are async and require a Tokio
//! runtime. Use `#[tokio::main]` in your application or call them from an
//! existing async context.

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
mod error_handling;
pub mod geo;
pub mod initialization;
mod models;
pub mod ranking;
pub mod selection;

// Re-export public API
pub use catalog::{load_mirrors, MirrorCatalog, Snapshot};
pub use error_handling::{CatalogError, LocatorError};
pub use geo::{GeoLocator, MaxMindLocator, StaticLocator};
pub use models::{
    Coordinates, Location, MirrorAddresses, MirrorRecord, MirrorStatus, SelectedMirror, Tier,
};
pub use selection::{select_tiered, SelectionService};
