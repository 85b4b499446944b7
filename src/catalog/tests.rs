// Catalog module tests.

use crate::catalog::MirrorCatalog;
use crate::error_handling::CatalogError;
use crate::models::{MirrorAddresses, MirrorRecord, MirrorStatus};

fn record(hostname: &str, country: &str) -> MirrorRecord {
    MirrorRecord {
        hostname: hostname.to_string(),
        addresses: MirrorAddresses {
            https: Some(format!("https://{hostname}/pub/")),
            http: None,
            rsync: None,
        },
        country: country.to_string(),
        region: "Europe".to_string(),
        coordinates: None,
        status: MirrorStatus::Ok,
        update_frequency: None,
        sponsor_name: None,
        sponsor_url: None,
        contact_email: None,
    }
}

#[test]
fn new_catalog_is_empty() {
    let catalog = MirrorCatalog::new();
    assert!(catalog.snapshot().is_empty());
}

#[test]
fn refresh_publishes_records_in_order() {
    let catalog = MirrorCatalog::new();
    let count = catalog
        .refresh(vec![record("b.example.org", "DE"), record("a.example.org", "FR")])
        .expect("valid batch");
    assert_eq!(count, 2);

    let snapshot = catalog.snapshot();
    let hostnames: Vec<_> = snapshot
        .records()
        .iter()
        .map(|r| r.hostname.as_str())
        .collect();
    // Catalog order is the ingestion order, not sorted.
    assert_eq!(hostnames, vec!["b.example.org", "a.example.org"]);
}

#[test]
fn refresh_rejects_record_without_address() {
    let catalog = MirrorCatalog::new();
    catalog
        .refresh(vec![record("keep.example.org", "DE")])
        .expect("valid batch");

    let mut bad = record("bad.example.org", "FR");
    bad.addresses = MirrorAddresses::default();
    let err = catalog
        .refresh(vec![record("other.example.org", "FR"), bad])
        .expect_err("batch must be rejected");
    assert_eq!(
        err,
        CatalogError::InvalidRecord {
            hostname: "bad.example.org".to_string(),
            reason: "no https, http, or rsync address",
        }
    );

    // Previous snapshot still active, untouched by the failed refresh.
    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.records()[0].hostname, "keep.example.org");
}

#[test]
fn refresh_rejects_record_without_country() {
    let catalog = MirrorCatalog::new();
    let mut bad = record("bad.example.org", "");
    bad.country = "  ".to_string();
    let err = catalog.refresh(vec![bad]).expect_err("batch must be rejected");
    assert!(matches!(
        err,
        CatalogError::InvalidRecord {
            reason: "missing country code",
            ..
        }
    ));
}

#[test]
fn refresh_rejects_duplicate_hostnames() {
    let catalog = MirrorCatalog::new();
    let err = catalog
        .refresh(vec![
            record("dup.example.org", "DE"),
            record("dup.example.org", "FR"),
        ])
        .expect_err("batch must be rejected");
    assert!(matches!(
        err,
        CatalogError::InvalidRecord {
            reason: "duplicate hostname in batch",
            ..
        }
    ));
    assert!(catalog.snapshot().is_empty());
}

#[test]
fn held_snapshot_survives_refresh() {
    let catalog = MirrorCatalog::new();
    catalog
        .refresh(vec![record("old.example.org", "DE")])
        .expect("valid batch");

    let held = catalog.snapshot();
    catalog
        .refresh(vec![record("new.example.org", "FR"), record("newer.example.org", "FR")])
        .expect("valid batch");

    // The reader keeps the view it acquired; new readers see the new one.
    assert_eq!(held.len(), 1);
    assert_eq!(held.records()[0].hostname, "old.example.org");
    assert_eq!(catalog.snapshot().len(), 2);
}

#[test]
fn refresh_to_empty_catalog_is_valid() {
    let catalog = MirrorCatalog::new();
    catalog
        .refresh(vec![record("only.example.org", "DE")])
        .expect("valid batch");
    let count = catalog.refresh(Vec::new()).expect("empty batch is valid");
    assert_eq!(count, 0);
    assert!(catalog.snapshot().is_empty());
}
