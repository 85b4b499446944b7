// Catalog refresh semantics as seen through the selection service.

mod helpers;

use std::net::IpAddr;
use std::sync::Arc;

use helpers::{cairo, catalog_with, mirror};
use mirrorselect::{MirrorAddresses, SelectionService, StaticLocator};

#[tokio::test]
async fn refresh_is_visible_to_subsequent_selections() {
    let addr: IpAddr = "198.51.100.7".parse().unwrap();
    let locator = StaticLocator::new().with_entry(addr, cairo());
    let catalog = catalog_with(vec![mirror(
        "old.example.org",
        "EG",
        "Africa",
        Some((30.0, 31.2)),
    )]);
    let service = SelectionService::new(Arc::clone(&catalog), locator);

    let before = service.select(addr).await;
    assert_eq!(before[0].record.hostname, "old.example.org");

    catalog
        .refresh(vec![mirror(
            "new.example.org",
            "EG",
            "Africa",
            Some((30.0, 31.2)),
        )])
        .expect("valid batch");

    let after = service.select(addr).await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].record.hostname, "new.example.org");
}

#[tokio::test]
async fn failed_refresh_keeps_serving_the_previous_snapshot() {
    let addr: IpAddr = "198.51.100.7".parse().unwrap();
    let locator = StaticLocator::new().with_entry(addr, cairo());
    let catalog = catalog_with(vec![mirror(
        "stable.example.org",
        "EG",
        "Africa",
        Some((30.0, 31.2)),
    )]);
    let service = SelectionService::new(Arc::clone(&catalog), locator);

    // A batch with an addressless record is rejected wholesale.
    let mut bad = mirror("bad.example.org", "EG", "Africa", None);
    bad.addresses = MirrorAddresses::default();
    let good = mirror("good.example.org", "EG", "Africa", None);
    assert!(catalog.refresh(vec![good, bad]).is_err());

    let selected = service.select(addr).await;
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.hostname, "stable.example.org");
}

#[tokio::test]
async fn concurrent_selections_and_refreshes_stay_consistent() {
    let addr: IpAddr = "198.51.100.7".parse().unwrap();
    let locator = StaticLocator::new().with_entry(addr, cairo());
    let catalog = catalog_with(vec![mirror(
        "seed.example.org",
        "EG",
        "Africa",
        Some((30.0, 31.2)),
    )]);
    let service = Arc::new(SelectionService::new(Arc::clone(&catalog), locator));

    let mut tasks = Vec::new();
    for round in 0..20u32 {
        let catalog = Arc::clone(&catalog);
        tasks.push(tokio::spawn(async move {
            let records = (0..3)
                .map(|i| {
                    mirror(
                        &format!("r{round:02}-{i}.example.org"),
                        "EG",
                        "Africa",
                        Some((30.0, 31.0 + i as f64 * 0.1)),
                    )
                })
                .collect();
            catalog.refresh(records).expect("valid batch");
        }));
        let service = Arc::clone(&service);
        tasks.push(tokio::spawn(async move {
            let selected = service.select(addr).await;
            // Every observed snapshot is internally consistent: all
            // records come from a single refresh round.
            let rounds: std::collections::HashSet<_> = selected
                .iter()
                .map(|s| s.record.hostname.split('-').next().unwrap().to_string())
                .collect();
            assert_eq!(rounds.len(), 1, "mixed snapshot observed");
        }));
    }
    for task in tasks {
        task.await.expect("task panicked");
    }
}
