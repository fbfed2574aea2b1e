//! Integration tests for the localized overlay.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{card, catalog_with, list_of, upstream_error, FakeCatalog};
use cubekit_catalog::{CatalogError, SearchMode};
use cubekit_core::card::Card;
use tokio::sync::Barrier;

fn japanese_printing(name: &str, printed_name: &str) -> Card {
    Card {
        id: format!("{name}-ja"),
        name: name.to_string(),
        lang: Some("ja".to_string()),
        printed_name: Some(printed_name.to_string()),
        printed_type_line: Some("インスタント".to_string()),
        printed_text: Some("訳文".to_string()),
        ..Card::default()
    }
}

// ---------------------------------------------------------------------------
// Single card
// ---------------------------------------------------------------------------

#[tokio::test]
async fn merge_copies_printed_fields_only() {
    let (catalog, fake) = catalog_with(
        FakeCatalog::new().on_search(|_| Ok(list_of(vec![japanese_printing("Lightning Bolt", "稲妻")]))),
    );
    let original = Card {
        oracle_text: Some("Lightning Bolt deals 3 damage to any target.".to_string()),
        ..card("Lightning Bolt")
    };

    let merged = catalog.merge_localized(original.clone()).await;

    assert_eq!(merged.printed_name.as_deref(), Some("稲妻"));
    assert_eq!(merged.printed_type_line.as_deref(), Some("インスタント"));
    assert_eq!(merged.id, original.id);
    assert_eq!(merged.oracle_text, original.oracle_text);
    assert_eq!(merged.lang, None);

    let request = &fake.search_log()[0];
    assert_eq!(request.query, "!\"Lightning Bolt\" lang:ja");
    assert_eq!(request.mode, SearchMode::Basic);
}

#[tokio::test]
async fn merge_without_printing_returns_input() {
    let (catalog, _fake) = catalog_with(FakeCatalog::new());
    let original = card("Obscure Card");

    assert_eq!(catalog.merge_localized(original.clone()).await, original);
}

#[tokio::test]
async fn merge_failure_returns_input() {
    let (catalog, _fake) = catalog_with(FakeCatalog::new().on_search(|_| Err(upstream_error(500))));
    let original = card("Sol Ring");

    assert_eq!(catalog.merge_localized(original.clone()).await, original);
}

#[tokio::test]
async fn configured_locale_is_used() {
    let (catalog, fake) = catalog_with(FakeCatalog::new());
    let catalog = catalog.with_locale("de");

    catalog.merge_localized(card("Sol Ring")).await;

    assert_eq!(fake.search_log()[0].query, "!\"Sol Ring\" lang:de");
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_isolates_failures_and_keeps_order() {
    let (catalog, _fake) = catalog_with(FakeCatalog::new().on_search(|request| {
        if request.query.contains("Broken") {
            Err(CatalogError::Decode("garbled".to_string()))
        } else if request.query.contains("Sol Ring") {
            Ok(list_of(vec![japanese_printing("Sol Ring", "ソル・リング")]))
        } else {
            Ok(list_of(vec![japanese_printing("Lightning Bolt", "稲妻")]))
        }
    }));

    let merged = catalog
        .merge_localized_batch(vec![card("Lightning Bolt"), card("Broken Card"), card("Sol Ring")])
        .await;

    let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Lightning Bolt", "Broken Card", "Sol Ring"]);
    assert_eq!(merged[0].printed_name.as_deref(), Some("稲妻"));
    assert_eq!(merged[1], card("Broken Card"));
    assert_eq!(merged[2].printed_name.as_deref(), Some("ソル・リング"));
}

#[tokio::test]
async fn batch_lookups_run_concurrently() {
    let gate = Arc::new(Barrier::new(3));
    let (catalog, fake) = catalog_with(
        FakeCatalog::new()
            .with_gate(gate)
            .on_search(|_| Ok(list_of(vec![japanese_printing("Lightning Bolt", "稲妻")]))),
    );

    let batch = vec![card("Lightning Bolt"), card("Sol Ring"), card("Counterspell")];
    let merged = tokio::time::timeout(Duration::from_secs(5), catalog.merge_localized_batch(batch))
        .await
        .expect("all three lookups must be in flight at once");

    assert_eq!(merged.len(), 3);
    assert!(merged.iter().all(|c| c.printed_name.as_deref() == Some("稲妻")));
    assert_eq!(fake.search_log().len(), 3);
}

#[tokio::test]
async fn batch_panicking_lookup_keeps_original_card() {
    let (catalog, _fake) = catalog_with(FakeCatalog::new().on_search(|request| {
        if request.query.contains("Cursed") {
            panic!("lookup blew up");
        }
        Ok(list_of(vec![japanese_printing("Sol Ring", "ソル・リング")]))
    }));

    let merged = catalog
        .merge_localized_batch(vec![card("Sol Ring"), card("Cursed Card"), card("Sol Ring")])
        .await;

    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].printed_name.as_deref(), Some("ソル・リング"));
    assert_eq!(merged[1], card("Cursed Card"));
    assert_eq!(merged[2].printed_name.as_deref(), Some("ソル・リング"));
}

#[tokio::test]
async fn empty_batch_makes_no_calls() {
    let (catalog, fake) = catalog_with(FakeCatalog::new());

    assert!(catalog.merge_localized_batch(Vec::new()).await.is_empty());
    assert!(fake.search_log().is_empty());
}

// ---------------------------------------------------------------------------
// search_localized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_localized_merges_each_hit() {
    let (catalog, fake) = catalog_with(FakeCatalog::new().on_search(|request| {
        if request.query.contains("lang:ja") {
            Ok(list_of(vec![japanese_printing("Lightning Bolt", "稲妻")]))
        } else {
            Ok(list_of(vec![card("Lightning Bolt")]))
        }
    }));

    let result = catalog.search_localized("Lightning Bolt", 1).await.unwrap();

    assert_eq!(result.total_cards, 1);
    assert_eq!(result.data[0].printed_name.as_deref(), Some("稲妻"));
    assert_eq!(fake.search_log().len(), 2);
}

#[tokio::test]
async fn search_localized_skips_merge_for_empty_results() {
    let (catalog, fake) = catalog_with(FakeCatalog::new());

    let result = catalog.search_localized("Nothing", 1).await.unwrap();

    assert!(result.data.is_empty());
    assert_eq!(fake.search_log().len(), 1);
}
