//! Integration tests for Items domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure the
//! SeaORM queries and the migrated schema agree. They need a running
//! Docker daemon: `cargo test -p domain_items -- --ignored`.

use domain_items::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn create_input(title: String, price: f64, weight: f64) -> CreateItem {
    CreateItem {
        title,
        description: Some("Integration test item".to_string()),
        price,
        weight,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get_item");

    let input = create_input(builder.name("item", "main"), 10.0, 1.0);
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.title, input.title);
    assert_eq!(created.description, input.description);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "item should exist");

    assert_uuid_eq(retrieved.id, created.id, "retrieved item id");
    assert_eq!(retrieved, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_filters_match_exact_values() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("filters_exact");

    let lamp = builder.name("item", "lamp");
    repo.create(create_input(lamp.clone(), 25.5, 2.0)).await.unwrap();
    repo.create(create_input(builder.name("item", "desk"), 120.0, 2.0))
        .await
        .unwrap();

    let by_title = repo.list(ItemFilter::by_title(&lamp)).await.unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, lamp);

    let by_price = repo.list(ItemFilter::by_price(120.0)).await.unwrap();
    assert_eq!(by_price.len(), 1);

    let by_weight = repo.list(ItemFilter::by_weight(2.0)).await.unwrap();
    assert_eq!(by_weight.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_overwrites_row() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_item");

    let created = repo
        .create(create_input(builder.name("item", "before"), 10.0, 1.0))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateItem {
                title: builder.name("item", "after"),
                description: None,
                price: 11.0,
                weight: 1.5,
            },
        )
        .await
        .unwrap();

    assert_uuid_eq(updated.id, created.id, "id survives update");
    assert_eq!(updated.title, builder.name("item", "after"));
    assert_eq!(updated.description, None);

    let stored = assert_some(repo.get_by_id(created.id).await.unwrap(), "item");
    assert_eq!(stored, updated);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_and_delete_all() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_items");

    let first = repo
        .create(create_input(builder.name("item", "one"), 1.0, 1.0))
        .await
        .unwrap();
    repo.create(create_input(builder.name("item", "two"), 2.0, 1.0))
        .await
        .unwrap();

    assert!(repo.delete(first.id).await.unwrap());
    assert!(!repo.delete(first.id).await.unwrap());

    assert_eq!(repo.delete_all().await.unwrap(), 1);
    assert!(repo.list(ItemFilter::default()).await.unwrap().is_empty());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_maps_missing_rows() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(PgItemRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_missing");

    let missing = builder.uuid();
    assert!(matches!(
        service.get_item(missing).await,
        Err(ItemError::NotFound(_))
    ));
    assert!(matches!(
        service.get_items_by_weight(999.0).await,
        Err(ItemError::NoMatch { .. })
    ));
    assert!(matches!(
        service.delete_item(missing).await,
        Err(ItemError::NotFound(_))
    ));
}
