mod common;

use civic_directory::domain::entities::NewResource;
use civic_directory::domain::repositories::{ResourceQuery, ResourceRepository};
use civic_directory::error::AppError;
use civic_directory::infrastructure::persistence::PgResourceRepository;
use common::fixture_seed;
use sqlx::PgPool;
use std::sync::Arc;

async fn seeded(pool: PgPool) -> PgResourceRepository {
    let repo = PgResourceRepository::new(Arc::new(pool));
    repo.import_seed(fixture_seed()).await.unwrap();
    repo
}

fn submission(slug: &str) -> NewResource {
    NewResource {
        id: format!("resource-{slug}"),
        title: "Navrangpura Reading Room".to_string(),
        slug: slug.to_string(),
        category_id: "category-library".to_string(),
        region_id: "region-ellisbridge".to_string(),
        address: "Near Navrangpura bus stop".to_string(),
        description: "Free reading room".to_string(),
        phone: None,
        email: Some("room@example.org".to_string()),
    }
}

#[sqlx::test]
async fn test_import_and_stats(pool: PgPool) {
    let repo = seeded(pool).await;

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.categories, 5);
    assert_eq!(stats.regions, 4);
    assert_eq!(stats.approved_resources, 6);
    assert_eq!(stats.pending_resources, 1);
}

#[sqlx::test]
async fn test_import_is_idempotent(pool: PgPool) {
    let repo = seeded(pool).await;
    repo.import_seed(fixture_seed()).await.unwrap();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.approved_resources, 6);
}

#[sqlx::test]
async fn test_list_resources_hides_pending(pool: PgPool) {
    let repo = seeded(pool).await;

    let resources = repo.list_resources(ResourceQuery::default()).await.unwrap();

    assert_eq!(resources.len(), 6);
    assert_eq!(resources[0].title, "Akshaya Patra Kitchen");
    assert!(resources.iter().all(|r| r.approved));
    assert!(resources.iter().all(|r| r.created_at.is_some()));
}

#[sqlx::test]
async fn test_list_resources_by_category_and_region(pool: PgPool) {
    let repo = seeded(pool).await;

    let clinics = repo
        .list_resources(ResourceQuery::from_fields("clinic", ""))
        .await
        .unwrap();
    assert_eq!(clinics.len(), 2);
    assert!(clinics.iter().all(|r| r.category_slug() == Some("clinic")));

    let ellisbridge = repo
        .list_resources(ResourceQuery::from_fields("", "region-ellisbridge"))
        .await
        .unwrap();
    assert_eq!(ellisbridge.len(), 2);
}

#[sqlx::test]
async fn test_find_by_slug_resolves_references(pool: PgPool) {
    let repo = seeded(pool).await;

    let library = repo.find_by_slug("m-j-library").await.unwrap().unwrap();

    assert_eq!(library.category_title(), Some("Library"));
    assert_eq!(library.region_title(), Some("Ellisbridge"));
    assert_eq!(library.coordinates(), Some((23.0226, 72.5715)));
    assert_eq!(library.services, vec!["Reading hall".to_string()]);

    let sewa = repo.find_by_slug("sewa-clinic").await.unwrap().unwrap();
    assert!(sewa.location.is_none());
}

#[sqlx::test]
async fn test_submission_then_approval(pool: PgPool) {
    let repo = seeded(pool).await;

    let created = repo
        .create_submission(submission("navrangpura-reading-room"))
        .await
        .unwrap();
    assert!(!created.approved);
    assert!(
        repo.find_by_slug("navrangpura-reading-room")
            .await
            .unwrap()
            .is_none()
    );

    let pending = repo.list_pending().await.unwrap();
    assert_eq!(pending.len(), 2);

    assert!(repo.approve("navrangpura-reading-room").await.unwrap());
    assert!(!repo.approve("navrangpura-reading-room").await.unwrap());
    assert!(
        repo.find_by_slug("navrangpura-reading-room")
            .await
            .unwrap()
            .is_some()
    );
}

#[sqlx::test]
async fn test_duplicate_submission_conflicts(pool: PgPool) {
    let repo = seeded(pool).await;
    repo.create_submission(submission("reading-room"))
        .await
        .unwrap();

    let result = repo.create_submission(submission("reading-room")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_merge_category(pool: PgPool) {
    let repo = seeded(pool).await;

    let moved = repo
        .merge_category("category-shelter", "category-food-bank")
        .await
        .unwrap();
    assert_eq!(moved, 1);

    assert!(
        repo.find_category("category-shelter")
            .await
            .unwrap()
            .is_none()
    );
    let shelter = repo
        .find_by_slug("kalupur-night-shelter")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shelter.category_slug(), Some("food-bank"));
}

#[sqlx::test]
async fn test_merge_unknown_category(pool: PgPool) {
    let repo = seeded(pool).await;

    let result = repo
        .merge_category("category-missing", "category-library")
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}
