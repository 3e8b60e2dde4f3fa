// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use recensio::application::ReviewService;
use recensio::domain::NewReview;
use recensio::storage::SnapshotStore;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database.
/// The store starts empty, so the service seeds it with the sample set.
pub async fn test_service() -> Result<(ReviewService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = ReviewService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to create a service over a fresh store with no reviews at all,
/// bypassing the sample seeding.
pub async fn empty_service() -> Result<(ReviewService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite:{}?mode=rwc", db_path.to_str().unwrap());
    let store = SnapshotStore::init(&db_url).await?;
    Ok((ReviewService::new(store, Vec::new()), temp_dir))
}

/// A valid review input for the given property.
pub fn sample_review(property_id: i64) -> NewReview {
    NewReview::new(property_id, 4, "A perfectly serviceable place to stay.")
}
