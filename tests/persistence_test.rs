mod common;

use anyhow::Result;
use common::{sample_review, test_service};
use recensio::application::ReviewService;
use recensio::domain::ReviewPatch;

#[tokio::test]
async fn test_round_trip_survives_reopen() -> Result<()> {
    let (mut service, temp) = test_service().await?;
    let db_path = temp.path().join("test.db");

    let created = service
        .create(
            sample_review(2)
                .with_user_name("Pat F.")
                .with_title("Quiet and central")
                .with_verified(true),
        )
        .await?;

    let expected: Vec<_> = service.all_reviews().to_vec();
    drop(service);

    let reopened = ReviewService::connect(db_path.to_str().unwrap()).await?;
    assert_eq!(reopened.all_reviews(), expected.as_slice());

    let restored = reopened
        .all_reviews()
        .iter()
        .find(|r| r.id == created.id)
        .expect("created review survives reopen");
    assert_eq!(*restored, created);

    Ok(())
}

#[tokio::test]
async fn test_seeding_happens_at_most_once() -> Result<()> {
    let (mut service, temp) = test_service().await?;
    let db_path = temp.path().join("test.db");

    // Empty the ledger; the persisted snapshot is now an empty array
    for id in 1..=6 {
        service.delete(id).await?;
    }
    drop(service);

    // A persisted empty collection must not be reseeded
    let reopened = ReviewService::connect(db_path.to_str().unwrap()).await?;
    assert!(reopened.all_reviews().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_mutations_are_flushed_per_operation() -> Result<()> {
    let (mut service, temp) = test_service().await?;
    let db_path = temp.path().join("test.db");

    service
        .update(1, ReviewPatch::default().with_rating(2))
        .await?;
    service.delete(6).await?;
    drop(service);

    let reopened = ReviewService::connect(db_path.to_str().unwrap()).await?;
    let reviews = reopened.all_reviews();

    assert_eq!(reviews.len(), 5);
    assert!(reviews.iter().all(|r| r.id != 6));
    assert_eq!(reviews.iter().find(|r| r.id == 1).unwrap().rating, 2);

    Ok(())
}

#[tokio::test]
async fn test_id_counter_rederived_from_persisted_state() -> Result<()> {
    let (mut service, temp) = test_service().await?;
    let db_path = temp.path().join("test.db");

    let created = service.create(sample_review(1)).await?;
    assert_eq!(created.id, 7);
    drop(service);

    let mut reopened = ReviewService::connect(db_path.to_str().unwrap()).await?;
    let next = reopened.create(sample_review(1)).await?;
    assert_eq!(next.id, 8);

    Ok(())
}
