use chrono::Utc;
use tracing::warn;

use crate::domain::{
    average_rating, default_reviews, sort_reviews, ListOptions, NewReview, PropertyId, Review,
    ReviewId, ReviewPatch, COMMENT_MAX_CHARS, COMMENT_MIN_CHARS, RATING_MAX, RATING_MIN,
};
use crate::storage::SnapshotStore;

use super::AppError;

/// Application service owning the review collection. This is the primary
/// interface for any client (CLI, API, TUI, etc.).
///
/// The collection is held in memory and flushed to the snapshot store after
/// every successful mutation. A persist failure leaves the in-memory change
/// applied and propagates as `AppError::Storage`; the in-memory state stays
/// the source of truth for the rest of the process lifetime.
pub struct ReviewService {
    store: SnapshotStore,
    reviews: Vec<Review>,
    next_id: ReviewId,
}

/// Query result for one property's reviews.
#[derive(Debug, Clone)]
pub struct PropertyReviews {
    pub reviews: Vec<Review>,
    pub total_count: usize,
    pub average_rating: f64,
}

impl ReviewService {
    /// Compose a service around an explicit collection. Most callers want
    /// `init`, `connect` or `open`, which load the persisted snapshot; this
    /// constructor exists so tests and embedders can start from a collection
    /// of their choosing.
    pub fn new(store: SnapshotStore, reviews: Vec<Review>) -> Self {
        let next_id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            store,
            reviews,
            next_id,
        }
    }

    /// Initialize a new database at the given path and open the ledger.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = SnapshotStore::init(&db_url).await?;
        Self::open(store).await
    }

    /// Connect to an existing database and open the ledger.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let store = SnapshotStore::connect(&db_url).await?;
        Self::open(store).await
    }

    /// Load the persisted collection. A store that has never been written
    /// is seeded with the built-in sample set (and the seed is persisted,
    /// so it happens at most once per store). A read failure falls back to
    /// the sample set in memory.
    pub async fn open(store: SnapshotStore) -> Result<Self, AppError> {
        let reviews = match store.load_reviews().await {
            Ok(Some(reviews)) => reviews,
            Ok(None) => {
                let seed = default_reviews();
                store.save_reviews(&seed).await?;
                seed
            }
            Err(err) => {
                warn!("failed to load reviews snapshot, using sample data: {err:#}");
                default_reviews()
            }
        };
        Ok(Self::new(store, reviews))
    }

    /// All reviews, in insertion order.
    pub fn all_reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// List reviews for a property, with count and average rating.
    /// Returned reviews are independent copies; mutating them does not
    /// touch ledger state. Never fails: an unknown property yields an
    /// empty listing with a zero average.
    pub fn list_by_property(&self, property_id: PropertyId, options: &ListOptions) -> PropertyReviews {
        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();

        sort_reviews(&mut reviews, options);

        let total_count = reviews.len();
        let average_rating = average_rating(&reviews);

        PropertyReviews {
            reviews,
            total_count,
            average_rating,
        }
    }

    /// Record a new review. Assigns the next id and the current timestamp,
    /// applies anonymous defaults, persists, and returns a copy.
    pub async fn create(&mut self, data: NewReview) -> Result<Review, AppError> {
        if data.property_id < 1 {
            return Err(AppError::InvalidPropertyId(data.property_id));
        }
        validate_rating(data.rating)?;
        validate_comment(&data.comment)?;

        let review = Review::create(self.next_id, data, Utc::now());
        self.next_id += 1;
        self.reviews.push(review.clone());
        self.persist().await?;
        Ok(review)
    }

    /// Update an existing review. Patch fields are validated with the same
    /// rules as creation; the stored id and property never change.
    pub async fn update(&mut self, id: ReviewId, patch: ReviewPatch) -> Result<Review, AppError> {
        let index = self
            .reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::ReviewNotFound(id))?;

        if let Some(rating) = patch.rating {
            validate_rating(rating)?;
        }
        if let Some(ref comment) = patch.comment {
            validate_comment(comment)?;
        }

        self.reviews[index].apply(patch);
        let updated = self.reviews[index].clone();
        self.persist().await?;
        Ok(updated)
    }

    /// Remove a review permanently. The freed id is not reused.
    pub async fn delete(&mut self, id: ReviewId) -> Result<(), AppError> {
        let index = self
            .reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::ReviewNotFound(id))?;

        self.reviews.remove(index);
        self.persist().await?;
        Ok(())
    }

    async fn persist(&self) -> Result<(), AppError> {
        self.store.save_reviews(&self.reviews).await?;
        Ok(())
    }
}

fn validate_rating(rating: i64) -> Result<(), AppError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::RatingOutOfRange(rating));
    }
    Ok(())
}

fn validate_comment(comment: &str) -> Result<(), AppError> {
    let len = comment.chars().count();
    if !(COMMENT_MIN_CHARS..=COMMENT_MAX_CHARS).contains(&len) {
        return Err(AppError::CommentLength(len));
    }
    Ok(())
}
