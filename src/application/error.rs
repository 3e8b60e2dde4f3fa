use thiserror::Error;

use crate::domain::{PropertyId, ReviewId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Property id must be positive, got {0}")]
    InvalidPropertyId(PropertyId),

    #[error("Rating must be between 1 and 5 stars, got {0}")]
    RatingOutOfRange(i64),

    #[error("Comment must be between 10 and 1000 characters, got {0}")]
    CommentLength(usize),

    #[error("Review not found: {0}")]
    ReviewNotFound(ReviewId),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors caused by invalid input rather than missing records
    /// or storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidPropertyId(_)
                | AppError::RatingOutOfRange(_)
                | AppError::CommentLength(_)
        )
    }
}
