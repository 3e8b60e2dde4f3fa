use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReviewId = i64;
pub type PropertyId = i64;

/// Rating bounds, in stars.
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Comment length bounds, in characters.
pub const COMMENT_MIN_CHARS: usize = 10;
pub const COMMENT_MAX_CHARS: usize = 1000;

pub const DEFAULT_USER_ID: &str = "anonymous";
pub const DEFAULT_USER_NAME: &str = "Anonymous User";

/// One user's assessment of one property.
/// `id` and `property_id` are immutable after creation; corrections to the
/// rest go through a `ReviewPatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub property_id: PropertyId,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// Stars, always within [RATING_MIN, RATING_MAX]
    pub rating: i64,
    /// Short headline, may be empty
    pub title: String,
    pub comment: String,
    /// When the review was recorded (assigned by the ledger)
    pub date: DateTime<Utc>,
    pub verified: bool,
    /// How many readers found the review helpful
    pub helpful: i64,
}

/// Input for creating a review. `property_id`, `rating` and `comment` are
/// mandatory; everything else falls back to anonymous placeholders.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub property_id: PropertyId,
    pub rating: i64,
    pub comment: String,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub title: Option<String>,
    pub verified: bool,
}

impl NewReview {
    pub fn new(property_id: PropertyId, rating: i64, comment: impl Into<String>) -> Self {
        Self {
            property_id,
            rating,
            comment: comment.into(),
            user_id: None,
            user_name: None,
            user_avatar: None,
            title: None,
            verified: false,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_user_avatar(mut self, user_avatar: impl Into<String>) -> Self {
        self.user_avatar = Some(user_avatar.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }
}

/// Partial update for a review. Absent fields keep their stored value.
/// `id`, `property_id`, `date` and `helpful` are deliberately not
/// representable here: the first three are immutable and `helpful` has no
/// update path in this scope.
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub rating: Option<i64>,
    pub comment: Option<String>,
    pub title: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub verified: Option<bool>,
}

impl ReviewPatch {
    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }
}

impl Review {
    /// Materialize a new review from validated input. The ledger assigns the
    /// id and timestamp; omitted reviewer fields get anonymous placeholders.
    pub fn create(id: ReviewId, data: NewReview, date: DateTime<Utc>) -> Self {
        Self {
            id,
            property_id: data.property_id,
            user_id: data.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            user_name: data
                .user_name
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            user_avatar: data.user_avatar.unwrap_or_default(),
            rating: data.rating,
            title: data.title.unwrap_or_default(),
            comment: data.comment,
            date,
            verified: data.verified,
            helpful: 0,
        }
    }

    /// Merge a patch over this review. Fields absent from the patch are
    /// left untouched.
    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(user_avatar) = patch.user_avatar {
            self.user_avatar = user_avatar;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_applies_defaults() {
        let data = NewReview::new(1, 4, "A perfectly fine stay overall.");
        let review = Review::create(7, data, Utc::now());

        assert_eq!(review.id, 7);
        assert_eq!(review.property_id, 1);
        assert_eq!(review.user_id, DEFAULT_USER_ID);
        assert_eq!(review.user_name, DEFAULT_USER_NAME);
        assert_eq!(review.user_avatar, "");
        assert_eq!(review.title, "");
        assert!(!review.verified);
        assert_eq!(review.helpful, 0);
    }

    #[test]
    fn test_create_keeps_supplied_fields() {
        let data = NewReview::new(2, 5, "Spotless flat, great location.")
            .with_user_id("u42")
            .with_user_name("Dana Q.")
            .with_title("Would book again")
            .with_verified(true);
        let review = Review::create(1, data, Utc::now());

        assert_eq!(review.user_id, "u42");
        assert_eq!(review.user_name, "Dana Q.");
        assert_eq!(review.title, "Would book again");
        assert!(review.verified);
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let data = NewReview::new(3, 5, "Lovely hosts and a quiet street.").with_title("Great");
        let mut review = Review::create(1, data, Utc::now());
        let before = review.clone();

        review.apply(ReviewPatch::default().with_rating(3));

        assert_eq!(review.rating, 3);
        assert_eq!(review.comment, before.comment);
        assert_eq!(review.title, before.title);
        assert_eq!(review.property_id, before.property_id);
        assert_eq!(review.id, before.id);
        assert_eq!(review.date, before.date);
        assert_eq!(review.helpful, before.helpful);
    }
}
