use serde::{Deserialize, Serialize};

use super::Review;

/// Sort key for per-property review listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Date,
    Rating,
    Helpful,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Rating => "rating",
            SortBy::Helpful => "helpful",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date" => Some(SortBy::Date),
            "rating" => Some(SortBy::Rating),
            "helpful" => Some(SortBy::Helpful),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for a per-property listing. `sort_by: None` leaves the reviews in
/// insertion order, which is how an unrecognized sort key behaves.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort_by: Some(SortBy::Date),
            sort_order: SortOrder::Desc,
        }
    }
}

impl ListOptions {
    pub fn by(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by: Some(sort_by),
            sort_order,
        }
    }

    pub fn unsorted() -> Self {
        Self {
            sort_by: None,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Sort reviews in place. The sort is stable: reviews that compare equal on
/// the key keep their relative insertion order, in both directions.
pub fn sort_reviews(reviews: &mut [Review], options: &ListOptions) {
    let Some(sort_by) = options.sort_by else {
        return;
    };

    reviews.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Date => a.date.cmp(&b.date),
            SortBy::Rating => a.rating.cmp(&b.rating),
            SortBy::Helpful => a.helpful.cmp(&b.helpful),
        };
        match options.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Arithmetic mean of the ratings, rounded half-up to one decimal place.
/// Returns 0 for an empty set.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: i64 = reviews.iter().map(|r| r.rating).sum();
    (sum as f64 / reviews.len() as f64 * 10.0).round() / 10.0
}
