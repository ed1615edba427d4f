use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry joined with its aggregate rating.
///
/// `average_rating` and `review_count` are derived at query time from the
/// reviews table and are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    /// Always upper-case, e.g. "CS"
    pub subject: String,
    pub number: i64,
    pub title: String,
    /// Mean of all review ratings, 0.0 when unreviewed
    pub average_rating: f64,
    pub review_count: i64,
}

impl Course {
    pub fn has_reviews(&self) -> bool {
        self.review_count > 0
    }

    /// Short label such as "CS 3140"
    pub fn code(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.subject, self.number, self.title)
    }
}
