use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's rating and comment for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    /// 1-5 inclusive (enforced by a CHECK constraint)
    pub rating: i64,
    pub comment: Option<String>,
    /// Creation time, refreshed on every update
    pub timestamp: DateTime<Utc>,
}

/// A review listed on the "my reviews" screen, with enough of the course
/// attached to label the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReview {
    #[serde(flatten)]
    pub review: Review,
    pub subject: String,
    pub number: i64,
}

impl UserReview {
    /// Short label such as "CS 3140"
    pub fn course_label(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }
}
