use serde::{Deserialize, Serialize};

/// An account as seen by the rest of the application.
///
/// The stored password never leaves the database layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
