//! Fatal backing-store faults.
//!
//! Business-rule failures never show up here; the store reports those as
//! `false` or an empty result.

/// Result type alias for store operations that can fail fatally
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
