pub mod courses;
pub mod reviews;
pub mod schema;
pub mod seed;
pub mod users;

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, Result};
use std::path::Path;

pub use courses::CourseFilter;
pub use schema::run_migrations;
pub use seed::{seed_courses, SEED_COURSES};

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Current instant as stored in timestamp columns.
///
/// Fixed microsecond precision keeps text ordering equal to time ordering.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Open (or create) the database file, creating its directory if needed
pub fn open_db(path: &Path) -> crate::error::Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Connection::open(path)?)
}

/// Ensure the schema exists and the seed catalog is present
pub fn init_db(conn: &Connection) -> Result<()> {
    run_migrations(conn)?;
    seed_courses(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_warn_passes_through_ok() {
        let ok: std::result::Result<i32, String> = Ok(3);
        assert_eq!(ok.log_warn("context"), Some(3));

        let err: std::result::Result<i32, String> = Err("boom".to_string());
        assert_eq!(err.log_warn("context"), None);
    }

    #[test]
    fn test_log_warn_default() {
        let err: std::result::Result<bool, String> = Err("boom".to_string());
        assert!(!err.log_warn_default("context"));

        let err: std::result::Result<Vec<i32>, String> = Err("boom".to_string());
        assert!(err.log_warn_default("context").is_empty());
    }

    #[test]
    fn test_timestamps_sort_lexically() {
        let a = now_timestamp();
        let b = now_timestamp();
        assert_eq!(a.len(), b.len());
        assert!(a <= b);
        assert!(a.ends_with('Z'));
    }
}
