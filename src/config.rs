//! Application configuration constants.
//!
//! Validation bounds live here so the store and the pure validators agree
//! on them, along with the database location lookup.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Default database file when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "data/course_reviews.db";

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    if let Some(path) = std::fs::read_to_string("config.toml")
        .ok()
        .and_then(|contents| database_path_from_toml(&contents))
    {
        tracing::info!("Using database from config.toml: {}", path.display());
        return path;
    }

    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(DEFAULT_DATABASE_PATH);
    tracing::info!("Using default database path: {}", default.display());
    default
}

/// Extract `[database] path` from config.toml contents.
/// Malformed files are logged and ignored.
fn database_path_from_toml(contents: &str) -> Option<PathBuf> {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.database.and_then(|db| db.path).map(PathBuf::from),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config.toml: {}", e);
            None
        }
    }
}

// ==================== Account Rules ====================

/// Minimum password length (in characters) at account creation
pub const MIN_PASSWORD_LEN: usize = 8;

// ==================== Course Rules ====================

/// Subject codes are 2-4 letters, e.g. "CS" or "CHEM"
pub const SUBJECT_MIN_LEN: usize = 2;
pub const SUBJECT_MAX_LEN: usize = 4;

/// Course numbers are four digits
pub const COURSE_NUMBER_MIN: i64 = 1000;
pub const COURSE_NUMBER_MAX: i64 = 9999;

/// Titles are 1-50 characters
pub const TITLE_MIN_LEN: usize = 1;
pub const TITLE_MAX_LEN: usize = 50;

// ==================== Review Rules ====================

/// Inclusive rating bounds
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;
