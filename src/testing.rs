//! Test utilities for store setup.
//!
//! Tests open a real file-backed store through the same initialization
//! path as production, in a temporary directory.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::Result;
use crate::session::Session;
use crate::store::ReviewStore;

/// Password given to every user created by [`TestEnv::logged_in`]
pub const TEST_PASSWORD: &str = "password123";

/// A seeded store in its own temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub store: ReviewStore,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let store = ReviewStore::open(&temp.path().join("course_reviews.db"))?;
        Ok(Self { temp, store })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.path().join("course_reviews.db")
    }

    /// Create `username` and return a session logged in as them.
    ///
    /// Panics if the account cannot be created or authenticated.
    pub fn logged_in(&self, username: &str) -> Session {
        assert!(
            self.store.create_user(username, TEST_PASSWORD),
            "could not create test user {}",
            username
        );
        let user = self
            .store
            .authenticate(username, TEST_PASSWORD)
            .expect("authenticate failed")
            .expect("test user missing");
        let mut session = Session::new();
        session.login(user);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_database_file() {
        let env = TestEnv::new().unwrap();
        assert!(env.db_path().exists());
    }

    #[test]
    fn test_logged_in_session() {
        let env = TestEnv::new().unwrap();
        let session = env.logged_in("carol");
        assert_eq!(session.current_user().map(|u| u.username.as_str()), Some("carol"));
        assert!(env.store.user_exists("carol").unwrap());
    }
}
