//! The review store: every read and write the application performs.
//!
//! Rule violations (bad input, duplicates, missing session, someone else's
//! review) come back as `false`, `None` or an empty list. Writes also
//! swallow unexpected database faults after logging them. Reads that have
//! no sensible empty answer surface faults as [`StoreError`].

use rusqlite::{Connection, ErrorCode};
use std::path::Path;

use crate::db::{self, courses, reviews, users, CourseFilter, LogOnError};
use crate::domain::{Course, Review, User, UserReview};
use crate::error::{Result, StoreError};
use crate::session::Session;
use crate::validation;

pub struct ReviewStore {
    conn: Connection,
}

impl ReviewStore {
    /// Open the database file, creating schema and seed courses as needed
    pub fn open(path: &Path) -> Result<Self> {
        tracing::info!("Opening review store at {}", path.display());
        let conn = db::open_db(path)?;
        Self::from_connection(conn)
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        db::init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Release the connection, reporting any failure to close cleanly
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| StoreError::Database(e))
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Users ==========

    pub fn user_exists(&self, username: &str) -> Result<bool> {
        Ok(users::username_exists(&self.conn, username)?)
    }

    /// Look up a user by exact username and password.
    ///
    /// Does not touch any session; the caller logs the user in.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        Ok(users::get_user_by_credentials(&self.conn, username, password)?)
    }

    pub fn create_user(&self, username: &str, password: &str) -> bool {
        if let Err(e) = validation::validate_username(username)
            .and_then(|_| validation::validate_password(password))
        {
            tracing::debug!("Rejected new account: {}", e);
            return false;
        }

        soft_write(
            users::create_user(&self.conn, username, password),
            "Failed to create user",
        )
        .inspect(|id| tracing::info!("Created user {} (id {})", username, id))
        .is_some()
    }

    // ========== Courses ==========

    pub fn add_course(&self, subject: &str, number: i64, title: &str) -> bool {
        let course = match validation::validate_course(subject, number, title) {
            Ok(course) => course,
            Err(e) => {
                tracing::debug!("Rejected course {} {}: {}", subject, number, e);
                return false;
            }
        };

        soft_write(courses::insert_course(&self.conn, &course), "Failed to add course")
            .inspect(|id| {
                tracing::info!("Added course {} {} (id {})", course.subject, course.number, id)
            })
            .is_some()
    }

    /// Search the catalog; any filter left as `None` or empty is ignored
    pub fn search_courses(
        &self,
        subject: Option<&str>,
        number: Option<i64>,
        title: Option<&str>,
    ) -> Result<Vec<Course>> {
        let filter = CourseFilter {
            subject,
            number,
            title,
        };
        Ok(courses::search_courses(&self.conn, &filter)?)
    }

    pub fn get_course(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(courses::get_course_by_id(&self.conn, course_id)?)
    }

    pub fn course_count(&self) -> Result<i64> {
        Ok(courses::count_courses(&self.conn)?)
    }

    // ========== Reviews ==========

    pub fn add_review(
        &self,
        session: &Session,
        course_id: i64,
        rating: i64,
        comment: Option<&str>,
    ) -> bool {
        let Some(user_id) = session.user_id() else {
            tracing::debug!("Rejected review: no user logged in");
            return false;
        };
        if let Err(e) = validation::validate_rating(rating) {
            tracing::debug!("Rejected review: {}", e);
            return false;
        }

        soft_write(
            reviews::insert_review(&self.conn, user_id, course_id, rating, comment),
            "Failed to add review",
        )
        .is_some()
    }

    /// Only the review's author may update it; anyone else gets `false`
    pub fn update_review(
        &self,
        session: &Session,
        review_id: i64,
        rating: i64,
        comment: Option<&str>,
    ) -> bool {
        let Some(user_id) = session.user_id() else {
            tracing::debug!("Rejected review update: no user logged in");
            return false;
        };
        if let Err(e) = validation::validate_rating(rating) {
            tracing::debug!("Rejected review update: {}", e);
            return false;
        }

        let changed = reviews::update_review(&self.conn, review_id, user_id, rating, comment)
            .log_warn_default("Failed to update review");
        if changed == 0 {
            tracing::debug!("Review {} not found or not owned by user {}", review_id, user_id);
        }
        changed > 0
    }

    /// Only the review's author may delete it; anyone else gets `false`
    pub fn delete_review(&self, session: &Session, review_id: i64) -> bool {
        let Some(user_id) = session.user_id() else {
            tracing::debug!("Rejected review delete: no user logged in");
            return false;
        };

        let deleted = reviews::delete_review(&self.conn, review_id, user_id)
            .log_warn_default("Failed to delete review");
        if deleted == 0 {
            tracing::debug!("Review {} not found or not owned by user {}", review_id, user_id);
        }
        deleted > 0
    }

    /// Newest first
    pub fn get_course_reviews(&self, course_id: i64) -> Result<Vec<Review>> {
        Ok(reviews::get_course_reviews(&self.conn, course_id)?)
    }

    /// The logged-in user's reviews, newest first; empty when logged out
    pub fn get_user_reviews(&self, session: &Session) -> Result<Vec<UserReview>> {
        match session.user_id() {
            Some(user_id) => Ok(reviews::get_user_reviews(&self.conn, user_id)?),
            None => Ok(Vec::new()),
        }
    }

    /// The logged-in user's review of `course_id`, if any
    pub fn get_user_review_for_course(
        &self,
        session: &Session,
        course_id: i64,
    ) -> Result<Option<Review>> {
        match session.user_id() {
            Some(user_id) => Ok(reviews::get_user_review_for_course(
                &self.conn, user_id, course_id,
            )?),
            None => Ok(None),
        }
    }
}

/// Constraint violations are expected outcomes (duplicates, unknown course);
/// anything else is logged as a fault. Both become `None`.
fn soft_write<T>(result: rusqlite::Result<T>, context: &str) -> Option<T> {
    match result {
        Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
            tracing::debug!("{}: {}", context, e);
            None
        }
        other => other.log_warn(context),
    }
}
