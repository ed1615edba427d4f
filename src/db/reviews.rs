//! Review rows.
//!
//! Ownership is enforced in the SQL itself: update and delete only touch a
//! row whose `user_id` matches, and report how many rows changed.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result};

use super::now_timestamp;
use crate::domain::{Review, UserReview};

const REVIEW_COLUMNS: &str = "r.id, r.user_id, r.course_id, r.rating, r.comment, r.timestamp";

pub fn insert_review(
    conn: &Connection,
    user_id: i64,
    course_id: i64,
    rating: i64,
    comment: Option<&str>,
) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO reviews (user_id, course_id, rating, comment, timestamp)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
        params![user_id, course_id, rating, comment, now_timestamp()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update rating and comment and refresh the timestamp.
/// Returns the number of rows changed (0 if missing or owned by someone else).
pub fn update_review(
    conn: &Connection,
    review_id: i64,
    user_id: i64,
    rating: i64,
    comment: Option<&str>,
) -> Result<usize> {
    conn.execute(
        r#"
    UPDATE reviews
    SET rating = ?1, comment = ?2, timestamp = ?3
    WHERE id = ?4 AND user_id = ?5
    "#,
        params![rating, comment, now_timestamp(), review_id, user_id],
    )
}

/// Returns the number of rows deleted (0 if missing or owned by someone else)
pub fn delete_review(conn: &Connection, review_id: i64, user_id: i64) -> Result<usize> {
    conn.execute(
        "DELETE FROM reviews WHERE id = ?1 AND user_id = ?2",
        params![review_id, user_id],
    )
}

pub fn get_review_by_id(conn: &Connection, review_id: i64) -> Result<Option<Review>> {
    let sql = format!("SELECT {} FROM reviews r WHERE r.id = ?1", REVIEW_COLUMNS);
    conn.query_row(&sql, params![review_id], row_to_review).optional()
}

/// All reviews of a course, newest first
pub fn get_course_reviews(conn: &Connection, course_id: i64) -> Result<Vec<Review>> {
    let sql = format!(
        "SELECT {} FROM reviews r WHERE r.course_id = ?1 ORDER BY r.timestamp DESC, r.id DESC",
        REVIEW_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let reviews = stmt
        .query_map(params![course_id], row_to_review)?
        .collect::<Result<Vec<_>>>()?;
    Ok(reviews)
}

/// All reviews written by a user with their course labels, newest first
pub fn get_user_reviews(conn: &Connection, user_id: i64) -> Result<Vec<UserReview>> {
    let sql = format!(
        r#"
    SELECT {}, c.subject, c.number
    FROM reviews r
    JOIN courses c ON r.course_id = c.id
    WHERE r.user_id = ?1
    ORDER BY r.timestamp DESC, r.id DESC
    "#,
        REVIEW_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let reviews = stmt
        .query_map(params![user_id], |row| {
            Ok(UserReview {
                review: row_to_review(row)?,
                subject: row.get(6)?,
                number: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(reviews)
}

/// A user's review of one course, if they have written one
pub fn get_user_review_for_course(
    conn: &Connection,
    user_id: i64,
    course_id: i64,
) -> Result<Option<Review>> {
    let sql = format!(
        "SELECT {} FROM reviews r WHERE r.user_id = ?1 AND r.course_id = ?2",
        REVIEW_COLUMNS
    );
    conn.query_row(&sql, params![user_id, course_id], row_to_review)
        .optional()
}

pub fn count_course_reviews(conn: &Connection, course_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM reviews WHERE course_id = ?1",
        params![course_id],
        |row| row.get(0),
    )
}

fn row_to_review(row: &rusqlite::Row) -> Result<Review> {
    let timestamp_str: String = row.get(5)?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Review {
        id: row.get(0)?,
        user_id: row.get(1)?,
        course_id: row.get(2)?,
        rating: row.get(3)?,
        comment: row.get(4)?,
        timestamp,
    })
}
