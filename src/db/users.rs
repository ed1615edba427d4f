//! User account rows.
//!
//! Passwords are stored and compared as plain text.

use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::User;

/// Create a new user, returns the user ID
pub fn create_user(conn: &Connection, username: &str, password: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, password],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Check if a username already exists (exact, case-sensitive match)
pub fn username_exists(conn: &Connection, username: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?1",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Find the user whose username and password both match exactly
pub fn get_user_by_credentials(
    conn: &Connection,
    username: &str,
    password: &str,
) -> Result<Option<User>> {
    conn.query_row(
        "SELECT id, username FROM users WHERE username = ?1 AND password = ?2",
        params![username, password],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
            })
        },
    )
    .optional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::run_migrations;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_lookup() {
        let conn = setup();
        let id = create_user(&conn, "alice", "longenough1").unwrap();

        assert!(username_exists(&conn, "alice").unwrap());
        assert!(!username_exists(&conn, "ALICE").unwrap());

        let user = get_user_by_credentials(&conn, "alice", "longenough1")
            .unwrap()
            .unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_wrong_password_returns_none() {
        let conn = setup();
        create_user(&conn, "alice", "longenough1").unwrap();
        assert!(get_user_by_credentials(&conn, "alice", "LONGENOUGH1").unwrap().is_none());
        assert!(get_user_by_credentials(&conn, "bob", "longenough1").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_is_constraint_error() {
        let conn = setup();
        create_user(&conn, "alice", "longenough1").unwrap();
        let err = create_user(&conn, "alice", "different99").unwrap_err();
        assert_eq!(err.sqlite_error_code(), Some(rusqlite::ErrorCode::ConstraintViolation));
    }
}
