use rusqlite::{Connection, Result};

/// Create the users, courses and reviews tables if they are missing.
///
/// Safe to run on every startup.
pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Foreign keys are off by default in SQLite and must be enabled per connection
  conn.execute_batch("PRAGMA foreign_keys = ON;")?;

  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS users (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      username TEXT UNIQUE NOT NULL,
      password TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS courses (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      subject TEXT NOT NULL,
      number INTEGER NOT NULL,
      title TEXT NOT NULL,
      UNIQUE(subject, number, title)
    );

    CREATE TABLE IF NOT EXISTS reviews (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      user_id INTEGER NOT NULL,
      course_id INTEGER NOT NULL,
      rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
      comment TEXT,
      -- RFC 3339 UTC with fixed precision so text order is time order
      timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
      FOREIGN KEY (user_id) REFERENCES users(id),
      FOREIGN KEY (course_id) REFERENCES courses(id),
      UNIQUE(user_id, course_id)
    );

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_reviews_course_id ON reviews(course_id);
    CREATE INDEX IF NOT EXISTS idx_reviews_user_id ON reviews(user_id);
    "#,
  )?;

  tracing::debug!("Schema ready");
  Ok(())
}
