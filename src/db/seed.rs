//! Prebuilt course catalog inserted on every startup if absent.

use rusqlite::{Connection, Result};

use super::courses::{course_exists, insert_course};
use crate::validation::NewCourse;

/// (subject, number, title)
pub const SEED_COURSES: [(&str, i64, &str); 7] = [
    ("CS", 3140, "Software Development Essentials"),
    ("CS", 4501, "Advanced Software Development"),
    ("STS", 2600, "Engineering Ethics"),
    ("CHEM", 1410, "Introductory College Chemistry I"),
    ("MATH", 1310, "Calculus I"),
    ("ECON", 2010, "Principles of Microeconomics"),
    ("PHYS", 2010, "Principles of Physics 1"),
];

/// Insert each seed course that is not already present.
/// Returns the number of courses inserted (0 on every run after the first).
pub fn seed_courses(conn: &Connection) -> Result<usize> {
    let mut inserted = 0;
    for (subject, number, title) in SEED_COURSES {
        if course_exists(conn, subject, number, title)? {
            continue;
        }
        insert_course(
            conn,
            &NewCourse {
                subject: subject.to_string(),
                number,
                title: title.to_string(),
            },
        )?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!("Seeded {} courses", inserted);
    }
    Ok(inserted)
}
