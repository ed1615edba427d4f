//! Course catalog rows and rating aggregation.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result};

use crate::domain::Course;
use crate::validation::NewCourse;

/// Courses left-joined with a per-course aggregate over reviews.
/// Unreviewed courses get an average of 0 and a count of 0.
const COURSE_WITH_RATING_SELECT: &str = r#"
    SELECT c.id, c.subject, c.number, c.title,
           COALESCE(r.avg_rating, 0.0) AS avg_rating,
           COALESCE(r.review_count, 0) AS review_count
    FROM courses c
    LEFT JOIN (
        SELECT course_id, AVG(rating) AS avg_rating, COUNT(*) AS review_count
        FROM reviews
        GROUP BY course_id
    ) r ON r.course_id = c.id
"#;

/// Optional search filters, combined with AND.
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseFilter<'a> {
    /// Case-insensitive exact match
    pub subject: Option<&'a str>,
    /// Exact match
    pub number: Option<i64>,
    /// Case-insensitive substring match
    pub title: Option<&'a str>,
}

pub fn insert_course(conn: &Connection, course: &NewCourse) -> Result<i64> {
    conn.execute(
        "INSERT INTO courses (subject, number, title) VALUES (?1, ?2, ?3)",
        params![course.subject, course.number, course.title],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Exact match on all three columns
pub fn course_exists(conn: &Connection, subject: &str, number: i64, title: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM courses WHERE subject = ?1 AND number = ?2 AND title = ?3",
        params![subject, number, title],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn get_course_by_id(conn: &Connection, id: i64) -> Result<Option<Course>> {
    let sql = format!("{} WHERE c.id = ?1", COURSE_WITH_RATING_SELECT);
    conn.query_row(&sql, params![id], row_to_course).optional()
}

/// Search the catalog, ordered by course id
pub fn search_courses(conn: &Connection, filter: &CourseFilter) -> Result<Vec<Course>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(subject) = filter.subject.filter(|s| !s.is_empty()) {
        clauses.push("UPPER(c.subject) = UPPER(?)");
        values.push(Value::Text(subject.to_string()));
    }
    if let Some(number) = filter.number {
        clauses.push("c.number = ?");
        values.push(Value::Integer(number));
    }
    if let Some(title) = filter.title.filter(|s| !s.is_empty()) {
        // instr() rather than LIKE so '%' and '_' in the input match literally
        clauses.push("instr(LOWER(c.title), LOWER(?)) > 0");
        values.push(Value::Text(title.to_string()));
    }

    let mut sql = COURSE_WITH_RATING_SELECT.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY c.id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let courses = stmt
        .query_map(params_from_iter(values), row_to_course)?
        .collect::<Result<Vec<_>>>()?;
    Ok(courses)
}

pub fn count_courses(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
}

fn row_to_course(row: &rusqlite::Row) -> Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        subject: row.get(1)?,
        number: row.get(2)?,
        title: row.get(3)?,
        average_rating: row.get(4)?,
        review_count: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::run_migrations;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        for (subject, number, title) in [
            ("CS", 3140, "Software Development Essentials"),
            ("CS", 4501, "Advanced Software Development"),
            ("MATH", 1310, "Calculus I"),
            ("MATH", 3140, "100% Proofs_Only"),
        ] {
            insert_course(
                &conn,
                &NewCourse {
                    subject: subject.to_string(),
                    number,
                    title: title.to_string(),
                },
            )
            .unwrap();
        }
        conn
    }

    fn ids(courses: &[Course]) -> Vec<i64> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog_in_id_order() {
        let conn = setup();
        let all = search_courses(&conn, &CourseFilter::default()).unwrap();
        assert_eq!(ids(&all), vec![1, 2, 3, 4]);
        assert!(all.iter().all(|c| c.average_rating == 0.0 && c.review_count == 0));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let conn = setup();
        let filter = CourseFilter {
            subject: Some(""),
            number: None,
            title: Some(""),
        };
        assert_eq!(search_courses(&conn, &filter).unwrap().len(), 4);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let conn = setup();
        let by_number = CourseFilter {
            number: Some(3140),
            ..Default::default()
        };
        assert_eq!(ids(&search_courses(&conn, &by_number).unwrap()), vec![1, 4]);

        let by_subject_and_number = CourseFilter {
            subject: Some("math"),
            number: Some(3140),
            ..Default::default()
        };
        assert_eq!(ids(&search_courses(&conn, &by_subject_and_number).unwrap()), vec![4]);
    }

    #[test]
    fn test_subject_is_exact_not_prefix() {
        let conn = setup();
        let filter = CourseFilter {
            subject: Some("C"),
            ..Default::default()
        };
        assert!(search_courses(&conn, &filter).unwrap().is_empty());
    }

    #[test]
    fn test_title_substring_case_insensitive() {
        let conn = setup();
        let filter = CourseFilter {
            title: Some("SOFTWARE dev"),
            ..Default::default()
        };
        assert_eq!(ids(&search_courses(&conn, &filter).unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_title_wildcards_match_literally() {
        let conn = setup();
        let percent = CourseFilter {
            title: Some("%"),
            ..Default::default()
        };
        assert_eq!(ids(&search_courses(&conn, &percent).unwrap()), vec![4]);

        let underscore = CourseFilter {
            title: Some("s_o"),
            ..Default::default()
        };
        assert_eq!(ids(&search_courses(&conn, &underscore).unwrap()), vec![4]);
    }

    #[test]
    fn test_average_rating_aggregation() {
        let conn = setup();
        conn.execute_batch(
            r#"
            INSERT INTO users (username, password) VALUES ('a', 'password1'), ('b', 'password2');
            INSERT INTO reviews (user_id, course_id, rating) VALUES (1, 1, 4), (2, 1, 5), (1, 3, 2);
            "#,
        )
        .unwrap();

        let course = get_course_by_id(&conn, 1).unwrap().unwrap();
        assert_eq!(course.average_rating, 4.5);
        assert_eq!(course.review_count, 2);

        let calculus = get_course_by_id(&conn, 3).unwrap().unwrap();
        assert_eq!(calculus.average_rating, 2.0);

        let unreviewed = get_course_by_id(&conn, 2).unwrap().unwrap();
        assert_eq!(unreviewed.average_rating, 0.0);
        assert_eq!(unreviewed.review_count, 0);
    }

    #[test]
    fn test_get_missing_course() {
        let conn = setup();
        assert!(get_course_by_id(&conn, 99).unwrap().is_none());
    }

    #[test]
    fn test_course_exists_and_unique() {
        let conn = setup();
        assert!(course_exists(&conn, "CS", 3140, "Software Development Essentials").unwrap());
        assert!(!course_exists(&conn, "cs", 3140, "Software Development Essentials").unwrap());

        let dup = insert_course(
            &conn,
            &NewCourse {
                subject: "CS".to_string(),
                number: 3140,
                title: "Software Development Essentials".to_string(),
            },
        );
        assert!(dup.is_err());
        assert_eq!(count_courses(&conn).unwrap(), 4);
    }
}
