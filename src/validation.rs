//! Input validation for accounts, courses, and reviews.
//!
//! These checks are pure; the store runs them before touching the database
//! and turns any failure into a `false` result for the caller.

use crate::config::{
  COURSE_NUMBER_MAX, COURSE_NUMBER_MIN, MAX_RATING, MIN_PASSWORD_LEN, MIN_RATING, SUBJECT_MAX_LEN,
  SUBJECT_MIN_LEN, TITLE_MAX_LEN, TITLE_MIN_LEN,
};
use thiserror::Error;

// ============================================================================
// Result types
// ============================================================================

/// Why a piece of user input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Username must not be empty")]
  EmptyUsername,

  #[error("Password must be at least {} characters long", MIN_PASSWORD_LEN)]
  PasswordTooShort,

  #[error("Subject must be {} - {} letters", SUBJECT_MIN_LEN, SUBJECT_MAX_LEN)]
  InvalidSubject,

  #[error("Course number must be between {} and {}", COURSE_NUMBER_MIN, COURSE_NUMBER_MAX)]
  CourseNumberOutOfRange,

  #[error("Course number must be a 4-digit number")]
  CourseNumberNotNumeric,

  #[error("Title must be between {} and {} characters", TITLE_MIN_LEN, TITLE_MAX_LEN)]
  InvalidTitle,

  #[error("Rating must be between {} and {}", MIN_RATING, MAX_RATING)]
  RatingOutOfRange,
}

/// A course that passed validation, ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
  /// Upper-cased
  pub subject: String,
  pub number: i64,
  pub title: String,
}

// ============================================================================
// Accounts
// ============================================================================

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
  if username.is_empty() {
    return Err(ValidationError::EmptyUsername);
  }
  Ok(())
}

/// Length is counted in characters, not bytes
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
  if password.chars().count() < MIN_PASSWORD_LEN {
    return Err(ValidationError::PasswordTooShort);
  }
  Ok(())
}

// ============================================================================
// Courses
// ============================================================================

/// Check a subject code and return it upper-cased.
///
/// Only ASCII letters are accepted, in any case.
pub fn normalize_subject(subject: &str) -> Result<String, ValidationError> {
  let len = subject.chars().count();
  if !(SUBJECT_MIN_LEN..=SUBJECT_MAX_LEN).contains(&len)
    || !subject.chars().all(|c| c.is_ascii_alphabetic())
  {
    return Err(ValidationError::InvalidSubject);
  }
  Ok(subject.to_ascii_uppercase())
}

pub fn validate_course_number(number: i64) -> Result<(), ValidationError> {
  if !(COURSE_NUMBER_MIN..=COURSE_NUMBER_MAX).contains(&number) {
    return Err(ValidationError::CourseNumberOutOfRange);
  }
  Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
  let len = title.chars().count();
  if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
    return Err(ValidationError::InvalidTitle);
  }
  Ok(())
}

/// Validate all three course fields together
pub fn validate_course(subject: &str, number: i64, title: &str) -> Result<NewCourse, ValidationError> {
  let subject = normalize_subject(subject)?;
  validate_course_number(number)?;
  validate_title(title)?;
  Ok(NewCourse {
    subject,
    number,
    title: title.to_string(),
  })
}

/// Turn the search screen's course-number field into an optional filter.
///
/// Blank input means "no filter". Anything else must be a decimal integer;
/// range is not checked here since searching for a number that cannot
/// exist simply returns nothing.
pub fn parse_course_number(input: &str) -> Result<Option<i64>, ValidationError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  trimmed
    .parse::<i64>()
    .map(Some)
    .map_err(|_| ValidationError::CourseNumberNotNumeric)
}

// ============================================================================
// Reviews
// ============================================================================

pub fn validate_rating(rating: i64) -> Result<(), ValidationError> {
  if !(MIN_RATING..=MAX_RATING).contains(&rating) {
    return Err(ValidationError::RatingOutOfRange);
  }
  Ok(())
}
