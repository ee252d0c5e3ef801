//! # Storage Errors
//!
//! Every fallible storage operation returns one of these as a value; none of
//! them is fatal to the process. The HTTP layer translates each variant into
//! a status code.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Student id does not resolve to a record
    #[error("Student not found")]
    StudentNotFound,

    /// Course id does not resolve to a record
    #[error("Course not found")]
    CourseNotFound,

    /// Another student already uses this email
    #[error("Email must be unique")]
    EmailTaken,

    /// Another course already uses this title (update path only)
    #[error("Course title must be unique")]
    TitleTaken,

    /// The (student, course) pair is already in the enrollment set
    #[error("Student already enrolled in this course")]
    AlreadyEnrolled,

    /// No such (student, course) pair to unenroll
    #[error("Enrollment not found")]
    EnrollmentNotFound,
}

impl StorageError {
    /// Whether this error is a uniqueness conflict (as opposed to a lookup miss)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            StorageError::EmailTaken | StorageError::TitleTaken | StorageError::AlreadyEnrolled
        )
    }
}
