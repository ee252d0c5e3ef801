//! # Record Types
//!
//! Entity records plus the payload and patch types consumed by the store.
//! Payload types carry the caller-provided fields only; ids are assigned by
//! the store. Patch types use `Option` fields so updates replace exactly the
//! fields that were provided.

use serde::{Deserialize, Serialize};

use super::collection::Record;

/// A student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique id, assigned sequentially starting at 1
    pub id: u64,
    pub name: String,
    /// Unique across all students
    pub email: String,
}

impl Record for Student {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A course record
///
/// Titles are not required to be unique on create; duplicates are allowed at
/// this layer and only the update path rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique id, counter independent from student ids
    pub id: u64,
    pub title: String,
    pub teacher: String,
}

impl Record for Course {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A (student, course) relation record
///
/// Composite-unique; has no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: u64,
    pub course_id: u64,
}

/// Payload for creating a student
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Payload for creating a course
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub teacher: String,
}

/// Field-level patch for a student; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Field-level patch for a course; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub teacher: Option<String>,
}
