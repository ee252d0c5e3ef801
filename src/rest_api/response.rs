//! # Response Bodies
//!
//! Typed response shapes for the REST endpoints. List responses report the
//! filtered total alongside the current page of records.

use serde::Serialize;

use crate::storage::{Course, Student};

/// Paged student list
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
    /// Filtered count before pagination
    pub total: usize,
}

/// Paged course list
#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    /// Filtered count before pagination
    pub total: usize,
}

/// A student together with the courses it is enrolled in
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetailResponse {
    pub student: Student,
    pub courses: Vec<Course>,
}

/// A course together with its enrolled students
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetailResponse {
    pub course: Course,
    pub students: Vec<Student>,
}

/// Enrollment success body
#[derive(Debug, Clone, Serialize)]
pub struct EnrollResponse {
    pub success: bool,
}

impl EnrollResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}

/// Error body used by every failure response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_shape() {
        let response = StudentListResponse {
            students: vec![Student {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }],
            total: 3,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["students"][0]["name"], "Alice");
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("Not Found")).unwrap();
        assert_eq!(value, json!({"error": "Not Found"}));
    }
}
