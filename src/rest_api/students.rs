//! # Student Routes
//!
//! CRUD endpoints for students. List supports substring filtering on name
//! and email plus pagination; fetch-one also returns the student's enrolled
//! courses.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::storage::{NewStudent, StorageError, Student, StudentPatch};

use super::errors::{ApiError, ApiResult};
use super::query::{parse_id, present, Pagination};
use super::response::{StudentDetailResponse, StudentListResponse};
use super::server::AppState;

/// Query parameters accepted by the student list endpoint
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Request body for create and update; presence is checked per endpoint
#[derive(Debug, Default, Deserialize)]
pub struct StudentBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Create student routes
pub fn student_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_students_handler))
        .route("/", post(create_student_handler))
        .route("/:id", get(get_student_handler))
        .route("/:id", put(update_student_handler))
        .route("/:id", delete(delete_student_handler))
        .with_state(state)
}

/// List students with optional filters and pagination
async fn list_students_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StudentListParams>,
) -> ApiResult<Json<StudentListResponse>> {
    let store = state.store.read().map_err(|_| ApiError::Internal)?;

    let filtered: Vec<Student> = store
        .students()
        .iter()
        .filter(|s| params.name.as_deref().map_or(true, |n| s.name.contains(n)))
        .filter(|s| params.email.as_deref().map_or(true, |e| s.email.contains(e)))
        .cloned()
        .collect();

    // Total reflects the filtered set, not the returned page.
    let total = filtered.len();
    let page = Pagination::from_params(params.page.as_deref(), params.limit.as_deref());

    Ok(Json(StudentListResponse {
        students: page.slice(filtered),
        total,
    }))
}

/// Fetch one student plus its enrolled courses
async fn get_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StudentDetailResponse>> {
    let id = parse_id(&id).ok_or(StorageError::StudentNotFound)?;
    let store = state.store.read().map_err(|_| ApiError::Internal)?;

    let student = store.student(id)?.clone();
    let courses = store.student_courses(id);

    Ok(Json(StudentDetailResponse { student, courses }))
}

/// Create a student (201, or 400 on missing fields / duplicate email)
async fn create_student_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StudentBody>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let (name, email) = match (present(body.name), present(body.email)) {
        (Some(name), Some(email)) => (name, email),
        _ => return Err(ApiError::MissingFields("name and email")),
    };

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    let created = store.create_student(NewStudent { name, email })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a student; empty fields are left unchanged
async fn update_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StudentBody>,
) -> ApiResult<Json<Student>> {
    let id = parse_id(&id).ok_or(StorageError::StudentNotFound)?;
    let patch = StudentPatch {
        name: present(body.name),
        email: present(body.email),
    };

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    let updated = store.update_student(id, patch)?;

    Ok(Json(updated))
}

/// Delete a student (204); enrollments cascade in storage
async fn delete_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id).ok_or(StorageError::StudentNotFound)?;
    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;

    store.remove_student(id)?;
    Ok(StatusCode::NO_CONTENT)
}
