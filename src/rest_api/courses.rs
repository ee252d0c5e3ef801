//! # Course Routes
//!
//! CRUD endpoints for courses plus the enrollment endpoints that tie
//! students to courses. Duplicate titles pass on create and are rejected on
//! update only.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::storage::{Course, CoursePatch, NewCourse, StorageError};

use super::errors::{ApiError, ApiResult};
use super::query::{parse_id, present, Pagination};
use super::response::{CourseDetailResponse, CourseListResponse, EnrollResponse};
use super::server::AppState;

/// Query parameters accepted by the course list endpoint
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    pub title: Option<String>,
    pub teacher: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Request body for create and update; presence is checked per endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CourseBody {
    pub title: Option<String>,
    pub teacher: Option<String>,
}

/// Create course routes, including the enrollment endpoints
pub fn course_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_courses_handler))
        .route("/", post(create_course_handler))
        .route("/:id", get(get_course_handler))
        .route("/:id", put(update_course_handler))
        .route("/:id", delete(delete_course_handler))
        .route("/:course_id/students/:student_id", post(enroll_handler))
        .route("/:course_id/students/:student_id", delete(unenroll_handler))
        .with_state(state)
}

/// List courses with optional filters and pagination
async fn list_courses_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CourseListParams>,
) -> ApiResult<Json<CourseListResponse>> {
    let store = state.store.read().map_err(|_| ApiError::Internal)?;

    let filtered: Vec<Course> = store
        .courses()
        .iter()
        .filter(|c| params.title.as_deref().map_or(true, |t| c.title.contains(t)))
        .filter(|c| {
            params
                .teacher
                .as_deref()
                .map_or(true, |t| c.teacher.contains(t))
        })
        .cloned()
        .collect();

    let total = filtered.len();
    let page = Pagination::from_params(params.page.as_deref(), params.limit.as_deref());

    Ok(Json(CourseListResponse {
        courses: page.slice(filtered),
        total,
    }))
}

/// Fetch one course plus its enrolled students
async fn get_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CourseDetailResponse>> {
    let id = parse_id(&id).ok_or(StorageError::CourseNotFound)?;
    let store = state.store.read().map_err(|_| ApiError::Internal)?;

    let course = store.course(id)?.clone();
    let students = store.course_students(id);

    Ok(Json(CourseDetailResponse { course, students }))
}

/// Create a course (201); duplicate titles are allowed here
async fn create_course_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CourseBody>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let (title, teacher) = match (present(body.title), present(body.teacher)) {
        (Some(title), Some(teacher)) => (title, teacher),
        _ => return Err(ApiError::MissingFields("title and teacher")),
    };

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    let created = store.create_course(NewCourse { title, teacher })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a course; a title held by another course is rejected
async fn update_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<CourseBody>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(&id).ok_or(StorageError::CourseNotFound)?;
    let patch = CoursePatch {
        title: present(body.title),
        teacher: present(body.teacher),
    };

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    let updated = store.update_course(id, patch)?;

    Ok(Json(updated))
}

/// Delete a course (204); enrollments cascade in storage
async fn delete_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id).ok_or(StorageError::CourseNotFound)?;
    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;

    store.remove_course(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enroll a student in a course (201, 404 for missing ids, 400 on duplicate)
async fn enroll_handler(
    State(state): State<Arc<AppState>>,
    Path((course_id, student_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<EnrollResponse>)> {
    let course_id = parse_id(&course_id).ok_or(StorageError::CourseNotFound)?;
    let student_id = parse_id(&student_id).ok_or(StorageError::StudentNotFound)?;

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    store.enroll(student_id, course_id)?;

    Ok((StatusCode::CREATED, Json(EnrollResponse::success())))
}

/// Remove one enrollment pair (204, 404 when the pair does not exist)
async fn unenroll_handler(
    State(state): State<Arc<AppState>>,
    Path((course_id, student_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let course_id = parse_id(&course_id).ok_or(StorageError::EnrollmentNotFound)?;
    let student_id = parse_id(&student_id).ok_or(StorageError::EnrollmentNotFound)?;

    let mut store = state.store.write().map_err(|_| ApiError::Internal)?;
    store.unenroll(student_id, course_id)?;

    Ok(StatusCode::NO_CONTENT)
}
