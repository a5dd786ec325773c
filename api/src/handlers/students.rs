//! Student handlers
//!
//! Endpoints for enrolling, looking up, renaming and removing students.
//! The report card supports content negotiation: Accept: application/json
//! for JSON, otherwise text/plain.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{GradeRecord, Student, Subject};
use crate::error::AppError;
use crate::report::render_report_card;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Initial results for one subject
#[derive(Debug, Deserialize)]
pub struct GradeInput {
    pub subject: Subject,
    pub results: Vec<f64>,
}

/// Request body for student creation
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Grade records to create together with the student
    #[serde(default)]
    pub grades: Vec<GradeInput>,
}

/// Request body for renaming a student
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Student as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub grades: Vec<GradeRecord>,
    pub enrolled_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.to_string(),
            first_name: student.first_name,
            last_name: student.last_name,
            email_address: student.email_address,
            grades: student.grades,
            enrolled_at: student.enrolled_at,
        }
    }
}

/// POST /students
///
/// Enroll a new student. The email address is the student's unique key.
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let grades = request
        .grades
        .into_iter()
        .map(|g| GradeRecord::with_results(g.subject, g.results))
        .collect();

    let student = state
        .grade_service
        .enroll(
            &request.first_name,
            &request.last_name,
            &request.email_address,
            grades,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// GET /students/:email
pub async fn get_student(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.grade_service.find_by_email(&email).await?;
    Ok(Json(student.into()))
}

/// PATCH /students/:email
///
/// Rename a student. The email address cannot be changed.
pub async fn update_student(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state
        .grade_service
        .update_name(&email, &request.first_name, &request.last_name)
        .await?;
    Ok(Json(student.into()))
}

/// DELETE /students/:email
pub async fn delete_student(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode, AppError> {
    state.grade_service.remove_student(&email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /students/:email/report
///
/// - Accept: application/json → JSON response
/// - Otherwise → Plain text
pub async fn get_report(
    State(state): State<AppState>,
    Path(email): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let card = state.grade_service.report_card(&email).await?;

    if wants_json(&headers) {
        Ok(Json(card).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_report_card(&card),
        )
            .into_response())
    }
}
