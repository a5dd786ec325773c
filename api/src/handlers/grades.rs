//! Grade handlers
//!
//! Endpoints for recording grades and aggregating them, either for a stored
//! student or for an ad-hoc list of results.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::students::StudentResponse;
use crate::domain::entities::Subject;
use crate::error::AppError;
use crate::AppState;

/// Request body for POST /students/:email/grades/:subject
#[derive(Debug, Deserialize)]
pub struct RecordGradesRequest {
    pub scores: Vec<f64>,
}

/// Request body for the ad-hoc aggregation endpoints
#[derive(Debug, Deserialize)]
pub struct ResultsRequest {
    pub results: Vec<f64>,
}

/// Aggregate over one student's subject
#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectAggregateResponse {
    pub email_address: String,
    pub subject: Subject,
    pub value: f64,
}

/// Aggregate over an ad-hoc list of results
#[derive(Debug, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub count: usize,
    pub value: f64,
}

/// POST /students/:email/grades/:subject
///
/// Append scores to a subject, attaching the grade record if needed.
pub async fn record_grades(
    State(state): State<AppState>,
    Path((email, subject)): Path<(String, String)>,
    Json(request): Json<RecordGradesRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let subject: Subject = subject.parse()?;
    let student = state
        .grade_service
        .record_grades(&email, subject, &request.scores)
        .await?;
    Ok(Json(student.into()))
}

/// GET /students/:email/grades/:subject/average
pub async fn get_average(
    State(state): State<AppState>,
    Path((email, subject)): Path<(String, String)>,
) -> Result<Json<SubjectAggregateResponse>, AppError> {
    let subject: Subject = subject.parse()?;
    let value = state.grade_service.get_average(&email, subject).await?;
    Ok(Json(SubjectAggregateResponse {
        email_address: email,
        subject,
        value,
    }))
}

/// GET /students/:email/grades/:subject/sum
pub async fn get_sum(
    State(state): State<AppState>,
    Path((email, subject)): Path<(String, String)>,
) -> Result<Json<SubjectAggregateResponse>, AppError> {
    let subject: Subject = subject.parse()?;
    let value = state.grade_service.get_sum(&email, subject).await?;
    Ok(Json(SubjectAggregateResponse {
        email_address: email,
        subject,
        value,
    }))
}

/// POST /grades/sum
pub async fn sum_results(
    State(state): State<AppState>,
    Json(request): Json<ResultsRequest>,
) -> Json<AggregateResponse> {
    let value = state
        .grade_service
        .add_grade_results_for_single_class(&request.results);
    Json(AggregateResponse {
        count: request.results.len(),
        value,
    })
}

/// POST /grades/average
pub async fn average_results(
    State(state): State<AppState>,
    Json(request): Json<ResultsRequest>,
) -> Result<Json<AggregateResponse>, AppError> {
    let value = state
        .grade_service
        .find_grade_point_average(&request.results)?;
    Ok(Json(AggregateResponse {
        count: request.results.len(),
        value,
    }))
}
