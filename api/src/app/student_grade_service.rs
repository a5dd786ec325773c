//! Student grade service
//!
//! Composes the student directory with the grade aggregator to answer
//! "what is this student's average in subject X". All validation of caller
//! input happens here; the directory and aggregator trust their arguments.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Serialize;

use crate::domain::entities::{
    is_valid_score, GradeRecord, NewStudent, Student, Subject, MAX_SCORE, MIN_SCORE,
};
use crate::domain::ports::{GradeAggregator, StudentDirectory};
use crate::error::{AppError, DomainError};

/// Maximum length of a first or last name
const MAX_NAME_LEN: usize = 100;

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
}

/// Per-subject line of a report card
#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub subject: Subject,
    pub count: usize,
    pub sum: f64,
    /// Absent when the subject has no results yet
    pub average: Option<f64>,
}

/// Summary of every grade a student holds
#[derive(Debug, Clone, Serialize)]
pub struct ReportCard {
    pub student_id: String,
    pub name: String,
    pub email_address: String,
    pub subjects: Vec<SubjectSummary>,
    pub overall_average: Option<f64>,
}

/// Service for enrolling students and aggregating their grades
pub struct StudentGradeService<SD, GA>
where
    SD: StudentDirectory,
    GA: GradeAggregator,
{
    directory: Arc<SD>,
    aggregator: Arc<GA>,
}

impl<SD, GA> StudentGradeService<SD, GA>
where
    SD: StudentDirectory,
    GA: GradeAggregator,
{
    pub fn new(directory: Arc<SD>, aggregator: Arc<GA>) -> Self {
        Self {
            directory,
            aggregator,
        }
    }

    /// Create a student with no grades
    pub async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Student, AppError> {
        self.enroll(first_name, last_name, email, Vec::new()).await
    }

    /// Create a student together with its initial grade records
    pub async fn enroll(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        grades: Vec<GradeRecord>,
    ) -> Result<Student, AppError> {
        let first_name = validate_name("First name", first_name)?;
        let last_name = validate_name("Last name", last_name)?;
        let email = validate_email(email)?;
        for record in &grades {
            validate_scores(&record.results)?;
        }

        let new_student = NewStudent::new(first_name, last_name, email).with_grades(grades);
        let student = self.directory.create(&new_student).await?;

        tracing::info!(
            student_id = %student.id,
            email = %student.email_address,
            "Student enrolled"
        );

        Ok(student)
    }

    /// Find a student by email; `NotFound` when absent
    pub async fn find_by_email(&self, email: &str) -> Result<Student, AppError> {
        let email = email.trim();
        self.directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::NotFound(email.to_string())))
    }

    /// Rename a student; the email key cannot change
    pub async fn update_name(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student, AppError> {
        let first_name = validate_name("First name", first_name)?;
        let last_name = validate_name("Last name", last_name)?;

        Ok(self
            .directory
            .update_name(email.trim(), first_name, last_name)
            .await?)
    }

    /// Remove a student and every grade record it owns
    pub async fn remove_student(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim();
        self.directory.remove(email).await?;
        tracing::info!(email = %email, "Student removed");
        Ok(())
    }

    /// Append scores to one of a student's subjects
    pub async fn record_grades(
        &self,
        email: &str,
        subject: Subject,
        scores: &[f64],
    ) -> Result<Student, AppError> {
        if scores.is_empty() {
            return Err(AppError::BadRequest(
                "At least one score is required".to_string(),
            ));
        }
        validate_scores(scores)?;

        let student = self
            .directory
            .add_results(email.trim(), subject, scores)
            .await?;

        tracing::debug!(
            email = %student.email_address,
            subject = %subject,
            added = scores.len(),
            "Grades recorded"
        );

        Ok(student)
    }

    /// Total of the results for a single class
    pub fn add_grade_results_for_single_class(&self, results: &[f64]) -> f64 {
        self.aggregator.sum(results)
    }

    /// Mean of the results; `EmptyInput` when there are none
    pub fn find_grade_point_average(&self, results: &[f64]) -> Result<f64, AppError> {
        Ok(self.aggregator.average(results)?)
    }

    /// Confirm a student reference is present
    pub fn check_null(&self, student: Option<&Student>) -> Result<String, AppError> {
        Ok(self.aggregator.check_null(student)?)
    }

    /// Average of a student's results in one subject
    pub async fn get_average(&self, email: &str, subject: Subject) -> Result<f64, AppError> {
        let student = self.find_by_email(email).await?;
        self.find_grade_point_average(student.results(subject))
    }

    /// Sum of a student's results in one subject
    pub async fn get_sum(&self, email: &str, subject: Subject) -> Result<f64, AppError> {
        let student = self.find_by_email(email).await?;
        Ok(self.add_grade_results_for_single_class(student.results(subject)))
    }

    /// Per-subject totals and averages for a student
    pub async fn report_card(&self, email: &str) -> Result<ReportCard, AppError> {
        let student = self.find_by_email(email).await?;

        let subjects = Subject::ALL
            .iter()
            .map(|&subject| {
                let results = student.results(subject);
                SubjectSummary {
                    subject,
                    count: results.len(),
                    sum: self.aggregator.sum(results),
                    average: self.aggregator.average(results).ok(),
                }
            })
            .collect();

        let overall_average = self.aggregator.average(&student.all_results()).ok();

        Ok(ReportCard {
            student_id: student.id.to_string(),
            name: student.full_name(),
            email_address: student.email_address,
            subjects,
            overall_average,
        })
    }

    /// Number of enrolled students
    pub async fn student_count(&self) -> Result<usize, AppError> {
        Ok(self.directory.count().await?)
    }
}

fn validate_name<'a>(field: &str, name: &'a str) -> Result<&'a str, AppError> {
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(AppError::Domain(DomainError::Validation(format!(
            "{} must be between 1 and {} characters",
            field, MAX_NAME_LEN
        ))));
    }
    Ok(name)
}

fn validate_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    let pattern = email_pattern()
        .ok_or_else(|| AppError::Internal("email pattern failed to compile".to_string()))?;
    if !pattern.is_match(email) {
        return Err(AppError::Domain(DomainError::Validation(format!(
            "Invalid email address: '{}'",
            email
        ))));
    }
    Ok(email)
}

fn validate_scores(scores: &[f64]) -> Result<(), AppError> {
    if let Some(bad) = scores.iter().find(|s| !is_valid_score(**s)) {
        return Err(AppError::Domain(DomainError::Validation(format!(
            "Score {} is outside {}..={}",
            bad, MIN_SCORE, MAX_SCORE
        ))));
    }
    Ok(())
}
