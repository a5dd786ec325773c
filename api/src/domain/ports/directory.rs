//! Student directory port
//!
//! Maps a student's email address to the student record and its grades.

use async_trait::async_trait;

use crate::domain::entities::{NewStudent, Student, Subject};
use crate::error::DomainError;

/// Storage for Student entities, keyed by email address
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Create a student
    ///
    /// Fails with `DuplicateKey` when the email is already present; the
    /// existing record is left untouched.
    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError>;

    /// Find a student by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError>;

    /// Replace the mutable name fields
    async fn update_name(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student, DomainError>;

    /// Append scores to a subject's grade record, attaching it if needed
    async fn add_results(
        &self,
        email: &str,
        subject: Subject,
        scores: &[f64],
    ) -> Result<Student, DomainError>;

    /// Remove a student together with its grade records
    async fn remove(&self, email: &str) -> Result<(), DomainError>;

    /// Number of enrolled students
    async fn count(&self) -> Result<usize, DomainError>;
}
