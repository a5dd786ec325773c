//! Grade aggregation port
//!
//! Arithmetic over a sequence of grade results. Kept behind a trait so the
//! service can be exercised against scripted test doubles.

use crate::domain::entities::Student;
use crate::error::DomainError;

pub trait GradeAggregator: Send + Sync {
    /// Sum of all results; `0.0` for an empty sequence
    fn sum(&self, results: &[f64]) -> f64;

    /// Arithmetic mean; fails with `EmptyInput` for an empty sequence
    fn average(&self, results: &[f64]) -> Result<f64, DomainError>;

    /// Confirm a student reference is present; fails with `NullReference` otherwise
    fn check_null(&self, student: Option<&Student>) -> Result<String, DomainError>;
}
