//! Arithmetic grade aggregator
//!
//! Plain IEEE double arithmetic over grade results. No rounding is applied
//! here; presentation layers format as they see fit.

use crate::domain::entities::Student;
use crate::domain::ports::GradeAggregator;
use crate::error::DomainError;

/// Confirmation returned by `check_null` for a present student
pub const STUDENT_PRESENT: &str = "Student reference is present";

#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticAggregator;

impl ArithmeticAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl GradeAggregator for ArithmeticAggregator {
    fn sum(&self, results: &[f64]) -> f64 {
        results.iter().sum()
    }

    fn average(&self, results: &[f64]) -> Result<f64, DomainError> {
        if results.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(self.sum(results) / results.len() as f64)
    }

    fn check_null(&self, student: Option<&Student>) -> Result<String, DomainError> {
        match student {
            Some(_) => Ok(STUDENT_PRESENT.to_string()),
            None => Err(DomainError::NullReference),
        }
    }
}
