//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod aggregator;
pub mod student_grade_service;

pub use aggregator::{ArithmeticAggregator, STUDENT_PRESENT};
pub use student_grade_service::{ReportCard, StudentGradeService, SubjectSummary};
