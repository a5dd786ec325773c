//! Domain entities
//!
//! Pure domain models for students and the grades they hold.

pub mod grade;
pub mod student;

pub use grade::{is_valid_score, GradeRecord, Subject, MAX_SCORE, MIN_SCORE};
pub use student::{NewStudent, Student};
