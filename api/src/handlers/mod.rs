//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod grades;
pub mod students;

pub use grades::{average_results, get_average, get_sum, record_grades, sum_results};
pub use students::{create_student, delete_student, get_report, get_student, update_student};
