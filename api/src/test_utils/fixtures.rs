//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::student::StudentId;
use crate::domain::entities::{GradeRecord, Student, Subject};

/// Create a test student with default values and no grades
pub fn test_student() -> Student {
    Student {
        id: StudentId(Uuid::new_v4()),
        first_name: "Chad".to_string(),
        last_name: "Darby".to_string(),
        email_address: "chad.darby@luv2code_school.com".to_string(),
        grades: vec![],
        enrolled_at: Utc::now(),
    }
}

/// Create a test student with a specific name; the email is derived from it
pub fn test_student_named(first_name: &str, last_name: &str) -> Student {
    Student {
        id: StudentId(Uuid::new_v4()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email_address: format!(
            "{}.{}@school.test",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        grades: vec![],
        enrolled_at: Utc::now(),
    }
}

/// Create a test student holding the given math results
pub fn test_student_with_math(results: Vec<f64>) -> Student {
    Student {
        grades: vec![GradeRecord::with_results(Subject::Math, results)],
        ..test_student()
    }
}
