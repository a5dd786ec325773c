//! Student domain entity
//!
//! Represents an enrolled student, keyed by email address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::grade::{GradeRecord, Subject};

/// Unique identifier for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An enrolled student and the grade records it owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Unique key; never changes after creation
    pub email_address: String,
    /// At most one record per subject, kept sorted by subject
    pub grades: Vec<GradeRecord>,
    pub enrolled_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Get the grade record for a subject, if one is attached
    pub fn grade_record(&self, subject: Subject) -> Option<&GradeRecord> {
        self.grades.iter().find(|r| r.subject == subject)
    }

    /// Scores for a subject; empty when no record is attached
    pub fn results(&self, subject: Subject) -> &[f64] {
        self.grade_record(subject)
            .map(|r| r.results.as_slice())
            .unwrap_or(&[])
    }

    /// Get the record for a subject, attaching an empty one first if needed
    pub fn grade_record_mut(&mut self, subject: Subject) -> &mut GradeRecord {
        let idx = match self.grades.binary_search_by(|r| r.subject.cmp(&subject)) {
            Ok(idx) => idx,
            Err(idx) => {
                self.grades.insert(idx, GradeRecord::new(subject));
                idx
            }
        };
        &mut self.grades[idx]
    }

    /// Every recorded score across all subjects
    pub fn all_results(&self) -> Vec<f64> {
        self.grades
            .iter()
            .flat_map(|r| r.results.iter().copied())
            .collect()
    }
}

/// Data needed to enroll a new student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Grade records created together with the student
    pub grades: Vec<GradeRecord>,
}

impl NewStudent {
    pub fn new(first_name: &str, last_name: &str, email_address: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address: email_address.to_string(),
            grades: Vec::new(),
        }
    }

    pub fn with_grades(mut self, grades: Vec<GradeRecord>) -> Self {
        self.grades = grades;
        self
    }

    /// Build the stored record, merging duplicate subjects in order
    pub fn into_student(self) -> Student {
        let mut student = Student {
            id: StudentId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            grades: Vec::new(),
            enrolled_at: Utc::now(),
        };
        for record in self.grades {
            student
                .grade_record_mut(record.subject)
                .extend(&record.results);
        }
        student
    }
}
