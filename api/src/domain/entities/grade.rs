//! Grade domain entity
//!
//! A grade record holds the ordered scores a student has in one subject.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Lowest score a single grade result may hold
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a single grade result may hold
pub const MAX_SCORE: f64 = 100.0;

/// Subjects a student can be graded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    History,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::History];
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Math => write!(f, "math"),
            Subject::Science => write!(f, "science"),
            Subject::History => write!(f, "history"),
        }
    }
}

impl std::str::FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "math" | "maths" => Ok(Subject::Math),
            "science" => Ok(Subject::Science),
            "history" => Ok(Subject::History),
            _ => Err(ParseError::UnknownSubject(s.to_string())),
        }
    }
}

/// Check whether a single score is a usable grade result
pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// The scores a student holds in one subject, in the order they were recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub subject: Subject,
    pub results: Vec<f64>,
}

impl GradeRecord {
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            results: Vec::new(),
        }
    }

    pub fn with_results(subject: Subject, results: Vec<f64>) -> Self {
        Self { subject, results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn extend(&mut self, scores: &[f64]) {
        self.results.extend_from_slice(scores);
    }
}
