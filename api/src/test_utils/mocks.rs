//! Test doubles for the port traits
//!
//! `CountingDirectory` is an in-memory directory that counts every call.
//! `ScriptedAggregator` returns stubbed values, plays back scripted
//! `check_null` outcomes in order, and records the arguments it saw.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::app::{ArithmeticAggregator, STUDENT_PRESENT};
use crate::domain::entities::{NewStudent, Student, Subject};
use crate::domain::ports::{GradeAggregator, StudentDirectory};
use crate::error::DomainError;

// ============================================================================
// Counting Student Directory
// ============================================================================

#[derive(Default)]
pub struct CountingDirectory {
    students: Arc<RwLock<HashMap<String, Student>>>,
    pub create_count: AtomicUsize,
    pub find_count: AtomicUsize,
    pub update_count: AtomicUsize,
    pub add_results_count: AtomicUsize,
    pub remove_count: AtomicUsize,
}

impl CountingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a student for testing
    pub fn with_student(self, student: Student) -> Self {
        self.students
            .write()
            .unwrap()
            .insert(student.email_address.clone(), student);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.find_count.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }

    pub fn add_results_calls(&self) -> usize {
        self.add_results_count.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentDirectory for CountingDirectory {
    async fn create(&self, new_student: &NewStudent) -> Result<Student, DomainError> {
        self.create_count.fetch_add(1, Ordering::SeqCst);
        let mut students = self.students.write().unwrap();
        if students.contains_key(&new_student.email_address) {
            return Err(DomainError::DuplicateKey(new_student.email_address.clone()));
        }
        let student = new_student.clone().into_student();
        students.insert(student.email_address.clone(), student.clone());
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError> {
        self.find_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.students.read().unwrap().get(email).cloned())
    }

    async fn update_name(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student, DomainError> {
        self.update_count.fetch_add(1, Ordering::SeqCst);
        let mut students = self.students.write().unwrap();
        let student = students
            .get_mut(email)
            .ok_or_else(|| DomainError::NotFound(email.to_string()))?;
        student.first_name = first_name.to_string();
        student.last_name = last_name.to_string();
        Ok(student.clone())
    }

    async fn add_results(
        &self,
        email: &str,
        subject: Subject,
        scores: &[f64],
    ) -> Result<Student, DomainError> {
        self.add_results_count.fetch_add(1, Ordering::SeqCst);
        let mut students = self.students.write().unwrap();
        let student = students
            .get_mut(email)
            .ok_or_else(|| DomainError::NotFound(email.to_string()))?;
        student.grade_record_mut(subject).extend(scores);
        Ok(student.clone())
    }

    async fn remove(&self, email: &str) -> Result<(), DomainError> {
        self.remove_count.fetch_add(1, Ordering::SeqCst);
        self.students
            .write()
            .unwrap()
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(email.to_string()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.students.read().unwrap().len())
    }
}

// ============================================================================
// Scripted Grade Aggregator
// ============================================================================

/// One scripted result for `check_null`
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Fail,
    Succeed(String),
}

/// Aggregator double; unstubbed calls fall through to real arithmetic
#[derive(Default)]
pub struct ScriptedAggregator {
    sum_value: Option<f64>,
    average_value: Option<f64>,
    check_outcomes: Mutex<VecDeque<CheckOutcome>>,
    last_results: Mutex<Option<Vec<f64>>>,
    pub sum_count: AtomicUsize,
    pub average_count: AtomicUsize,
    pub check_null_count: AtomicUsize,
}

impl ScriptedAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub `sum` to always return `value`
    pub fn with_sum(mut self, value: f64) -> Self {
        self.sum_value = Some(value);
        self
    }

    /// Stub `average` to always return `value`
    pub fn with_average(mut self, value: f64) -> Self {
        self.average_value = Some(value);
        self
    }

    /// Queue `check_null` outcomes, consumed one per call
    pub fn with_check_outcomes(self, outcomes: Vec<CheckOutcome>) -> Self {
        *self.check_outcomes.lock().unwrap() = outcomes.into();
        self
    }

    pub fn sum_calls(&self) -> usize {
        self.sum_count.load(Ordering::SeqCst)
    }

    pub fn average_calls(&self) -> usize {
        self.average_count.load(Ordering::SeqCst)
    }

    pub fn check_null_calls(&self) -> usize {
        self.check_null_count.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent `sum` or `average` call
    pub fn last_results(&self) -> Option<Vec<f64>> {
        self.last_results.lock().unwrap().clone()
    }

    fn record(&self, results: &[f64]) {
        *self.last_results.lock().unwrap() = Some(results.to_vec());
    }
}

impl GradeAggregator for ScriptedAggregator {
    fn sum(&self, results: &[f64]) -> f64 {
        self.sum_count.fetch_add(1, Ordering::SeqCst);
        self.record(results);
        self.sum_value
            .unwrap_or_else(|| ArithmeticAggregator.sum(results))
    }

    fn average(&self, results: &[f64]) -> Result<f64, DomainError> {
        self.average_count.fetch_add(1, Ordering::SeqCst);
        self.record(results);
        match self.average_value {
            Some(value) => Ok(value),
            None => ArithmeticAggregator.average(results),
        }
    }

    fn check_null(&self, student: Option<&Student>) -> Result<String, DomainError> {
        self.check_null_count.fetch_add(1, Ordering::SeqCst);
        match self.check_outcomes.lock().unwrap().pop_front() {
            Some(CheckOutcome::Fail) => Err(DomainError::NullReference),
            Some(CheckOutcome::Succeed(message)) => Ok(message),
            None => match student {
                Some(_) => Ok(STUDENT_PRESENT.to_string()),
                None => Err(DomainError::NullReference),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_student;

    #[tokio::test]
    async fn counting_directory_counts_calls() {
        let directory = CountingDirectory::new().with_student(test_student());
        let email = test_student().email_address;

        directory.find_by_email(&email).await.unwrap();
        directory.find_by_email("missing@x.com").await.unwrap();
        directory
            .add_results(&email, Subject::Math, &[50.0])
            .await
            .unwrap();
        directory.update_name(&email, "A", "B").await.unwrap();
        directory.remove(&email).await.unwrap();

        assert_eq!(directory.find_calls(), 2);
        assert_eq!(directory.add_results_calls(), 1);
        assert_eq!(directory.update_calls(), 1);
        assert_eq!(directory.remove_calls(), 1);
        assert_eq!(directory.create_calls(), 0);
    }

    #[test]
    fn scripted_outcomes_play_in_order_then_fall_back() {
        let aggregator = ScriptedAggregator::new().with_check_outcomes(vec![
            CheckOutcome::Succeed("first".to_string()),
            CheckOutcome::Fail,
        ]);

        assert_eq!(aggregator.check_null(None).unwrap(), "first");
        assert!(aggregator.check_null(Some(&test_student())).is_err());
        assert!(aggregator.check_null(None).is_err());
        assert!(aggregator.check_null(Some(&test_student())).is_ok());
        assert_eq!(aggregator.check_null_calls(), 4);
    }

    #[test]
    fn unstubbed_arithmetic_is_real() {
        let aggregator = ScriptedAggregator::new();

        assert_eq!(aggregator.sum(&[1.0, 2.0]), 3.0);
        assert_eq!(aggregator.average(&[1.0, 2.0]).unwrap(), 1.5);
        assert_eq!(aggregator.last_results(), Some(vec![1.0, 2.0]));
    }
}
