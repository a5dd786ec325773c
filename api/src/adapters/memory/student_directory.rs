//! In-memory adapter for StudentDirectory
//!
//! The index maps email to a record handle; each record sits behind its own
//! mutex so writers to different students never contend, and at most one
//! writer touches a given student at a time. Record updates hold the index
//! read lock until they finish, so a removal waits for in-flight writes and
//! a write never lands on a record that has already left the index.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::{NewStudent, Student, Subject};
use crate::domain::ports::StudentDirectory;
use crate::error::DomainError;

type RecordHandle = Arc<Mutex<Student>>;

/// Process-local implementation of StudentDirectory
#[derive(Default)]
pub struct InMemoryStudentDirectory {
    records: RwLock<HashMap<String, RecordHandle>>,
}

impl InMemoryStudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    async fn handle(&self, email: &str) -> Option<RecordHandle> {
        self.records.read().await.get(email).cloned()
    }

    /// Apply `update` to a live record while the index read lock is held
    async fn update_record<F>(&self, email: &str, update: F) -> Result<Student, DomainError>
    where
        F: FnOnce(&mut Student) + Send,
    {
        let records = self.records.read().await;
        let handle = records
            .get(email)
            .ok_or_else(|| DomainError::NotFound(email.to_string()))?;

        let mut student = handle.lock().await;
        update(&mut student);
        Ok(student.clone())
    }
}

#[async_trait]
impl StudentDirectory for InMemoryStudentDirectory {
    async fn create(&self, new_student: &NewStudent) -> Result<Student, DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(&new_student.email_address) {
            return Err(DomainError::DuplicateKey(new_student.email_address.clone()));
        }

        let student = new_student.clone().into_student();
        records.insert(
            student.email_address.clone(),
            Arc::new(Mutex::new(student.clone())),
        );

        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError> {
        match self.handle(email).await {
            Some(handle) => Ok(Some(handle.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn update_name(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student, DomainError> {
        self.update_record(email, |student| {
            student.first_name = first_name.to_string();
            student.last_name = last_name.to_string();
        })
        .await
    }

    async fn add_results(
        &self,
        email: &str,
        subject: Subject,
        scores: &[f64],
    ) -> Result<Student, DomainError> {
        self.update_record(email, |student| {
            student.grade_record_mut(subject).extend(scores);
        })
        .await
    }

    async fn remove(&self, email: &str) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(email.to_string()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
