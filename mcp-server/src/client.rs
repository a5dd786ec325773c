//! HTTP client for the Gradebook API

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use thiserror::Error;

/// Non-success response from the API
#[derive(Debug, Error)]
#[error("API error ({status}): {body}")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

/// HTTP client for communicating with the Gradebook API
#[derive(Clone)]
pub struct GradebookClient {
    client: reqwest::Client,
    base_url: String,
}

impl GradebookClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - GRADEBOOK_API_URL: Base URL of the API (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("GRADEBOOK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Enroll a new student
    pub async fn create_student(
        &self,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> Result<String> {
        self.post_text(
            "/students",
            &CreateStudentRequest {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email_address: email_address.to_string(),
            },
        )
        .await
    }

    /// Look up a student by email
    pub async fn get_student(&self, email: &str) -> Result<String> {
        self.get_text(&student_path(email, "")).await
    }

    /// Append scores to a student's subject
    pub async fn record_grades(&self, email: &str, subject: &str, scores: &[f64]) -> Result<String> {
        self.post_text(
            &student_path(email, &format!("/grades/{}", urlencoding::encode(subject))),
            &RecordGradesRequest {
                scores: scores.to_vec(),
            },
        )
        .await
    }

    /// Get a student's average in one subject
    pub async fn get_average(&self, email: &str, subject: &str) -> Result<String> {
        self.get_text(&student_path(
            email,
            &format!("/grades/{}/average", urlencoding::encode(subject)),
        ))
        .await
    }

    /// Get a student's plain-text report card
    pub async fn get_report(&self, email: &str) -> Result<String> {
        self.get_text(&student_path(email, "/report")).await
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "text/plain")
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }

    async fn post_text<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Accept", "text/plain")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_text_response(response).await
    }
}

/// Path under `/students/{email}`, with the email percent-encoded
fn student_path(email: &str, suffix: &str) -> String {
    format!("/students/{}{}", urlencoding::encode(email.trim()), suffix)
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        return Err(ApiError {
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(body)
}

// --- Request Types ---

#[derive(Debug, Serialize)]
struct CreateStudentRequest {
    first_name: String,
    last_name: String,
    email_address: String,
}

#[derive(Debug, Serialize)]
struct RecordGradesRequest {
    scores: Vec<f64>,
}
