//! Gradebook MCP Server implementation
//!
//! Each tool is a thin call through to the Gradebook HTTP API. API errors
//! are returned to the caller as tool errors, never as protocol errors.

use crate::client::GradebookClient;
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Gradebook MCP Server
///
/// Provides tools for enrolling students and querying their grades.
#[derive(Clone)]
pub struct GradebookServer {
    client: GradebookClient,
    tool_router: ToolRouter<Self>,
}

impl GradebookServer {
    pub fn from_env() -> Result<Self> {
        let client = GradebookClient::from_env()?;
        Ok(Self {
            client,
            tool_router: Self::tool_router(),
        })
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateStudentParams {
    /// Student's first name
    pub first_name: String,
    /// Student's last name
    pub last_name: String,
    /// Email address; must be unique across students
    pub email_address: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct StudentParams {
    /// Email address of the student
    pub email_address: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecordGradesParams {
    /// Email address of the student
    pub email_address: String,
    /// Subject: "math", "science", or "history"
    pub subject: String,
    /// Scores to append, each between 0 and 100
    pub scores: Vec<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SubjectParams {
    /// Email address of the student
    pub email_address: String,
    /// Subject: "math", "science", or "history"
    pub subject: String,
}

fn to_result(outcome: Result<String>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

#[tool_router]
impl GradebookServer {
    #[tool(description = "Enroll a new student. Fails if the email address is already taken.")]
    async fn create_student(
        &self,
        params: Parameters<CreateStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(
            self.client
                .create_student(
                    &params.0.first_name,
                    &params.0.last_name,
                    &params.0.email_address,
                )
                .await,
        )
    }

    #[tool(description = "Look up a student and their grade records by email address.")]
    async fn get_student(
        &self,
        params: Parameters<StudentParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.get_student(&params.0.email_address).await)
    }

    #[tool(description = "Append one or more scores to a student's subject.")]
    async fn record_grade(
        &self,
        params: Parameters<RecordGradesParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(
            self.client
                .record_grades(&params.0.email_address, &params.0.subject, &params.0.scores)
                .await,
        )
    }

    #[tool(
        description = "Get a student's average in one subject. Fails if the subject has no grades yet."
    )]
    async fn get_average(
        &self,
        params: Parameters<SubjectParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(
            self.client
                .get_average(&params.0.email_address, &params.0.subject)
                .await,
        )
    }

    #[tool(description = "Get a student's report card with sums and averages for every subject.")]
    async fn get_report(
        &self,
        params: Parameters<StudentParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.get_report(&params.0.email_address).await)
    }
}

#[tool_handler]
impl ServerHandler for GradebookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "gradebook".into(),
                title: Some("Gradebook MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Gradebook - student grade aggregation

WORKFLOW:
1. 'create_student' - Enroll a student (email is the unique key)
2. 'record_grade' - Add scores (0-100) for math, science or history
3. 'get_average' - Average for one subject
4. 'get_report' - Sums and averages for every subject
5. 'get_student' - Raw student record"#
                    .into(),
            ),
        }
    }
}
