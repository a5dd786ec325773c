//! Gradebook MCP Server
//!
//! Exposes the Gradebook API to MCP clients as tools for:
//! - Enrolling students
//! - Recording grades
//! - Querying averages and report cards

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::GradebookServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Gradebook MCP server");

    let service = GradebookServer::from_env()?
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await?;
    service.waiting().await?;

    Ok(())
}
