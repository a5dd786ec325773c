//! Gradebook API Server
//!
//! Enrolls students keyed by email address and aggregates their grades per subject.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod report;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryStudentDirectory;
use app::{ArithmeticAggregator, StudentGradeService};
use config::Config;
use error::AppError;

/// The grade service as wired for production
pub type GradeService = StudentGradeService<InMemoryStudentDirectory, ArithmeticAggregator>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub grade_service: Arc<GradeService>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let directory = Arc::new(InMemoryStudentDirectory::new());
        let aggregator = Arc::new(ArithmeticAggregator::new());

        Self {
            grade_service: Arc::new(StudentGradeService::new(directory, aggregator)),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    students: usize,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        students: state.grade_service.student_count().await?,
    }))
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let mut enrollment_routes: Router<AppState> =
        Router::new().route("/students", post(handlers::create_student));

    if state.config.rate_limit_enabled {
        // Uses PeerIpKeyExtractor to get client IP from socket connection
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(state.config.rate_limit_replenish_secs)
                .burst_size(state.config.rate_limit_burst)
                .finish()
                .context("Invalid rate limit configuration")?,
        );
        enrollment_routes = enrollment_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        // Students
        .route(
            "/students/:email",
            get(handlers::get_student)
                .patch(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .route("/students/:email/report", get(handlers::get_report))
        // Grades for a stored student
        .route(
            "/students/:email/grades/:subject",
            post(handlers::record_grades),
        )
        .route(
            "/students/:email/grades/:subject/average",
            get(handlers::get_average),
        )
        .route(
            "/students/:email/grades/:subject/sum",
            get(handlers::get_sum),
        )
        // Ad-hoc aggregation
        .route("/grades/sum", post(handlers::sum_results))
        .route("/grades/average", post(handlers::average_results))
        .merge(enrollment_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gradebook_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gradebook API...");

    let config = Config::from_env();
    let state = AppState::new(config.clone());
    let app = build_router(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
