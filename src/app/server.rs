use crate::app::health::HealthStatus;
use crate::config::AppConfig;
use crate::utils::monitor::UptimeMonitor;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    monitor: Arc<UptimeMonitor>,
    environment: Arc<str>,
}

impl ServerState {
    pub fn new(monitor: UptimeMonitor, environment: &str) -> Self {
        Self {
            monitor: Arc::new(monitor),
            environment: Arc::from(environment),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(UptimeMonitor::new(), &config.environment())
    }
}

/// GET /api/ping - Health check
async fn ping(State(state): State<ServerState>) -> impl IntoResponse {
    Json(HealthStatus::capture(&state.monitor, &state.environment))
}

pub fn router(state: ServerState) -> Router {
    let api_routes = Router::new()
        .route("/ping", get(ping))
        .with_state(state);

    Router::new().nest("/api", api_routes)
}

pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let state = ServerState::from_config(config);
    state.monitor.log_stats("Server starting");

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %config.server.bind_address,
        environment = %state.environment,
        "🚀 Status endpoint listening on /api/ping"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
