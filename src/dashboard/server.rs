use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::routes;
use super::state::DashboardState;

/// Build the dashboard router. Split out from [`start_dashboard`] so tests
/// can serve it on an ephemeral port.
pub fn build_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(routes::index))
        // Form actions
        .route("/chat", post(routes::submit_message))
        .route("/actions/refresh", post(routes::refresh))
        .route("/actions/clear", post(routes::clear_history))
        // JSON API endpoints
        .route("/api/status", get(routes::get_status))
        .route("/api/session", get(routes::get_session))
        .route("/api/transactions", get(routes::get_transactions))
        .route("/api/transcript", get(routes::download_transcript))
        // HTML partials
        .route("/api/status/html", get(routes::get_status_html))
        .with_state(state)
}

/// Bind to the configured address and serve until the process exits.
pub async fn start_dashboard(state: Arc<DashboardState>) -> anyhow::Result<()> {
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind dashboard to {}", addr))?;

    state.log(|l| l.log_server_start(&addr));

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
