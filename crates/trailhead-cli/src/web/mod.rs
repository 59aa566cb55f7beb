//! HTTP server for Trailhead
//!
//! Serves the planning pages as markdown. Every handler builds its own
//! [`PlanningContext`] from the shared configuration; the only state shared
//! between requests is read-only.

use std::{future::Future, io, net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use log::{error, info};
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use trailhead_core::{params::PlanningContext, Planner};

pub mod errors;
pub mod form;
pub mod handlers;

#[cfg(test)]
mod tests;

/// Application state shared across handlers
pub struct AppState {
    pub planner: Planner,
    /// Student every request plans for, in place of a login
    pub student_id: String,
}

impl AppState {
    pub fn new(planner: Planner, student_id: impl Into<String>) -> Self {
        Self {
            planner,
            student_id: student_id.into(),
        }
    }

    /// Fresh context for one request.
    pub fn context(&self) -> PlanningContext {
        PlanningContext::new(self.student_id.clone())
    }
}

/// Build the router with every planning route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/planAhead", get(handlers::plan_ahead))
        .route(
            "/planner",
            get(handlers::planner_page).post(handlers::submit_planner),
        )
        .with_state(Arc::new(state))
}

/// Run the HTTP server until SIGINT or SIGTERM.
pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            error!("Failed to install SIGTERM handler: {e}");
            interrupt_or_pending(ctrl_c()).await;
            info!("Received SIGINT, shutting down gracefully...");
            return;
        }
    };

    tokio::select! {
        () = interrupt_or_pending(ctrl_c()) => info!("Received SIGINT, shutting down gracefully..."),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully..."),
    }
}

/// Resolve when `interrupt` fires. A listener that fails is logged and never
/// resolves, so the server keeps running.
async fn interrupt_or_pending<F>(interrupt: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = interrupt.await {
        error!("Failed to listen for SIGINT: {e}");
        std::future::pending::<()>().await;
    }
}
