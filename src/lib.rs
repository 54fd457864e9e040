//! Markbook — student record report service.
//!
//! Sits in front of the primary records backend: a report request fetches the
//! record over one of two trust mechanisms (replayed session cookies or a
//! signed service token) and renders it into a downloadable PDF.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{routing::get, Router};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/records/:id/report", get(api::record_report))
        .route("/health", get(api::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
