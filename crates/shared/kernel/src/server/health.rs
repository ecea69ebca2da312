use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::{Json, response::IntoResponse};
use hhub_database::Database;
use hhub_derive::{api_handler, api_model};
use hhub_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::warn;

/// Liveness report.
#[api_model]
pub(super) struct HealthResponse {
    /// `up`, or `degraded` when the store does not answer.
    status: String,
    /// `up` or `down`.
    store: String,
    version: String,
    /// Seconds since the first health check.
    uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Service and store are alive", body = HealthResponse),
        (status = SERVICE_UNAVAILABLE, description = "Store unreachable", body = HealthResponse),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(database): State<Database>) -> impl IntoResponse {
    let (code, status, store) = match database.ping_store().await {
        Ok(()) => (StatusCode::OK, "up", "up"),
        Err(e) => {
            warn!(error = %e, "Health check could not reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    let body = HealthResponse {
        status: status.to_owned(),
        store: store.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (code, [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")], Json(body))
}
