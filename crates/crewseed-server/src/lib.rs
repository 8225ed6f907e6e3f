//! Read-only HTTP API over the record store.
//!
//! Every request re-reads from the store rather than serving a retained
//! in-memory batch, so responses always reflect persisted state.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crewseed_core::{Superior, Technician};
use crewseed_store::{Persistable, RecordStore, SUPERIORS_PARTITION, StoreError, TECHNICS_PARTITION};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    /// Deadline for one store read; bounds stalls when the backing
    /// engine is unavailable.
    pub read_timeout: Duration,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/superiors", get(list_superiors))
        .route("/technicians", get(list_technicians))
        // Route name kept from the original service.
        .route("/technics", get(list_technicians))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Read-side failures become a 500 response; they never take the
/// serving process down.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("read from '{0}' timed out")]
    Timeout(&'static str),
    #[error("read task failed: {0}")]
    Canceled(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "read request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn list_superiors(State(state): State<AppState>) -> Result<Json<Vec<Superior>>, ApiError> {
    Ok(Json(fetch_all::<Superior>(&state, SUPERIORS_PARTITION).await?))
}

async fn list_technicians(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technician>>, ApiError> {
    Ok(Json(
        fetch_all::<Technician>(&state, TECHNICS_PARTITION).await?,
    ))
}

/// Runs the blocking store scan off the async runtime, bounded by the
/// configured read deadline.
async fn fetch_all<R>(state: &AppState, partition: &'static str) -> Result<Vec<R>, ApiError>
where
    R: Persistable + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let task = tokio::task::spawn_blocking(move || store.retrieve_all::<R>(partition));
    match tokio::time::timeout(state.read_timeout, task).await {
        Err(_) => Err(ApiError::Timeout(partition)),
        Ok(Err(join_err)) => Err(ApiError::Canceled(join_err.to_string())),
        Ok(Ok(result)) => Ok(result?),
    }
}
