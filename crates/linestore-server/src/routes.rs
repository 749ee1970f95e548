//! HTTP routes
//!
//! The API mirrors the log's operations onto paths under `/records`:
//!
//! - `GET /records` - every record in the log, oldest first
//! - `GET /records/{key}` - the records whose id is `{key}`
//! - `GET|POST /records/{key}/{event}/{value}` - append a record, echo it back
//!
//! Append is reachable over both verbs: the path alone carries the whole
//! record, so a GET from a browser address bar is a complete client. POST
//! is accepted on the same path for clients that want a write verb.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use linestore_storage::{LogFile, Record};

use crate::error::ApiError;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The open log, shared across handlers.
    pub log: Arc<LogFile>,
}

impl AppState {
    /// Wrap an opened log file for sharing across handlers.
    pub fn new(log: LogFile) -> Self {
        Self { log: Arc::new(log) }
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(list_records))
        .route("/records/{key}", get(list_records_for_key))
        .route(
            "/records/{key}/{event}/{value}",
            get(append_record).post(append_record),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Every record in the log, oldest first.
async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(state.log.read_all().await?))
}

/// The records whose id matches the path segment, oldest first. An id the
/// log has never seen yields an empty list, not a 404.
async fn list_records_for_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(state.log.read_for_id(&key).await?))
}

/// Append a record built from the path segments and echo the stored record,
/// timestamp included. The server assigns the timestamp; clients cannot
/// supply one.
async fn append_record(
    State(state): State<AppState>,
    Path((key, event, value)): Path<(String, String, String)>,
) -> Result<Json<Record>, ApiError> {
    let record = Record::new(key, event, value);
    state.log.append(&record).await?;
    Ok(Json(record))
}
