//! Administrative endpoints for server management.

use crate::{ApiResult, AppState};

use axum::{Json, extract::State};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    /// Whether any pending WAL frames were copied into the database file
    pub written: bool,
    pub message: String,
}

/// Checkpoint WAL to main database file.
///
/// Forces SQLite to flush the Write-Ahead Log into the main database file
/// and truncate it.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<CheckpointResponse>> {
    info!("Manual checkpoint requested");

    let written = state.store.persist().await?;

    let message = if written {
        "Database checkpoint completed"
    } else {
        "Nothing to checkpoint"
    };
    info!("{}", message);

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        written,
        message: message.to_string(),
    }))
}
