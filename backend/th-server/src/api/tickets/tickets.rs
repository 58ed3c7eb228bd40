//! Ticket REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateTicketRequest, DeleteResponse, TicketListResponse,
    TicketResponse,
};

use th_core::{TicketDto, TicketPriority};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::debug;

#[track_caller]
fn parse_ticket_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("Invalid ticket id: {}", raw),
        field: Some("id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn not_found(id: i64) -> ApiError {
    ApiError::NotFound {
        message: format!("Ticket {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Reject the DTO with its first field violation, if any.
#[track_caller]
fn validate(dto: &TicketDto) -> ApiResult<()> {
    match dto.validate().into_iter().next() {
        Some(violation) => Err(ApiError::Validation {
            message: violation.message,
            field: Some(violation.field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/tickets
pub async fn list_tickets(State(state): State<AppState>) -> ApiResult<Json<TicketListResponse>> {
    let tickets = state.tickets.list_tickets().await?;

    Ok(Json(TicketListResponse { tickets }))
}

/// GET /api/v1/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket_id = parse_ticket_id(&id)?;

    let ticket = state
        .tickets
        .get_ticket(ticket_id)
        .await?
        .ok_or_else(|| not_found(ticket_id))?;

    Ok(Json(TicketResponse { ticket }))
}

/// POST /api/v1/tickets
///
/// New tickets always open with status "Open"; the store assigns id and date.
pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TicketResponse>)> {
    let Json(req) = payload?;

    let dto = TicketDto {
        name: req.name,
        problem_description: req.problem_description,
        priority: req
            .priority
            .unwrap_or_else(|| TicketPriority::default().as_str().to_string()),
        ..TicketDto::default()
    };
    validate(&dto)?;

    let ticket = state.tickets.create_ticket(dto).await?;

    Ok((StatusCode::CREATED, Json(TicketResponse { ticket })))
}

/// PUT /api/v1/tickets/{id}
///
/// Replaces every field, including `date`, with the body's values.
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TicketDto>, JsonRejection>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket_id = parse_ticket_id(&id)?;
    let Json(dto) = payload?;

    if dto.id != ticket_id {
        debug!("Ticket id mismatch: path {} body {}", ticket_id, dto.id);
        return Err(not_found(ticket_id));
    }
    validate(&dto)?;

    let ticket = state.tickets.update_ticket(dto).await?;

    Ok(Json(TicketResponse { ticket }))
}

/// DELETE /api/v1/tickets/{id}
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let ticket_id = parse_ticket_id(&id)?;

    if !state.tickets.delete_ticket(ticket_id).await? {
        return Err(not_found(ticket_id));
    }

    Ok(Json(DeleteResponse {
        deleted_id: ticket_id,
    }))
}
