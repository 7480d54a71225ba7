//! Poll REST API handlers
//!
//! Reads return bare poll JSON (historical wire contract); writes return
//! the `{success, message, poll}` envelope with the updated record so
//! clients can adopt the server's authoritative state.

use crate::{
    ApiError, ApiResult, AppState, CreatePollRequest, DeleteResponse, PollDto, PollResponse,
    VoteRequest,
};

use poll_core::{Poll, Violation};
use poll_db::{PollRepository, RECENT_POLL_LIMIT};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/polls
///
/// Most recent polls, newest first, capped at 50.
pub async fn list_polls(State(state): State<AppState>) -> ApiResult<Json<Vec<PollDto>>> {
    let repo = PollRepository::new(state.pool.clone());
    let polls = repo.list_recent(RECENT_POLL_LIMIT).await?;

    Ok(Json(polls.into_iter().map(PollDto::from).collect()))
}

/// GET /api/polls/{id}
pub async fn get_poll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PollDto>> {
    let poll_id = Uuid::parse_str(&id)?;

    let repo = PollRepository::new(state.pool.clone());
    let poll = repo
        .find_by_id(poll_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Poll not found"))?;

    Ok(Json(poll.into()))
}

/// POST /api/polls
pub async fn create_poll(
    State(state): State<AppState>,
    payload: Result<Json<CreatePollRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PollResponse>)> {
    let Json(request) = payload?;

    let poll = Poll::try_new(&request.title, &request.options)?;

    let repo = PollRepository::new(state.pool.clone());
    repo.create(&poll).await?;

    Ok((
        StatusCode::CREATED,
        Json(PollResponse::new("Poll created successfully", poll.into())),
    ))
}

/// POST /api/polls/{id}/vote
pub async fn record_vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> ApiResult<Json<PollResponse>> {
    let poll_id = Uuid::parse_str(&id)?;
    let Json(request) = payload?;

    // The store treats any unmatched index as out of range; negative values
    // are rejected up front so the message names the real problem.
    if request.option_index < 0 {
        return Err(ApiError::validation(
            "Validation failed",
            vec![Violation::new(
                "optionIndex",
                "Option index must be a non-negative integer",
            )],
        ));
    }

    let repo = PollRepository::new(state.pool.clone());
    let poll = repo.increment_vote(poll_id, request.option_index).await?;

    Ok(Json(PollResponse::new(
        "Vote recorded successfully",
        poll.into(),
    )))
}

/// DELETE /api/polls/{id}
pub async fn delete_poll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let poll_id = Uuid::parse_str(&id)?;

    let repo = PollRepository::new(state.pool.clone());
    repo.delete(poll_id).await?;

    Ok(Json(DeleteResponse::new("Poll deleted successfully")))
}
