// src/handlers.rs
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use crate::errors::Error;
use crate::models::{
    ApiResponse, CastVoteRequest, ChoiceCount, CreatePollRequest, GetPollRequest, Poll,
    PollDetails,
};
use crate::services::PollService;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) | Error::MissingParameters => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Store(err) => {
                tracing::error!(error = %err, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if self.is_client_error() {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(ApiResponse::failure(self.public_message()))).into_response()
    }
}

/// Create a poll from a title and its options
pub async fn create_poll(
    State(service): State<PollService>,
    payload: Result<Json<CreatePollRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Poll>>, Error> {
    let Json(request) = payload.map_err(|_| Error::MissingParameters)?;
    let (title, choices) = request.into_parts()?;

    let poll = service.create_poll(title, choices).await?;
    Ok(Json(ApiResponse::success("Poll created", poll)))
}

/// Fetch a poll with its votes and the current tally
pub async fn get_poll(
    State(service): State<PollService>,
    payload: Result<Json<GetPollRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PollDetails>>, Error> {
    let Json(request) = payload.map_err(|_| Error::MissingParameters)?;
    let id = request.into_id()?;

    let details = service.get_poll(&id).await?;
    Ok(Json(ApiResponse::success("Poll found", details)))
}

/// Vote for one of a poll's options. Responds with the per-choice counts
/// in poll order; the total is part of `getPoll`.
pub async fn cast_vote(
    State(service): State<PollService>,
    payload: Result<Json<CastVoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<ChoiceCount>>>, Error> {
    let Json(request) = payload.map_err(|_| Error::MissingParameters)?;
    let (id, option) = request.into_parts()?;

    let aggregate = service.cast_vote(&id, &option).await?;
    Ok(Json(ApiResponse::success("Vote casted", aggregate.results)))
}

pub async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok("ok"))
}

pub async fn method_not_allowed() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::failure("Method not allowed")),
    )
}

pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::failure("Not found")))
}
