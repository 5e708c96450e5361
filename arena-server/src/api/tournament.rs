use crate::api::auth::authenticate;
use crate::api::{ApiError, AppState, MessageResponse};
use crate::store::{EntryId, PaymentStatus, TournamentEntry};
use arena_core::RoomId;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub game_id: Option<String>,
    pub user_name: Option<String>,
    pub phone_number: Option<String>,
    pub user_upi: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub message: String,
    pub tournament_entry: TournamentEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPaymentRequest {
    pub utr_no: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsRequest {
    pub room_id: RoomId,
    pub team1: String,
    pub team2: String,
    pub game_result: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub delivered: usize,
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest("All fields are required".into())),
    }
}

pub async fn join(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<JoinRequest>,
) -> Result<(StatusCode, Json<JoinResponse>), ApiError> {
    let user = authenticate(&state, &headers).await?;

    let entry = TournamentEntry {
        id: EntryId::new(),
        user: user.id,
        game_id: required(req.game_id)?,
        user_name: required(req.user_name)?,
        phone_number: required(req.phone_number)?,
        user_upi: required(req.user_upi)?,
        utr_no: None,
        payment_status: PaymentStatus::Pending,
    };
    state.store.save_entry(entry.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            message: "Form submitted successfully".into(),
            tournament_entry: entry,
        }),
    ))
}

pub async fn submit_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitPaymentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = authenticate(&state, &headers).await?;

    let entry = state
        .store
        .pending_entry_for(&user.id)
        .await?
        .ok_or_else(|| ApiError::BadRequest("No pending entry found for payment".into()))?;
    state
        .store
        .update_entry_status(&entry.id, PaymentStatus::Paid, Some(req.utr_no))
        .await?;

    Ok(Json(MessageResponse {
        message: "Payment submitted successfully".into(),
    }))
}

/// Out-of-band trigger: fans `tournamentResults` out to the match's room.
pub async fn results(
    State(state): State<AppState>,
    Json(req): Json<ResultsRequest>,
) -> Json<ResultsResponse> {
    let delivered =
        state
            .signaling
            .publish_match_result(req.room_id, req.team1, req.team2, req.game_result);
    Json(ResultsResponse { delivered })
}
