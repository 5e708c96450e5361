use crate::api::auth::authenticate;
use crate::api::{ApiError, AppState, MessageResponse};
use crate::store::{ProfileRecord, UserRecord};
use arena_core::UserId;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub refer_id: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserRecord,
    pub profile: Option<ProfileRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".into()));
    }
    if state.store.find_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let password_hash = state
        .credentials
        .hash(&req.password)
        .map_err(|e| ApiError::Internal(e.into()))?;
    let user = UserRecord {
        id: UserId::new(),
        username: req.username,
        email: req.email,
        password_hash,
        refer_id: req.refer_id,
        number: req.number,
    };
    state.store.create_user(user.clone()).await?;
    state
        .store
        .create_profile(ProfileRecord {
            user: user.id,
            avatar: None,
        })
        .await?;

    let token = state
        .credentials
        .issue_token(&user.id)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let valid = state
        .credentials
        .verify(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.into()))?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid password".into()));
    }

    let token = state
        .credentials
        .issue_token(&user.id)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(AuthResponse { token, user }))
}

pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let profile = state.store.find_profile(&user.id).await?;
    Ok(Json(ProfileResponse { user, profile }))
}

pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = authenticate(&state, &headers).await?;

    let valid = state
        .credentials
        .verify(&req.old_password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.into()))?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid old password".into()));
    }

    let password_hash = state
        .credentials
        .hash(&req.new_password)
        .map_err(|e| ApiError::Internal(e.into()))?;
    state.store.set_password(&user.id, password_hash).await?;

    Ok(Json(MessageResponse {
        message: "Password changed successfully".into(),
    }))
}
