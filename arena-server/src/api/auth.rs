use crate::api::{ApiError, AppState};
use crate::store::UserRecord;
use axum::http::{HeaderMap, header};

/// Resolves the bearer token in `Authorization` to its user record.
pub(crate) async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<UserRecord, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Malformed authorization header".into()))?;

    let user_id = state
        .credentials
        .verify_token(token)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

    state
        .store
        .find_user(&user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unknown user".into()))
}
