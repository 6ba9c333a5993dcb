//! Login route.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use booklog_application::LoginUseCase;
use booklog_core::{PasswordHasher, TokenService, UserId, UserStore};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub id: UserId,
    pub email: String,
    pub nickname: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State((user_store, hasher, token_service)): State<(U, H, T)>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let Json(request) = payload?;

    let outcome = LoginUseCase::new(&user_store, &hasher, &token_service)
        .execute(&request.email, request.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token.token.expose_secret().clone(),
        token_type: TOKEN_TYPE.to_string(),
        expires_at: outcome.token.expires_at,
        id: outcome.user.id,
        email: outcome.user.email.as_str().to_string(),
        nickname: outcome.user.nickname.as_str().to_string(),
    }))
}
