//! Registration route.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use booklog_application::SignupUseCase;
use booklog_core::{Email, Nickname, Password, PasswordHasher, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::{ApiError, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub nickname: String,
}

/// Creates an account. Does not log the user in.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, hasher)): State<(U, H)>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(request) = payload?;

    // Parse domain entities
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let nickname = Nickname::parse(&request.nickname)?;

    SignupUseCase::new(&user_store, &hasher)
        .execute(email, password, nickname)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}
