use axum::{
    Json,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use booklog_application::{AccessGateError, BookUseCaseError, LoginError, SignupError};
use booklog_core::{BookError, UserError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied")]
    AccessDenied,

    #[error("Book not found")]
    NotFound,

    #[error("Upload is too large")]
    PayloadTooLarge,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::DuplicateEmail | ApiError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_message = match &self {
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<BookError> for ApiError {
    fn from(error: BookError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::DuplicateEmail => ApiError::DuplicateEmail,
            SignupError::Hasher(e) => ApiError::UnexpectedError(e.to_string()),
            SignupError::UserStore(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::Token(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::UserStore(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<BookUseCaseError> for ApiError {
    fn from(error: BookUseCaseError) -> Self {
        match error {
            BookUseCaseError::NotFound => ApiError::NotFound,
            BookUseCaseError::AccessDenied => ApiError::AccessDenied,
            BookUseCaseError::BookStore(e) => ApiError::UnexpectedError(e.to_string()),
            BookUseCaseError::CoverImage(e) => ApiError::UnexpectedError(e.to_string()),
            BookUseCaseError::UserStore(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<AccessGateError> for ApiError {
    fn from(_: AccessGateError) -> Self {
        ApiError::Unauthenticated
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(error.body_text())
        }
    }
}
