use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use booklog_application::{AccessGate, GateDecision};
use booklog_core::TokenService;

use crate::{adapters::AxumRequest, error::ApiError};

/// Runs the access gate in front of every route and stores the verified
/// identity in the request extensions for [`crate::CurrentUser`].
pub async fn access_gate<T>(
    State(token_service): State<T>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    T: TokenService + Clone + 'static,
{
    let decision = AccessGate::new(&token_service).authorize(&AxumRequest(&request))?;

    if let GateDecision::Authenticated(user) = decision {
        request.extensions_mut().insert(user);
    }

    Ok(next.run(request).await)
}
