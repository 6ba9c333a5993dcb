use booklog_core::{AuthRequest, AuthenticatedUser, TokenError, TokenService};
use thiserror::Error;

const API_PREFIX: &str = "/api/";
const PUBLIC_API_PREFIXES: [&str; 2] = ["/api/auth/", "/api/images/"];

/// Outcome of running a request through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The route needs no credentials.
    Public,
    /// The bearer token verified; the identity should be attached to the request.
    Authenticated(AuthenticatedUser),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessGateError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),
}

/// Routes reachable without a token: anything outside the API (static
/// assets, health check), the auth endpoints, cover images, and CORS
/// preflight requests.
pub fn is_public_route(method: &str, path: &str) -> bool {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return true;
    }
    if path != "/api" && !path.starts_with(API_PREFIX) {
        return true;
    }
    PUBLIC_API_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Per-request authentication check run before any handler.
pub struct AccessGate<'a, T>
where
    T: TokenService,
{
    token_service: &'a T,
}

impl<'a, T> AccessGate<'a, T>
where
    T: TokenService,
{
    pub fn new(token_service: &'a T) -> Self {
        Self { token_service }
    }

    #[tracing::instrument(
        name = "AccessGate::authorize",
        skip_all,
        fields(method = request.method(), path = request.path())
    )]
    pub fn authorize<R>(&self, request: &R) -> Result<GateDecision, AccessGateError>
    where
        R: AuthRequest,
    {
        if is_public_route(request.method(), request.path()) {
            return Ok(GateDecision::Public);
        }

        let token = request.bearer_token().ok_or(AccessGateError::MissingToken)?;

        match self.token_service.verify(token) {
            Ok(user) => Ok(GateDecision::Authenticated(user)),
            Err(e) => {
                tracing::info!(kind = ?e, "Rejected bearer token");
                Err(e.into())
            }
        }
    }
}
