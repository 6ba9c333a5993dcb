use booklog_core::{AuthenticatedUser, Email, IssuedToken, TokenError, TokenService, UserId};
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// HS256 bearer tokens carrying the user id as `sub` and the email.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtAuthConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user: &AuthenticatedUser,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            TokenError::Unexpected("Failed to create auth token duration".to_string()),
        )?;

        // Create JWT expiration time
        let expires_at = now
            .checked_add_signed(delta)
            .ok_or(TokenError::Unexpected("Duration out of range".to_string()))?;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.as_ref().clone(),
            iat: to_claim_timestamp(now)?,
            exp: to_claim_timestamp(expires_at)?,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenError::Unexpected(e.to_string()))?;

        Ok(IssuedToken {
            token: Secret::from(token),
            expires_at,
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, TokenError> {
        self.issue_at(user, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(map_jwt_error)?;

        let id = claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| TokenError::Malformed)?;
        let email = Email::try_from(claims.email).map_err(|_| TokenError::Malformed)?;

        Ok(AuthenticatedUser { id, email })
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::Malformed,
        _ => TokenError::Unexpected(error.to_string()),
    }
}

// Claims store timestamps as usize
fn to_claim_timestamp(at: DateTime<Utc>) -> Result<usize, TokenError> {
    at.timestamp()
        .try_into()
        .map_err(|_| TokenError::Unexpected("Failed to cast i64 to usize".to_string()))
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: Secret<String>,
    pub iat: usize,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 4)?;
        state.serialize_field("sub", &self.sub)?;
        state.serialize_field("email", self.email.expose_secret())?;
        state.serialize_field("iat", &self.iat)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
