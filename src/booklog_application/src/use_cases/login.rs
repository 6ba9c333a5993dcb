use booklog_core::{
    AuthenticatedUser, Email, IssuedToken, Password, PasswordHasher, TokenError, TokenService,
    UserStore, UserStoreError, UserSummary,
};
use secrecy::Secret;

/// Successful login: a bearer token and the public part of the user.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: IssuedToken,
    pub user: UserSummary,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("User store error: {0}")]
    UserStore(UserStoreError),
}

/// Login use case - verifies credentials and issues a bearer token
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: &'a U,
    hasher: &'a H,
    token_service: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(user_store: &'a U, hasher: &'a H, token_service: &'a T) -> Self {
        Self {
            user_store,
            hasher,
            token_service,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<LoginOutcome, LoginError> {
        let email = Email::parse(email).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::parse(password).map_err(|_| LoginError::InvalidCredentials)?;

        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                // Keep the unknown-user path as slow as a real verification.
                let _ = self.hasher.hash(&password).await;
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::UserStore(e)),
        };

        if !self.hasher.verify(&password, user.password_digest()).await {
            tracing::debug!(user_id = %user.id(), "Password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.token_service.issue(&AuthenticatedUser {
            id: user.id(),
            email: user.email().clone(),
        })?;

        Ok(LoginOutcome {
            token,
            user: user.summary(),
        })
    }
}
