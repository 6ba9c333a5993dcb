use booklog_core::{
    Email, NewUser, Nickname, Password, PasswordHasher, PasswordHasherError, User, UserStore,
    UserStoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("Password hashing failed: {0}")]
    Hasher(#[from] PasswordHasherError),
    #[error("User store error: {0}")]
    UserStore(UserStoreError),
}

impl From<UserStoreError> for SignupError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => Self::DuplicateEmail,
            other => Self::UserStore(other),
        }
    }
}

/// Signup use case - handles user registration
pub struct SignupUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> SignupUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Registers a new user. Does not log them in.
    ///
    /// The early existence check only avoids a pointless hash; the store's
    /// uniqueness constraint decides concurrent registrations.
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        nickname: Nickname,
    ) -> Result<User, SignupError> {
        if self.user_store.exists_by_email(&email).await? {
            return Err(SignupError::DuplicateEmail);
        }

        let password_digest = self.hasher.hash(&password).await?;
        let user = self
            .user_store
            .add_user(NewUser {
                email,
                password_digest,
                nickname,
            })
            .await?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}
