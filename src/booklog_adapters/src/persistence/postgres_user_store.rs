use booklog_core::{
    Email, NewUser, Nickname, PasswordDigest, User, UserId, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    nickname: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email =
            Email::parse(&row.email).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let nickname = Nickname::parse(&row.nickname)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        Ok(User::new(
            UserId::new(row.id),
            email,
            PasswordDigest::new(Secret::from(row.password_hash)),
            nickname,
        ))
    }
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (email, password_hash, nickname)
                VALUES ($1, $2, $3)
                RETURNING id, email, password_hash, nickname
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.password_digest.as_ref().expose_secret())
        .bind(user.nickname.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                return UserStoreError::UserAlreadyExists;
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, nickname
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, nickname
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        row.try_into()
    }

    #[tracing::instrument(name = "Checking email in PostgreSQL", skip_all)]
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}
