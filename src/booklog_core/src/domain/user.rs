use thiserror::Error;

use super::{email::Email, ids::UserId, nickname::Nickname, password::PasswordDigest};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must not be blank")]
    BlankPassword,
    #[error("Nickname must not be blank")]
    BlankNickname,
    #[error("Nickname must be at most {max} characters")]
    NicknameTooLong { max: usize },
}

/// A registered user as held by the credential store.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password_digest: PasswordDigest,
    nickname: Nickname,
}

impl User {
    pub fn new(
        id: UserId,
        email: Email,
        password_digest: PasswordDigest,
        nickname: Nickname,
    ) -> Self {
        Self {
            id,
            email,
            password_digest,
            nickname,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            nickname: self.nickname.clone(),
        }
    }
}

/// A user that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_digest: PasswordDigest,
    pub nickname: Nickname,
}

/// The public part of a user returned after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub email: Email,
    pub nickname: Nickname,
}
