use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password as submitted by a client. Never logged or serialised.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, UserError> {
        if raw.expose_secret().trim().is_empty() {
            return Err(UserError::BlankPassword);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Output of the password hasher: a self-describing digest string (PHC format
/// for argon2) that embeds its own salt and parameters.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
