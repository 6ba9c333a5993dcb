use serde::Serialize;

use super::user::UserError;

pub const NICKNAME_MAX_CHARS: usize = 50;

/// Display name shown next to a user's books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserError::BlankNickname);
        }
        if trimmed.chars().count() > NICKNAME_MAX_CHARS {
            return Err(UserError::NicknameTooLong {
                max: NICKNAME_MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
