use super::{email::Email, ids::UserId};

/// Identity of the caller, resolved from a verified bearer token.
///
/// Handlers receive it as an explicit argument and pass it down to the use
/// cases; nothing reads it from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Email,
}
