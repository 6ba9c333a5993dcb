use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use booklog_core::{Email, NewUser, User, UserId, UserStore, UserStoreError};

/// In-memory credential store. Emails are normalised on parse, so keying by
/// `Email` gives case-insensitive uniqueness.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
    last_id: Arc<AtomicI64>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = User::new(id, user.email, user.password_digest, user.nickname);
        users.insert(stored.email().clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        Ok(self.users.read().await.contains_key(email))
    }
}
