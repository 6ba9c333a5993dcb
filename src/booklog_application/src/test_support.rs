//! In-memory port doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use booklog_core::{
    AuthenticatedUser, Book, BookAuthor, BookDraft, BookId, BookQuery, BookStore, BookStoreError,
    BookTitle, CoverImage, CoverImagePath, CoverImageStore, CoverImageStoreError, Email, IssuedToken,
    NewUser, Nickname, Page, Password, PasswordDigest, PasswordHasher, PasswordHasherError,
    TokenError, TokenService, User, UserId, UserStore, UserStoreError,
};
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

pub fn identity(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id),
        email: email(&format!("user{id}@example.com")),
    }
}

pub fn draft(title: &str, author: &str) -> BookDraft {
    BookDraft::new(
        BookTitle::parse(title).unwrap(),
        BookAuthor::parse(author).unwrap(),
    )
}

pub fn cover(name: &str) -> CoverImage {
    CoverImage {
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
        file_name: Some(name.to_string()),
    }
}

pub fn book_owned_by(owner: UserId, is_public: bool) -> Book {
    let now = Utc::now();
    let mut draft = draft("Dune", "Frank Herbert");
    draft.is_public = is_public;
    Book {
        id: BookId::new(1),
        owner_id: owner,
        title: draft.title,
        author: draft.author,
        publisher: None,
        read_date: None,
        cover_image_path: None,
        description: None,
        review: None,
        before_thoughts: None,
        after_thoughts: None,
        is_public: draft.is_public,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct MockUserStore {
    users: RwLock<HashMap<UserId, User>>,
    next_id: AtomicI64,
}

impl MockUserStore {
    pub async fn with_user(id: i64, email_raw: &str, digest: &str, nickname: &str) -> Self {
        let store = Self::default();
        let user = User::new(
            UserId::new(id),
            email(email_raw),
            PasswordDigest::new(Secret::new(digest.to_string())),
            Nickname::parse(nickname).unwrap(),
        );
        store.users.write().await.insert(user.id(), user);
        store.next_id.store(id, Ordering::SeqCst);
        store
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == &user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = User::new(id, user.email, user.password_digest, user.nickname);
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserStoreError> {
        Ok(self.users.read().await.values().any(|u| u.email() == email))
    }
}

/// Hashes by prefixing, and counts calls so tests can see the hasher ran.
#[derive(Default)]
pub struct MockPasswordHasher {
    pub hash_calls: AtomicUsize,
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(PasswordDigest::new(Secret::new(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool {
        digest.as_ref().expose_secret() == &format!("hashed:{}", password.as_ref().expose_secret())
    }
}

pub struct MockTokenService;

impl TokenService for MockTokenService {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, TokenError> {
        Ok(IssuedToken {
            token: Secret::new(format!("token-{}", user.id)),
            expires_at: Utc::now(),
        })
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        match token {
            "expired" => Err(TokenError::Expired),
            t => t
                .strip_prefix("token-")
                .and_then(|id| id.parse::<i64>().ok())
                .map(identity)
                .ok_or(TokenError::Malformed),
        }
    }
}

#[derive(Default)]
pub struct MockBookStore {
    books: RwLock<HashMap<BookId, Book>>,
    next_id: AtomicI64,
    pub fail_writes: AtomicBool,
}

impl MockBookStore {
    pub async fn get(&self, id: BookId) -> Option<Book> {
        self.books.read().await.get(&id).cloned()
    }

    fn write_guard(&self) -> Result<(), BookStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(BookStoreError::UnexpectedError("write failed".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn insert(
        &self,
        owner_id: UserId,
        draft: BookDraft,
        cover_image_path: Option<CoverImagePath>,
    ) -> Result<Book, BookStoreError> {
        self.write_guard()?;
        let now = Utc::now();
        let id = BookId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut book = book_owned_by(owner_id, draft.is_public);
        book.id = id;
        book.created_at = now;
        book.updated_at = now;
        book.cover_image_path = cover_image_path;
        draft.apply_to(&mut book);
        self.books.write().await.insert(id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, BookStoreError> {
        self.get(id).await.ok_or(BookStoreError::BookNotFound)
    }

    async fn update(&self, mut book: Book) -> Result<Book, BookStoreError> {
        self.write_guard()?;
        let mut books = self.books.write().await;
        match books.get(&book.id) {
            Some(existing) if existing.owner_id == book.owner_id => {
                book.created_at = existing.created_at;
                book.updated_at = Utc::now();
                books.insert(book.id, book.clone());
                Ok(book)
            }
            _ => Err(BookStoreError::BookNotFound),
        }
    }

    async fn delete(&self, id: BookId, owner_id: UserId) -> Result<(), BookStoreError> {
        self.write_guard()?;
        let mut books = self.books.write().await;
        match books.get(&id) {
            Some(book) if book.owner_id == owner_id => {
                books.remove(&id);
                Ok(())
            }
            _ => Err(BookStoreError::BookNotFound),
        }
    }

    async fn find_by_owner(
        &self,
        owner_id: UserId,
        query: &BookQuery,
    ) -> Result<Page<Book>, BookStoreError> {
        let mut owned: Vec<Book> = self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|b| b.id);
        let total = owned.len() as u64;
        Ok(Page::new(owned, query.page, total))
    }
}

#[derive(Default)]
pub struct MockCoverImageStore {
    pub saved: std::sync::Mutex<Vec<CoverImagePath>>,
    pub removed: std::sync::Mutex<Vec<CoverImagePath>>,
    pub fail_saves: AtomicBool,
}

impl MockCoverImageStore {
    pub fn saved(&self) -> Vec<CoverImagePath> {
        self.saved.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<CoverImagePath> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoverImageStore for MockCoverImageStore {
    async fn save(&self, image: CoverImage) -> Result<CoverImagePath, CoverImageStoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(CoverImageStoreError::Io("disk full".into()));
        }
        let path = CoverImagePath::new(image.file_name.unwrap_or_else(|| "cover".into()));
        self.saved.lock().unwrap().push(path.clone());
        Ok(path)
    }

    async fn remove(&self, path: &CoverImagePath) -> Result<(), CoverImageStoreError> {
        self.removed.lock().unwrap().push(path.clone());
        Ok(())
    }
}
