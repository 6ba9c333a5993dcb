use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use booklog_core::{
    Book, BookDraft, BookId, BookQuery, BookStore, BookStoreError, CoverImagePath, Page, SortKey,
    UserId,
};
use chrono::Utc;

#[derive(Default, Clone)]
pub struct HashMapBookStore {
    books: Arc<RwLock<HashMap<BookId, Book>>>,
    last_id: Arc<AtomicI64>,
}

impl HashMapBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Title and author order ignores case, matching `lower(..)` in the Postgres store.
fn compare_ignoring_case(a: &str, b: &str) -> CmpOrdering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(sort: SortKey, a: &Book, b: &Book) -> CmpOrdering {
    match sort {
        SortKey::Title => compare_ignoring_case(a.title.as_str(), b.title.as_str())
            .then(a.id.cmp(&b.id)),
        SortKey::Author => compare_ignoring_case(a.author.as_str(), b.author.as_str())
            .then(a.id.cmp(&b.id)),
        SortKey::Newest => b
            .created_at
            .cmp(&a.created_at)
            .then(b.id.cmp(&a.id)),
    }
}

#[async_trait::async_trait]
impl BookStore for HashMapBookStore {
    async fn insert(
        &self,
        owner_id: UserId,
        draft: BookDraft,
        cover_image_path: Option<CoverImagePath>,
    ) -> Result<Book, BookStoreError> {
        let mut books = self.books.write().await;
        let id = BookId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();
        let book = Book {
            id,
            owner_id,
            title: draft.title,
            author: draft.author,
            publisher: draft.publisher,
            read_date: draft.read_date,
            cover_image_path,
            description: draft.description,
            review: draft.review,
            before_thoughts: draft.before_thoughts,
            after_thoughts: draft.after_thoughts,
            is_public: draft.is_public,
            created_at: now,
            updated_at: now,
        };
        books.insert(id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, BookStoreError> {
        let books = self.books.read().await;
        books.get(&id).cloned().ok_or(BookStoreError::BookNotFound)
    }

    async fn update(&self, book: Book) -> Result<Book, BookStoreError> {
        let mut books = self.books.write().await;
        let stored = books
            .get_mut(&book.id)
            .filter(|stored| stored.owner_id == book.owner_id)
            .ok_or(BookStoreError::BookNotFound)?;

        let created_at = stored.created_at;
        *stored = Book {
            created_at,
            updated_at: Utc::now(),
            ..book
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: BookId, owner_id: UserId) -> Result<(), BookStoreError> {
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
        let books = self.books.read().await;
        let mut matching: Vec<&Book> = books
            .values()
            .filter(|book| book.owner_id == owner_id)
            .filter(|book| {
                query.search.as_ref().is_none_or(|term| {
                    term.matches(book.title.as_str()) || term.matches(book.author.as_str())
                })
            })
            .collect();
        matching.sort_by(|a, b| compare(query.sort, a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(query.page.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, query.page, total))
    }
}
