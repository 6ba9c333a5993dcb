use std::collections::HashMap;

use booklog_core::{Book, BookId, Nickname, Page, UserId, UserStore};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::use_cases::BookUseCaseError;

/// Outward representation of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub read_date: Option<NaiveDate>,
    pub cover_image_url: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub before_thoughts: Option<String>,
    pub after_thoughts: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
    pub user_nickname: String,
}

impl BookView {
    pub fn from_book(book: Book, owner_nickname: &Nickname) -> Self {
        Self {
            id: book.id,
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            publisher: book.publisher,
            read_date: book.read_date,
            cover_image_url: book.cover_image_path.as_ref().map(|p| p.public_url()),
            description: book.description,
            review: book.review,
            before_thoughts: book.before_thoughts,
            after_thoughts: book.after_thoughts,
            is_public: book.is_public,
            created_at: book.created_at,
            updated_at: book.updated_at,
            user_id: book.owner_id,
            user_nickname: owner_nickname.as_str().to_string(),
        }
    }
}

/// Resolves owner nicknames and projects books into views.
pub struct BookPresenter<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> BookPresenter<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    pub async fn present(&self, book: Book) -> Result<BookView, BookUseCaseError> {
        let owner = self.user_store.find_by_id(book.owner_id).await?;
        Ok(BookView::from_book(book, owner.nickname()))
    }

    /// Listing pages hold one owner's books, so this is usually a single lookup.
    pub async fn present_page(
        &self,
        mut page: Page<Book>,
    ) -> Result<Page<BookView>, BookUseCaseError> {
        let mut nicknames: HashMap<UserId, Nickname> = HashMap::new();
        let books = std::mem::take(&mut page.content);
        let mut views = Vec::with_capacity(books.len());

        for book in books {
            let nickname = match nicknames.get(&book.owner_id) {
                Some(nickname) => nickname.clone(),
                None => {
                    let owner = self.user_store.find_by_id(book.owner_id).await?;
                    nicknames.insert(owner.id(), owner.nickname().clone());
                    owner.nickname().clone()
                }
            };
            views.push(BookView::from_book(book, &nickname));
        }

        Ok(page.with_content(views))
    }
}
