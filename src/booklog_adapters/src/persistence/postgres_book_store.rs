use booklog_core::{
    Book, BookAuthor, BookDraft, BookId, BookQuery, BookStore, BookStoreError, BookTitle,
    CoverImagePath, Page, SortKey, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

use super::like_pattern;

const BOOK_COLUMNS: &str = "id, user_id, title, author, publisher, read_date, cover_image_path, \
     description, review, before_thoughts, after_thoughts, is_public, created_at, updated_at";

// $1 owner, $2 optional ILIKE pattern
const OWNER_FILTER: &str =
    "WHERE user_id = $1 AND ($2::text IS NULL OR title ILIKE $2 OR author ILIKE $2)";

#[derive(FromRow)]
struct BookRow {
    id: i64,
    user_id: i64,
    title: String,
    author: String,
    publisher: Option<String>,
    read_date: Option<NaiveDate>,
    cover_image_path: Option<String>,
    description: Option<String>,
    review: Option<String>,
    before_thoughts: Option<String>,
    after_thoughts: Option<String>,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = BookStoreError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let unexpected = |e: booklog_core::BookError| BookStoreError::UnexpectedError(e.to_string());
        Ok(Book {
            id: BookId::new(row.id),
            owner_id: UserId::new(row.user_id),
            title: BookTitle::parse(&row.title).map_err(unexpected)?,
            author: BookAuthor::parse(&row.author).map_err(unexpected)?,
            publisher: row.publisher,
            read_date: row.read_date,
            cover_image_path: row.cover_image_path.map(CoverImagePath::new),
            description: row.description,
            review: row.review,
            before_thoughts: row.before_thoughts,
            after_thoughts: row.after_thoughts,
            is_public: row.is_public,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn order_by(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Title => "lower(title) ASC, id ASC",
        SortKey::Author => "lower(author) ASC, id ASC",
        SortKey::Newest => "created_at DESC, id DESC",
    }
}

fn unexpected(e: sqlx::Error) -> BookStoreError {
    BookStoreError::UnexpectedError(e.to_string())
}

#[derive(Clone)]
pub struct PostgresBookStore {
    pool: PgPool,
}

impl PostgresBookStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresBookStore { pool }
    }
}

#[async_trait::async_trait]
impl BookStore for PostgresBookStore {
    #[tracing::instrument(name = "Inserting book into PostgreSQL", skip_all, fields(owner_id = %owner_id))]
    async fn insert(
        &self,
        owner_id: UserId,
        draft: BookDraft,
        cover_image_path: Option<CoverImagePath>,
    ) -> Result<Book, BookStoreError> {
        let sql = format!(
            "INSERT INTO books (user_id, title, author, publisher, read_date, cover_image_path, \
             description, review, before_thoughts, after_thoughts, is_public) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {BOOK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(owner_id.as_i64())
            .bind(draft.title.as_str())
            .bind(draft.author.as_str())
            .bind(draft.publisher)
            .bind(draft.read_date)
            .bind(cover_image_path.as_ref().map(CoverImagePath::as_str))
            .bind(draft.description)
            .bind(draft.review)
            .bind(draft.before_thoughts)
            .bind(draft.after_thoughts)
            .bind(draft.is_public)
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving book from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: BookId) -> Result<Book, BookStoreError> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1");
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(BookStoreError::BookNotFound);
        };
        row.try_into()
    }

    #[tracing::instrument(name = "Updating book in PostgreSQL", skip_all, fields(book_id = %book.id))]
    async fn update(&self, book: Book) -> Result<Book, BookStoreError> {
        let sql = format!(
            "UPDATE books SET title = $3, author = $4, publisher = $5, read_date = $6, \
             cover_image_path = $7, description = $8, review = $9, before_thoughts = $10, \
             after_thoughts = $11, is_public = $12, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {BOOK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(book.id.as_i64())
            .bind(book.owner_id.as_i64())
            .bind(book.title.as_str())
            .bind(book.author.as_str())
            .bind(book.publisher)
            .bind(book.read_date)
            .bind(book.cover_image_path.as_ref().map(CoverImagePath::as_str))
            .bind(book.description)
            .bind(book.review)
            .bind(book.before_thoughts)
            .bind(book.after_thoughts)
            .bind(book.is_public)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(BookStoreError::BookNotFound);
        };
        row.try_into()
    }

    #[tracing::instrument(name = "Deleting book from PostgreSQL", skip(self))]
    async fn delete(&self, id: BookId, owner_id: UserId) -> Result<(), BookStoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND user_id = $2")
            .bind(id.as_i64())
            .bind(owner_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(BookStoreError::BookNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Listing books from PostgreSQL", skip(self))]
    async fn find_by_owner(
        &self,
        owner_id: UserId,
        query: &BookQuery,
    ) -> Result<Page<Book>, BookStoreError> {
        let pattern = query.search.as_ref().map(|term| like_pattern(term.as_str()));

        let count_sql = format!("SELECT COUNT(*) FROM books {OWNER_FILTER}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(owner_id.as_i64())
            .bind(pattern.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        let list_sql = format!(
            "SELECT {BOOK_COLUMNS} FROM books {OWNER_FILTER} ORDER BY {} LIMIT $3 OFFSET $4",
            order_by(query.sort)
        );
        let offset = i64::try_from(query.page.offset()).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, BookRow>(&list_sql)
            .bind(owner_id.as_i64())
            .bind(pattern.as_deref())
            .bind(i64::from(query.page.size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        let content = rows
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(
            content,
            query.page,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}
