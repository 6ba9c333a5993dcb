//! Book routes. All of them run behind the access gate.

use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{PathRejection, QueryRejection},
    },
};
use booklog_application::{
    BookPresenter, BookView, CreateBookUseCase, DeleteBookUseCase, GetBookUseCase,
    ListBooksUseCase, UpdateBookUseCase,
};
use booklog_core::{
    BookId, BookQuery, BookStore, CoverImageStore, Page, PageRequest, SearchTerm, SortKey,
    UserStore,
};
use serde::Deserialize;

use super::book_form::{BookUpload, read_book_upload};
use crate::{
    error::{ApiError, MessageResponse},
    extractors::CurrentUser,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<ListBooksParams> for BookQuery {
    fn from(params: ListBooksParams) -> Self {
        BookQuery {
            search: SearchTerm::parse(params.search.as_deref()),
            sort: SortKey::from_param(params.sort_by.as_deref()),
            page: PageRequest::new(params.page, params.size),
        }
    }
}

#[tracing::instrument(name = "Create book", skip_all)]
pub async fn create_book<U, B, C>(
    State((user_store, book_store, cover_store)): State<(U, B, C)>,
    CurrentUser(caller): CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BookView>, ApiError>
where
    U: UserStore + Clone + 'static,
    B: BookStore + Clone + 'static,
    C: CoverImageStore + Clone + 'static,
{
    let BookUpload { draft, cover } = read_book_upload(multipart?).await?;

    let book = CreateBookUseCase::new(&book_store, &cover_store)
        .execute(&caller, draft, cover)
        .await?;

    Ok(Json(BookPresenter::new(&user_store).present(book).await?))
}

#[tracing::instrument(name = "Update book", skip_all)]
pub async fn update_book<U, B, C>(
    State((user_store, book_store, cover_store)): State<(U, B, C)>,
    CurrentUser(caller): CurrentUser,
    book_id: Result<Path<i64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BookView>, ApiError>
where
    U: UserStore + Clone + 'static,
    B: BookStore + Clone + 'static,
    C: CoverImageStore + Clone + 'static,
{
    let Path(book_id) = book_id?;
    let BookUpload { draft, cover } = read_book_upload(multipart?).await?;

    let book = UpdateBookUseCase::new(&book_store, &cover_store)
        .execute(&caller, BookId::new(book_id), draft, cover)
        .await?;

    Ok(Json(BookPresenter::new(&user_store).present(book).await?))
}

#[tracing::instrument(name = "Delete book", skip_all)]
pub async fn delete_book<B, C>(
    State((book_store, cover_store)): State<(B, C)>,
    CurrentUser(caller): CurrentUser,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError>
where
    B: BookStore + Clone + 'static,
    C: CoverImageStore + Clone + 'static,
{
    let Path(book_id) = book_id?;

    DeleteBookUseCase::new(&book_store, &cover_store)
        .execute(&caller, BookId::new(book_id))
        .await?;

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

#[tracing::instrument(name = "Get book", skip_all)]
pub async fn get_book<U, B>(
    State((user_store, book_store)): State<(U, B)>,
    CurrentUser(caller): CurrentUser,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookView>, ApiError>
where
    U: UserStore + Clone + 'static,
    B: BookStore + Clone + 'static,
{
    let Path(book_id) = book_id?;

    let book = GetBookUseCase::new(&book_store)
        .execute(&caller, BookId::new(book_id))
        .await?;

    Ok(Json(BookPresenter::new(&user_store).present(book).await?))
}

#[tracing::instrument(name = "List books", skip_all)]
pub async fn list_books<U, B>(
    State((user_store, book_store)): State<(U, B)>,
    CurrentUser(caller): CurrentUser,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<Page<BookView>>, ApiError>
where
    U: UserStore + Clone + 'static,
    B: BookStore + Clone + 'static,
{
    let Query(params) = params?;

    let page = ListBooksUseCase::new(&book_store)
        .execute(&caller, params.into())
        .await?;

    Ok(Json(BookPresenter::new(&user_store).present_page(page).await?))
}
