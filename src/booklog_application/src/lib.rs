pub mod access_gate;
pub mod book_access;
pub mod book_view;
mod cover_images;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use access_gate::{AccessGate, AccessGateError, GateDecision, is_public_route};
pub use book_access::{ensure_owner, ensure_visible_to};
pub use book_view::{BookPresenter, BookView};
pub use use_cases::{
    BookUseCaseError,
    create_book::CreateBookUseCase,
    delete_book::DeleteBookUseCase,
    get_book::GetBookUseCase,
    list_books::ListBooksUseCase,
    login::{LoginError, LoginOutcome, LoginUseCase},
    signup::{SignupError, SignupUseCase},
    update_book::UpdateBookUseCase,
};
