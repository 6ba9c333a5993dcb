pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    book::{Book, BookAuthor, BookDraft, BookError, BookTitle},
    book_query::{BookQuery, PageRequest, SearchTerm, SortKey},
    cover_image::{CoverImage, CoverImagePath},
    email::Email,
    identity::AuthenticatedUser,
    ids::{BookId, UserId},
    nickname::Nickname,
    page::Page,
    password::{Password, PasswordDigest},
    user::{NewUser, User, UserError, UserSummary},
};

pub use ports::{
    repositories::{BookStore, BookStoreError, UserStore, UserStoreError},
    services::{
        CoverImageStore, CoverImageStoreError, IssuedToken, PasswordHasher, PasswordHasherError,
        TokenError, TokenService,
    },
};

pub use http_abstraction::AuthRequest;
