pub mod book;
pub mod book_query;
pub mod cover_image;
pub mod email;
pub mod identity;
pub mod ids;
pub mod nickname;
pub mod page;
pub mod password;
pub mod user;
