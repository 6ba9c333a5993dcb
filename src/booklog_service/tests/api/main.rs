mod auth;
mod books;
mod static_routes;
