use std::path::PathBuf;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header, request},
    middleware,
    routing::{delete, get, post, put},
};
use booklog_adapters::ApplicationSettings;
use booklog_axum::{
    access_gate,
    routes::{create_book, delete_book, get_book, list_books, login, register, update_book},
};
use booklog_core::{BookStore, CoverImageStore, PasswordHasher, TokenService, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Deployment knobs for the HTTP surface.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub assets_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl From<&ApplicationSettings> for ServiceOptions {
    fn from(settings: &ApplicationSettings) -> Self {
        Self {
            assets_dir: settings.assets_dir.clone(),
            uploads_dir: settings.uploads_dir.clone(),
            max_upload_bytes: settings.max_upload_bytes,
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            allowed_origins: settings.allowed_origins.clone(),
        }
    }
}

/// The booklog HTTP service: auth and book routes, cover images, static assets.
pub struct BooklogService {
    router: Router,
    allowed_origins: Vec<HeaderValue>,
    request_timeout: Duration,
}

impl BooklogService {
    /// Wires every route to its use cases.
    ///
    /// Stores are `Clone` via an internal `Arc` or pool, so each route only
    /// gets the state it needs.
    pub fn new<U, B, H, T, C>(
        user_store: U,
        book_store: B,
        hasher: H,
        token_service: T,
        cover_store: C,
        options: ServiceOptions,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        B: BookStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenService + Clone + 'static,
        C: CoverImageStore + Clone + 'static,
    {
        let images_service = ServeDir::new(&options.uploads_dir);
        let assets_service = ServeDir::new(&options.assets_dir)
            .fallback(ServeFile::new(options.assets_dir.join("index.html")));

        let reader_state = (user_store.clone(), book_store.clone());
        let writer_state = (user_store.clone(), book_store.clone(), cover_store.clone());

        let router = Router::new()
            // Registration needs the user store and hasher
            .route(
                "/api/auth/register",
                post(register::<U, H>).with_state((user_store.clone(), hasher.clone())),
            )
            // Login also issues tokens
            .route(
                "/api/auth/login",
                post(login::<U, H, T>).with_state((user_store, hasher, token_service.clone())),
            )
            .route(
                "/api/books",
                post(create_book::<U, B, C>)
                    .with_state(writer_state.clone())
                    .merge(get(list_books::<U, B>).with_state(reader_state.clone())),
            )
            .route(
                "/api/books/{id}",
                get(get_book::<U, B>)
                    .with_state(reader_state)
                    .merge(put(update_book::<U, B, C>).with_state(writer_state))
                    .merge(delete(delete_book::<B, C>).with_state((book_store, cover_store))),
            )
            .nest_service("/api/images", images_service)
            .route("/health", get(|| async { "OK" }))
            .fallback_service(assets_service)
            .layer(DefaultBodyLimit::max(options.max_upload_bytes))
            .layer(middleware::from_fn_with_state(token_service, access_gate::<T>));

        let allowed_origins = options
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        Self {
            router,
            allowed_origins,
            request_timeout: options.request_timeout,
        }
    }

    fn with_cors_layer(mut self) -> Self {
        if self.allowed_origins.is_empty() {
            return self;
        }

        let allowed_origins = self.allowed_origins.clone();
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts: &request::Parts| {
                    allowed_origins.contains(origin)
                },
            ));

        self.router = self.router.layer(cors);
        self
    }

    fn with_timeout_layer(mut self) -> Self {
        self.router = self.router.layer(TimeoutLayer::new(self.request_timeout));
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// The fully layered router, ready to be served or nested.
    pub fn into_router(self) -> Router {
        self.with_cors_layer()
            .with_timeout_layer()
            .with_trace_layer()
            .router
    }

    /// Run the service as a standalone server
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Booklog service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
