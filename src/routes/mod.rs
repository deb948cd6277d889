//! HTTP route handlers for the site.
//!
//! Pages and static assets get per-route Cache-Control headers; the status
//! endpoint is never cached. Request tracing is enabled via middleware that
//! generates a unique request ID for each incoming request.

pub mod diagnostic;
pub mod pages;
pub mod status;

use axum::{middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_PAGE, CACHE_CONTROL_STATIC, CACHE_CONTROL_STATUS};
use crate::error::AppError;
use crate::http::static_files::{create_file_service, create_static_service};
use crate::i18n::Locale;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Insert the values every page template expects.
///
/// - `site`: site name and version
/// - `t`: copy for the active locale
/// - `locale`: active locale code
/// - `locales`: all locale codes, for the language switcher
/// - `page_path`: path of the page below the locale prefix (`""` for home)
pub fn insert_page_context(
    context: &mut tera::Context,
    state: &AppState,
    locale: Locale,
    page_path: &str,
) {
    context.insert("site", &state.config.site);
    context.insert("t", locale.messages());
    context.insert("locale", locale.code());
    context.insert(
        "locales",
        &Locale::ALL.iter().map(|l| l.code()).collect::<Vec<_>>(),
    );
    context.insert("page_path", page_path);
}

/// Resolve a locale path segment, rejecting unknown codes with a 404.
pub fn parse_locale(code: &str) -> Result<Locale, AppError> {
    Locale::from_code(code).ok_or_else(|| AppError::LocaleNotFound(code.to_string()))
}

/// Creates the Axum router with all site routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/test", get(pages::test_page))
        .route("/{locale}", get(pages::home))
        .route("/{locale}/login", get(pages::login))
        .route("/{locale}/register", get(pages::register))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ));

    // Status - never cached, the timestamp must be fresh
    let status_routes = Router::new()
        .route("/api/status", get(status::status))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATUS),
        ));

    let static_routes = Router::new()
        .nest_service("/static", create_static_service(&state.config.site))
        .route_service(
            "/favicon.svg",
            create_file_service(&state.config.site, "favicon.svg"),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(page_routes)
        .merge(status_routes)
        .merge(static_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_id_layer))
}

/// Creates the router for the diagnostic echo server.
pub fn create_diagnostic_router() -> Router {
    Router::new()
        .fallback(diagnostic::echo)
        .layer(middleware::from_fn(request_id_layer))
}
