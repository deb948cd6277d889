//! Handlers for the marketing pages.
//!
//! Every page is a template rendered with the copy of one locale. The auth
//! pages are layout shells only; their forms post nowhere.

use axum::{
    extract::{Path, State},
    response::Html,
    Extension,
};
use tracing::instrument;

use super::{insert_page_context, parse_locale};
use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::i18n::Locale;
use crate::middleware::RequestId;
use crate::state::AppState;

fn render(
    state: &AppState,
    request_id: &RequestId,
    template: &str,
    locale: Locale,
    path: &str,
) -> Result<Html<String>, AppErrorResponse> {
    let mut context = tera::Context::new();
    insert_page_context(&mut context, state, locale, path);

    let html = state
        .tera
        .render(template, &context)
        .map_err(AppError::from)
        .with_request_id(request_id)?;
    Ok(Html(html))
}

/// Landing page in the configured default locale.
#[instrument(name = "pages::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let locale = state.config.default_locale();
    render(&state, &request_id, "home.html", locale, "")
}

/// Landing page in the locale named by the path.
#[instrument(name = "pages::home", skip(state, request_id))]
pub async fn home(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppErrorResponse> {
    let locale = parse_locale(&locale).with_request_id(&request_id)?;
    render(&state, &request_id, "home.html", locale, "")
}

#[instrument(name = "pages::login", skip(state, request_id))]
pub async fn login(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppErrorResponse> {
    let locale = parse_locale(&locale).with_request_id(&request_id)?;
    render(&state, &request_id, "auth/login.html", locale, "/login")
}

#[instrument(name = "pages::register", skip(state, request_id))]
pub async fn register(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(locale): Path<String>,
) -> Result<Html<String>, AppErrorResponse> {
    let locale = parse_locale(&locale).with_request_id(&request_id)?;
    render(&state, &request_id, "auth/register.html", locale, "/register")
}

/// Test fixture page with upload and analysis placeholder copy.
#[instrument(name = "pages::test_page", skip(state, request_id))]
pub async fn test_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppErrorResponse> {
    let locale = state.config.default_locale();
    render(&state, &request_id, "test.html", locale, "")
}
