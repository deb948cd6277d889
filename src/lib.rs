//! Sapunoa: the product landing page and its status endpoint.
//!
//! The crate renders localized marketing pages from Tera templates, serves
//! static assets, and answers `GET /api/status` with the service identity and
//! a fresh timestamp. Two development listeners are available from the CLI.

pub mod classnames;
pub mod config;
pub mod error;
pub mod http;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod templates;

pub use error::AppError;
pub use routes::{create_diagnostic_router, create_router};
pub use state::AppState;
