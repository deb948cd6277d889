//! HTTP server module.
//!
//! Plain HTTP listeners for the site and the development bootstraps, with
//! graceful shutdown on SIGTERM/SIGINT. TLS is expected to terminate at a
//! reverse proxy in front of the site.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};
