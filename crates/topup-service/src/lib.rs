//! DS Store HTTP API service.
//!
//! This crate provides the HTTP API for the top-up storefront, including:
//!
//! - Catalog browsing (games and currency bundles)
//! - Order checkout with the unique-code pricing scheme
//! - Order tracking and the admin status workflow
//!
//! The API is unauthenticated: the admin panel gate lives in the frontend
//! only.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
