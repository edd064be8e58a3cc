//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata.
//!
//! ## Account Recovery Flows
//!
//! ### Forgot password
//!
//! 1. **Request:** The client POSTs `{email}` to `/password/forgot`.
//! 2. **Mail:** The API sends a link to `/reset-password?token=…`.
//!
//! ### Reset password
//!
//! 1. **Token:** The reset screen reads `token` from its query string at submit time.
//! 2. **Reset:** The client POSTs `{password, password_confirmation, token}` to
//!    `/password/reset` and returns the user to the sign-in page.
//!
//! ### Sign up
//!
//! The client POSTs `{name, email, password}` to `/users`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging request
//! bodies.

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;

/// Commit the bundle was built from, `unknown` outside a git checkout.
pub const GIT_COMMIT_HASH: &str = env!("GOBARBER_WEB_GIT_SHA");

pub use api::ApiTransport;
pub use errors::AppError;
