//! GoBarber web client: password recovery, password reset, and sign-up.
//!
//! The validation and submission logic is platform independent and lives in
//! [`forms`] and [`features`]; the Leptos views that drive it are compiled for
//! `wasm32` only.

pub mod app_lib;
pub mod features;
pub mod forms;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
